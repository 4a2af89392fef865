//! Closed intervals of dates, times and datetimes.

use crate::datetime::Difference;
use crate::{Date, DateTime, Precision, Time};

/// A range of dates.
pub type DateRange = Range<Date>;

/// A range of times within one day.
pub type TimeRange<P> = Range<Time<P>>;

/// A range of datetimes.
pub type DateTimeRange<P> = Range<DateTime<P>>;

/// Types with a notion of distance between two values.
pub trait Distance {
    type Output;

    /// Returns the distance between two values. The order of the operands
    /// does not matter.
    fn distance(&self, other: &Self) -> Self::Output;
}

impl Distance for Date {
    /// Days.
    type Output = u32;

    fn distance(&self, other: &Self) -> u32 {
        self.days_between(other)
    }
}

impl<P: Precision> Distance for Time<P> {
    /// Units of the precision.
    type Output = u64;

    fn distance(&self, other: &Self) -> u64 {
        self.difference(other)
    }
}

impl<P: Precision> Distance for DateTime<P> {
    type Output = Difference<P>;

    fn distance(&self, other: &Self) -> Difference<P> {
        DateTime::difference(self, other)
    }
}

/// A closed interval from `start` to `stop`, both included.
///
/// A range is not required to be valid, a `start` later than its `stop` is
/// allowed and can be detected with [`Range::is_valid`].
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Range<T> {
    start: T,
    stop: T,
}

impl<T: Ord + Copy> Range<T> {
    pub fn new(start: T, stop: T) -> Self {
        Self { start, stop }
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn stop(&self) -> T {
        self.stop
    }

    pub fn set_start(&mut self, start: T) {
        self.start = start;
    }

    pub fn set_stop(&mut self, stop: T) {
        self.stop = stop;
    }

    /// Returns true if `start <= stop`.
    pub fn is_valid(&self) -> bool {
        self.start <= self.stop
    }

    /// Returns true if the value lies within the range, including either end.
    pub fn is_within(&self, value: &T) -> bool {
        self.start <= *value && *value <= self.stop
    }

    /// Returns true if the ranges share at least one value. Ranges which only
    /// touch at their ends overlap.
    pub fn is_overlapped(&self, other: &Self) -> bool {
        self.start <= other.stop && self.stop >= other.start
    }

    /// Returns the range shared by both ranges, if any.
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        if !self.is_overlapped(other) {
            return None;
        }

        Some(Self {
            start: self.start.max(other.start),
            stop: self.stop.min(other.stop),
        })
    }
}

impl<T: Ord + Copy + Distance> Range<T> {
    /// Returns the distance from `start` to `stop`.
    pub fn length(&self) -> T::Output {
        self.start.distance(&self.stop)
    }
}

impl Range<Date> {
    /// Returns the number of days from `start` to `stop`.
    pub fn days(&self) -> u32 {
        self.length()
    }
}

impl<P: Precision> Range<Time<P>> {
    /// Returns the number of units from `start` to `stop`.
    pub fn difference(&self) -> u64 {
        self.length()
    }
}

impl<P: Precision> Range<DateTime<P>> {
    /// Returns the span from `start` to `stop`.
    pub fn difference(&self) -> Difference<P> {
        self.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateTimeMs, TimeMs};
    use rand::{Rng, SeedableRng};

    fn date_range(start: (u8, u8, u16), stop: (u8, u8, u16)) -> DateRange {
        DateRange::new(
            Date::new(start.0, start.1, start.2),
            Date::new(stop.0, stop.1, stop.2),
        )
    }

    #[test]
    fn validity() {
        assert!(!date_range((1, 1, 1998), (31, 12, 1997)).is_valid());
        assert!(date_range((1, 1, 1998), (1, 1, 1998)).is_valid());
        assert!(DateRange::default().is_valid());
    }

    #[test]
    fn within() {
        let range = date_range((1, 1, 1998), (31, 12, 1998));
        assert!(range.is_within(&Date::new(1, 1, 1998)));
        assert!(range.is_within(&Date::new(31, 12, 1998)));
        assert!(range.is_within(&Date::new(15, 6, 1998)));
        assert!(!range.is_within(&Date::new(1, 1, 1999)));
        assert!(!range.is_within(&Date::new(31, 12, 1997)));
    }

    #[test]
    fn overlap() {
        let a = date_range((1, 1, 1998), (30, 6, 1998));
        let b = date_range((1, 6, 1998), (31, 12, 1998));
        assert!(a.is_overlapped(&b));
        assert_eq!(a.overlap(&b), Some(date_range((1, 6, 1998), (30, 6, 1998))));

        // touching ends
        let c = date_range((30, 6, 1998), (1, 7, 1998));
        assert_eq!(a.overlap(&c), Some(date_range((30, 6, 1998), (30, 6, 1998))));

        let d = date_range((1, 7, 1998), (2, 7, 1998));
        assert!(!a.is_overlapped(&d));
        assert_eq!(a.overlap(&d), None);

        // containment
        let e = date_range((1, 2, 1998), (1, 3, 1998));
        assert_eq!(a.overlap(&e), Some(e));
    }

    #[test]
    fn overlap_symmetry() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        for _ in 0..10_000 {
            let mut times: Vec<TimeMs> = (0..4)
                .map(|_| TimeMs::from_units(rng.gen_range(0..1_000)))
                .collect();
            times[..2].sort();
            times[2..].sort();

            let a = Range::new(times[0], times[1]);
            let b = Range::new(times[2], times[3]);

            assert_eq!(a.is_overlapped(&b), b.is_overlapped(&a));
            assert_eq!(a.overlap(&b), b.overlap(&a));
            if let Some(overlap) = a.overlap(&b) {
                assert!(overlap.is_valid());
                assert!(a.is_within(&overlap.start()) && b.is_within(&overlap.stop()));
            }
        }
    }

    #[test]
    fn lengths() {
        assert_eq!(date_range((1, 1, 1998), (1, 1, 1999)).days(), 365);
        assert_eq!(date_range((1, 1, 1996), (1, 1, 1997)).days(), 366);

        let range = Range::new(TimeMs::new(10, 0, 0, 0), TimeMs::new(10, 0, 1, 1));
        assert_eq!(range.difference(), 1_001);

        let range = Range::new(
            DateTimeMs::new(Date::new(1, 1, 1998), TimeMs::new(23, 0, 0, 0)),
            DateTimeMs::new(Date::new(2, 1, 1998), TimeMs::new(1, 0, 0, 0)),
        );
        let diff = range.difference();
        assert_eq!(diff.days(), 0);
        assert_eq!(diff.units(), 2 * 60 * 60 * 1_000);
    }
}
