use core::ops::{Add, AddAssign, Div, Sub, SubAssign};

use calendar::{Precision, Time};

use crate::NANOS_PER_SEC;

/// A span of elapsed time in whole nanoseconds, held in a `u64`. This means
/// that the max duration is ~584 years.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    pub(crate) ns: u64,
}

impl Duration {
    pub const ZERO: Duration = Duration { ns: 0 };

    pub const MAX: Duration = Duration { ns: u64::MAX };

    pub fn from_secs(secs: u32) -> Self {
        Self {
            ns: secs as u64 * NANOS_PER_SEC,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self {
            ns: millis * 1_000_000,
        }
    }

    pub fn from_nanos(nanos: u64) -> Self {
        Self { ns: nanos }
    }

    pub fn as_nanos(&self) -> u64 {
        self.ns
    }

    pub fn as_secs_f64(&self) -> f64 {
        (self.ns / NANOS_PER_SEC) as f64 + (self.ns % NANOS_PER_SEC) as f64 / 1e9
    }

    /// Returns the duration in units of the precision, truncating any
    /// remainder.
    pub fn as_units<P: Precision>(&self) -> u64 {
        self.ns / P::NANOS_PER_UNIT
    }

    /// Returns the duration as a time of day, as if it had started at
    /// midnight. Durations of a day or more become the last unit of the day.
    pub fn as_time<P: Precision>(&self) -> Time<P> {
        Time::from_units(self.as_units::<P>())
    }

    pub fn saturating_add(self, rhs: Duration) -> Self {
        Self {
            ns: self.ns.saturating_add(rhs.ns),
        }
    }
}

impl Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Self::Output {
        Duration {
            ns: self.ns + rhs.ns,
        }
    }
}

impl AddAssign<Duration> for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        self.ns += rhs.ns;
    }
}

impl Sub<Duration> for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Self::Output {
        Duration {
            ns: self.ns - rhs.ns,
        }
    }
}

impl SubAssign<Duration> for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        self.ns -= rhs.ns;
    }
}

impl Div<u64> for Duration {
    type Output = Duration;
    fn div(self, rhs: u64) -> Self::Output {
        Duration { ns: self.ns / rhs }
    }
}

impl From<Duration> for core::time::Duration {
    fn from(other: Duration) -> Self {
        core::time::Duration::from_nanos(other.ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendar::{Milliseconds, Nanoseconds, TimeMs, TimeNs};

    #[test]
    fn calendar_units() {
        let duration = Duration::from_nanos(3_723_004_005_006);
        assert_eq!(duration.as_units::<Milliseconds>(), 3_723_004);
        assert_eq!(duration.as_units::<Nanoseconds>(), 3_723_004_005_006);
        assert_eq!(duration.as_time::<Milliseconds>(), TimeMs::new(1, 2, 3, 4));
        assert_eq!(
            duration.as_time::<Nanoseconds>(),
            TimeNs::new(1, 2, 3, 4_005_006)
        );

        let day = Duration::from_secs(86_400);
        assert!(day.as_time::<Milliseconds>().is_end());
    }

    #[test]
    fn conversions() {
        assert_eq!(Duration::from_secs(2).as_nanos(), 2_000_000_000);
        assert_eq!(Duration::from_millis(1_500).as_secs_f64(), 1.5);
        assert_eq!(
            core::time::Duration::from(Duration::from_millis(3)),
            core::time::Duration::from_millis(3)
        );
        assert_eq!(Duration::MAX.saturating_add(Duration::from_nanos(1)), Duration::MAX);
    }
}
