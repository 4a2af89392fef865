//! Times of day.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::hash::Hash;

use crate::precision::{Milliseconds, Nanoseconds, Precision};
use crate::{Clock, Error, Zone, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// A time of day with millisecond precision.
pub type TimeMs = Time<Milliseconds>;

/// A time of day with nanosecond precision.
pub type TimeNs = Time<Nanoseconds>;

/// A time of day between `00:00:00` and the last unit before midnight, with
/// the sub-second resolution chosen by the [`Precision`].
///
/// Every operation keeps the time within the day. Setters clamp, additions
/// stop at the last unit of the day and subtractions stop at midnight. The
/// `overflowing_*` variants also report by how much the day was exceeded so
/// the caller can carry it elsewhere, see [`crate::DateTime`].
///
/// Ordering and equality are defined by the serialized form.
///
/// The size of a `Time<Milliseconds>` is always the same as a `u32` and the
/// size of a `Time<Nanoseconds>` is always the same as a `u64`.
#[repr(transparent)]
#[derive(Copy, Clone, Default)]
pub struct Time<P: Precision> {
    repr: P,
}

impl<P: Precision> Time<P> {
    /// Create a new time. Out of range fields are clamped.
    pub fn new(hours: u8, minutes: u8, seconds: u8, subsecond: u32) -> Self {
        Self {
            repr: P::store(hours, minutes, seconds, subsecond),
        }
    }

    /// Create a new time, returning an error instead of clamping if any field
    /// is out of range.
    pub fn try_new(hours: u8, minutes: u8, seconds: u8, subsecond: u32) -> Result<Self, Error> {
        if hours > 23 || minutes > 59 || seconds > 59 || subsecond > P::MAX_SUBSECOND {
            return Err(Error::InvalidTime);
        }

        Ok(Self::new(hours, minutes, seconds, subsecond))
    }

    /// Create a time from a number of units since midnight. A day or more is
    /// clamped to the last unit of the day.
    pub fn from_units(units: u64) -> Self {
        Self {
            repr: P::from_units(units),
        }
    }

    /// Midnight.
    pub fn start() -> Self {
        Self { repr: P::start() }
    }

    /// The last unit of the day.
    pub fn end() -> Self {
        Self { repr: P::end() }
    }

    /// Return a `Time` that represents the current time of day in the zone.
    pub fn now(zone: Zone) -> Result<Self, Error> {
        Clock::new(zone).time()
    }

    /// Reconstruct a time from its serialized form. Out of range fields are
    /// clamped.
    pub fn deserialize(packed: P::Packed) -> Self {
        Self {
            repr: P::deserialize(packed),
        }
    }

    /// Returns the serialized form, see [`Milliseconds`] and [`Nanoseconds`]
    /// for the layouts.
    pub fn serialize(&self) -> P::Packed {
        self.repr.serialize()
    }

    pub fn hours(&self) -> u8 {
        self.repr.hours()
    }

    pub fn minutes(&self) -> u8 {
        self.repr.minutes()
    }

    pub fn seconds(&self) -> u8 {
        self.repr.seconds()
    }

    /// Returns the sub-second field in units of the precision.
    pub fn subsecond(&self) -> u32 {
        self.repr.subsecond()
    }

    /// Replace every field at once. Out of range fields are clamped.
    pub fn set_time(&mut self, hours: u8, minutes: u8, seconds: u8, subsecond: u32) {
        self.repr = P::store(hours, minutes, seconds, subsecond);
    }

    pub fn set_hours(&mut self, hours: u8) {
        self.set_time(hours, self.minutes(), self.seconds(), self.subsecond());
    }

    pub fn set_minutes(&mut self, minutes: u8) {
        self.set_time(self.hours(), minutes, self.seconds(), self.subsecond());
    }

    pub fn set_seconds(&mut self, seconds: u8) {
        self.set_time(self.hours(), self.minutes(), seconds, self.subsecond());
    }

    pub fn set_subsecond(&mut self, subsecond: u32) {
        self.set_time(self.hours(), self.minutes(), self.seconds(), subsecond);
    }

    pub fn set_start(&mut self) {
        self.repr = P::start();
    }

    pub fn set_end(&mut self) {
        self.repr = P::end();
    }

    pub fn is_start(&self) -> bool {
        self.repr == P::start()
    }

    pub fn is_end(&self) -> bool {
        self.repr == P::end()
    }

    /// Returns the number of units since midnight.
    pub fn transform(&self) -> u64 {
        self.repr.transform()
    }

    /// Set the time from a number of units since midnight. A day or more is
    /// clamped to the last unit of the day.
    pub fn set_transform(&mut self, units: u64) {
        self.repr = P::from_units(units);
    }

    /// Add units to the time. If the result would reach the next day, the
    /// time is set to the last unit of this day instead.
    pub fn saturating_add(&mut self, units: u64) {
        self.overflowing_add(units);
    }

    /// Add units to the time, returning how far past the last unit of the day
    /// the addition would have gone. Adding one unit to the last unit of the
    /// day returns one. Returns zero if the result stayed within the day.
    ///
    /// When the day is exceeded, the time is set to the last unit of the day.
    pub fn overflowing_add(&mut self, units: u64) -> u64 {
        let total = self.transform().saturating_add(units);

        if total >= P::UNITS_PER_DAY {
            self.set_end();
            return total - (P::UNITS_PER_DAY - 1);
        }

        self.set_transform(total);
        0
    }

    /// Subtract units from the time. If the result would reach the previous
    /// day, the time is set to midnight instead.
    pub fn saturating_sub(&mut self, units: u64) {
        self.overflowing_sub(units);
    }

    /// Subtract units from the time, returning how far before midnight the
    /// subtraction would have gone. Subtracting one unit from midnight returns
    /// one. Returns zero if the result stayed within the day.
    ///
    /// When the day is exceeded, the time is set to midnight.
    pub fn overflowing_sub(&mut self, units: u64) -> u64 {
        let current = self.transform();

        if units > current {
            self.set_start();
            return units - current;
        }

        self.set_transform(current - units);
        0
    }

    pub fn add_hours(&mut self, hours: u64) -> u64 {
        self.overflowing_add(hours.saturating_mul(SECONDS_PER_HOUR * P::UNITS_PER_SECOND))
    }

    pub fn add_minutes(&mut self, minutes: u64) -> u64 {
        self.overflowing_add(minutes.saturating_mul(SECONDS_PER_MINUTE * P::UNITS_PER_SECOND))
    }

    pub fn add_seconds(&mut self, seconds: u64) -> u64 {
        self.overflowing_add(seconds.saturating_mul(P::UNITS_PER_SECOND))
    }

    pub fn subtract_hours(&mut self, hours: u64) -> u64 {
        self.overflowing_sub(hours.saturating_mul(SECONDS_PER_HOUR * P::UNITS_PER_SECOND))
    }

    pub fn subtract_minutes(&mut self, minutes: u64) -> u64 {
        self.overflowing_sub(minutes.saturating_mul(SECONDS_PER_MINUTE * P::UNITS_PER_SECOND))
    }

    pub fn subtract_seconds(&mut self, seconds: u64) -> u64 {
        self.overflowing_sub(seconds.saturating_mul(P::UNITS_PER_SECOND))
    }

    /// Returns the number of units between two times. The order of the
    /// operands does not matter.
    pub fn difference(&self, other: &Self) -> u64 {
        self.transform().abs_diff(other.transform())
    }
}

impl Time<Milliseconds> {
    pub fn milliseconds(&self) -> u16 {
        self.subsecond() as u16
    }

    /// Set the milliseconds, clamped to `0..=999`.
    pub fn set_milliseconds(&mut self, milliseconds: u16) {
        self.set_subsecond(milliseconds as u32);
    }
}

impl Time<Nanoseconds> {
    pub fn nanoseconds(&self) -> u32 {
        self.subsecond()
    }

    /// Set the nanoseconds, clamped to `0..=999_999_999`.
    pub fn set_nanoseconds(&mut self, nanoseconds: u32) {
        self.set_subsecond(nanoseconds);
    }
}

impl From<Time<Milliseconds>> for Time<Nanoseconds> {
    fn from(other: Time<Milliseconds>) -> Self {
        Self::from_units(other.transform() * Milliseconds::NANOS_PER_UNIT)
    }
}

impl From<Time<Nanoseconds>> for Time<Milliseconds> {
    /// Truncates to whole milliseconds.
    fn from(other: Time<Nanoseconds>) -> Self {
        Self::from_units(other.transform() / Milliseconds::NANOS_PER_UNIT)
    }
}

impl<P: Precision> PartialEq for Time<P> {
    fn eq(&self, other: &Self) -> bool {
        self.serialize() == other.serialize()
    }
}

impl<P: Precision> Eq for Time<P> {}

impl<P: Precision> Ord for Time<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serialize().cmp(&other.serialize())
    }
}

impl<P: Precision> PartialOrd for Time<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Precision> Hash for Time<P> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.serialize().hash(state);
    }
}

impl<P: Precision> Debug for Time<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Time")
            .field("hours", &self.hours())
            .field("minutes", &self.minutes())
            .field("seconds", &self.seconds())
            .field("subsecond", &self.subsecond())
            .finish()
    }
}
