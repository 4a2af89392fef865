//! Storage for the fields of a time of day at a given sub-second precision.
//!
//! Each precision is also the packed in-memory representation of a
//! [`crate::Time`]. The arithmetic in `Time` is written only against the
//! transform and serialization provided here, so both precisions share one
//! implementation.

use core::fmt::Debug;
use core::hash::Hash;

use crate::{MILLIS_PER_SEC, NANOS_PER_SEC, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

mod private {
    pub trait Sealed {}

    impl Sealed for super::Milliseconds {}
    impl Sealed for super::Nanoseconds {}
}

/// The sub-second resolution of a [`crate::Time`].
///
/// This trait is sealed, the only precisions are [`Milliseconds`] and
/// [`Nanoseconds`].
pub trait Precision:
    private::Sealed + Copy + Default + Debug + Hash + Eq + Send + Sync + 'static
{
    /// The fixed width integer used for the serialized form.
    type Packed: Copy + Debug + Hash + Ord + Into<u64>;

    /// The number of units in one second.
    const UNITS_PER_SECOND: u64;

    /// The number of units in one day.
    const UNITS_PER_DAY: u64 = Self::UNITS_PER_SECOND * SECONDS_PER_DAY;

    /// The largest value of the sub-second field.
    const MAX_SUBSECOND: u32 = (Self::UNITS_PER_SECOND - 1) as u32;

    /// The number of nanoseconds in one unit.
    const NANOS_PER_UNIT: u64 = NANOS_PER_SEC / Self::UNITS_PER_SECOND;

    /// The number of decimal digits in the sub-second field.
    const DIGITS: usize;

    /// Store the fields, clamping each to its legal range.
    fn store(hours: u8, minutes: u8, seconds: u8, subsecond: u32) -> Self;

    fn hours(&self) -> u8;

    fn minutes(&self) -> u8;

    fn seconds(&self) -> u8;

    fn subsecond(&self) -> u32;

    /// Returns the canonical fixed width encoding.
    fn serialize(&self) -> Self::Packed;

    /// Read the fixed width encoding. Out of range fields are clamped.
    fn deserialize(packed: Self::Packed) -> Self;

    /// Returns the number of units since midnight.
    fn transform(&self) -> u64 {
        let seconds = self.hours() as u64 * SECONDS_PER_HOUR
            + self.minutes() as u64 * SECONDS_PER_MINUTE
            + self.seconds() as u64;

        seconds * Self::UNITS_PER_SECOND + self.subsecond() as u64
    }

    /// Split a number of units since midnight into fields. A day or more
    /// becomes the last unit of the day.
    fn from_units(units: u64) -> Self {
        if units >= Self::UNITS_PER_DAY {
            return Self::end();
        }

        let subsecond = (units % Self::UNITS_PER_SECOND) as u32;
        let seconds = units / Self::UNITS_PER_SECOND;

        Self::store(
            (seconds / SECONDS_PER_HOUR) as u8,
            (seconds / SECONDS_PER_MINUTE % 60) as u8,
            (seconds % 60) as u8,
            subsecond,
        )
    }

    /// Midnight, `00:00:00.0`.
    fn start() -> Self {
        Self::store(0, 0, 0, 0)
    }

    /// The last unit of the day, `23:59:59.999` or `23:59:59.999999999`.
    fn end() -> Self {
        Self::store(23, 59, 59, Self::MAX_SUBSECOND)
    }
}

/// Millisecond precision.
///
/// The 10bit millisecond value is split across two bytes: the low 8 bits have
/// a byte of their own and the high 2 bits share a byte with the seconds.
///
/// ```text
/// bits 0..8    milliseconds, low 8 bits
/// bits 8..10   milliseconds, high 2 bits
/// bits 10..16  seconds
/// bits 16..24  minutes
/// bits 24..32  hours
/// ```
///
/// The size of `Milliseconds` is always the same as a `u32`.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq)]
pub struct Milliseconds {
    millis: u8,
    seconds: u8,
    minutes: u8,
    hours: u8,
}

impl Precision for Milliseconds {
    type Packed = u32;

    const UNITS_PER_SECOND: u64 = MILLIS_PER_SEC;
    const DIGITS: usize = 3;

    fn store(hours: u8, minutes: u8, seconds: u8, subsecond: u32) -> Self {
        let millis = subsecond.min(Self::MAX_SUBSECOND);

        Self {
            millis: millis as u8,
            seconds: seconds.min(59) << 2 | (millis >> 8) as u8,
            minutes: minutes.min(59),
            hours: hours.min(23),
        }
    }

    fn hours(&self) -> u8 {
        self.hours
    }

    fn minutes(&self) -> u8 {
        self.minutes
    }

    fn seconds(&self) -> u8 {
        self.seconds >> 2
    }

    fn subsecond(&self) -> u32 {
        ((self.seconds & 0b11) as u32) << 8 | self.millis as u32
    }

    fn serialize(&self) -> u32 {
        self.millis as u32
            | (self.seconds as u32) << 8
            | (self.minutes as u32) << 16
            | (self.hours as u32) << 24
    }

    fn deserialize(packed: u32) -> Self {
        let [millis, seconds, minutes, hours] = packed.to_le_bytes();

        Self::store(
            hours,
            minutes,
            seconds >> 2,
            ((seconds & 0b11) as u32) << 8 | millis as u32,
        )
    }
}

/// Nanosecond precision.
///
/// ```text
/// bits 0..32   nanoseconds
/// bits 32..40  seconds
/// bits 40..48  minutes
/// bits 48..56  hours
/// ```
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq)]
pub struct Nanoseconds {
    nanos: u32,
    seconds: u8,
    minutes: u8,
    hours: u8,
}

impl Precision for Nanoseconds {
    type Packed = u64;

    const UNITS_PER_SECOND: u64 = NANOS_PER_SEC;
    const DIGITS: usize = 9;

    fn store(hours: u8, minutes: u8, seconds: u8, subsecond: u32) -> Self {
        Self {
            nanos: subsecond.min(Self::MAX_SUBSECOND),
            seconds: seconds.min(59),
            minutes: minutes.min(59),
            hours: hours.min(23),
        }
    }

    fn hours(&self) -> u8 {
        self.hours
    }

    fn minutes(&self) -> u8 {
        self.minutes
    }

    fn seconds(&self) -> u8 {
        self.seconds
    }

    fn subsecond(&self) -> u32 {
        self.nanos
    }

    fn serialize(&self) -> u64 {
        self.nanos as u64
            | (self.seconds as u64) << 32
            | (self.minutes as u64) << 40
            | (self.hours as u64) << 48
    }

    fn deserialize(packed: u64) -> Self {
        Self::store(
            (packed >> 48) as u8,
            (packed >> 40) as u8,
            (packed >> 32) as u8,
            packed as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size() {
        assert_eq!(std::mem::size_of::<Milliseconds>(), 4);
        assert_eq!(std::mem::size_of::<Nanoseconds>(), 8);
    }

    #[test]
    fn millisecond_packing() {
        let packed = Milliseconds::store(23, 59, 59, 999);
        assert_eq!(packed.serialize(), 0x173BEFE7);
        assert_eq!(packed.seconds(), 59);
        assert_eq!(packed.subsecond(), 999);

        // the high bits of the milliseconds live beside the seconds
        let packed = Milliseconds::store(0, 0, 1, 768);
        assert_eq!(packed.serialize(), 0x0000_0700);
    }

    #[test]
    fn nanosecond_packing() {
        let packed = Nanoseconds::store(23, 59, 59, 999_999_999);
        assert_eq!(packed.serialize(), 0x0017_3B3B_3B9A_C9FF);
        assert_eq!(Nanoseconds::deserialize(0x0017_3B3B_3B9A_C9FF), packed);
    }

    #[test]
    fn deserialize_clamps() {
        let time = Milliseconds::deserialize(0xFFFF_FFFF);
        assert_eq!(time, Milliseconds::end());

        let time = Nanoseconds::deserialize(u64::MAX);
        assert_eq!(time, Nanoseconds::end());
    }

    #[test]
    fn transform() {
        assert_eq!(Milliseconds::end().transform(), Milliseconds::UNITS_PER_DAY - 1);
        assert_eq!(Nanoseconds::end().transform(), Nanoseconds::UNITS_PER_DAY - 1);
        assert_eq!(Milliseconds::start().transform(), 0);

        let time = Milliseconds::from_units(3_723_004);
        assert_eq!(time, Milliseconds::store(1, 2, 3, 4));
        assert_eq!(time.transform(), 3_723_004);

        assert_eq!(
            Milliseconds::from_units(Milliseconds::UNITS_PER_DAY),
            Milliseconds::end()
        );
        assert_eq!(Nanoseconds::from_units(u64::MAX), Nanoseconds::end());
    }
}
