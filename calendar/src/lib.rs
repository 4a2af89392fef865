//! This crate provides Gregorian calendar dates, times of day and datetimes
//! with fixed-size representations. Each type packs into a single 32bit or
//! 64bit value, which is also its serialized form, so values can be stored in
//! places where a known size is required and compared as plain integers.
//!
//! Times are generic over their [`Precision`], either [`Milliseconds`] or
//! [`Nanoseconds`]. Arithmetic never fails and never wraps silently: setters
//! clamp out-of-range input, and additions or subtractions that leave the day
//! report the excess so it can be carried into the date.
//!
//! ```
//! use calendar::{Date, DateTimeMs, MILLISECONDS_PER_DAY};
//!
//! let mut dt = DateTimeMs::from(Date::new(31, 12, 1999));
//! dt.add_units(MILLISECONDS_PER_DAY + 1_500);
//!
//! assert_eq!(dt.to_string(), "2000-01-01T00:00:01.500");
//! ```

mod clock;
mod date;
mod datetime;
mod error;
mod fmt;
mod interop;
mod precision;
mod range;
mod sys;
mod time;

pub use clock::{Builder, Clock, Zone};
pub use date::{
    days_in_month, days_in_year, days_in_years, is_leap_year, next_month, previous_month, Date,
    Weekday,
};
pub use datetime::{DateTime, DateTimeMs, DateTimeNs, Difference};
pub use error::Error;
pub use precision::{Milliseconds, Nanoseconds, Precision};
pub use range::{DateRange, DateTimeRange, Distance, Range, TimeRange};
pub use self::time::{Time, TimeMs, TimeNs};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

const MILLIS_PER_SEC: u64 = 1_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// The number of milliseconds in one day.
pub const MILLISECONDS_PER_DAY: u64 = SECONDS_PER_DAY * MILLIS_PER_SEC;

/// The number of nanoseconds in one day.
pub const NANOSECONDS_PER_DAY: u64 = SECONDS_PER_DAY * NANOS_PER_SEC;
