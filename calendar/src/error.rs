use thiserror::Error;

/// Errors returned by the fallible edges of this crate: strict construction,
/// parsing, conversions and reading the system clock. Calendar arithmetic
/// itself never fails.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid date, check that 1 <= month <= 12 and the day exists in that month")]
    InvalidDate,
    #[error("invalid time, check that hours < 24, minutes < 60, seconds < 60 and the subsecond fits the precision")]
    InvalidTime,
    #[error("could not parse {0}")]
    Parse(&'static str),
    #[error("the value is outside of the representable range")]
    OutOfRange,
    #[error("the system clock could not be read")]
    ClockUnavailable,
}
