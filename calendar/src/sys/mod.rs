//! Platform specific access to the wall clock.

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use self::unix::read;

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use self::windows::read;

#[cfg(not(any(unix, windows)))]
mod fallback;

#[cfg(not(any(unix, windows)))]
pub use self::fallback::read;

/// A broken down wall clock reading, copied out of whatever structure the
/// platform provides.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Reading {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub nanos: u32,
}
