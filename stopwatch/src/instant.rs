use core::ops::{Add, Sub};

use super::Duration;

/// A reading of a monotonically nondecreasing clock in nanoseconds.
///
/// It is opaque and useful only with [`Duration`]. Unlike
/// `std::time::Instant` the internal representation uses only nanoseconds in a
/// `u64` field to hold the clock reading.
///
/// The size of an `Instant` is always the same as a `u64`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant {
    pub(crate) ns: u64,
}

impl Instant {
    /// Return an `Instant` that represents the current moment.
    pub fn now() -> Self {
        crate::sys::monotonic::now()
    }

    /// Return the elapsed time since this reading.
    pub fn elapsed(&self) -> Duration {
        Self::now().duration_since(*self)
    }

    /// Return the elapsed duration from some earlier reading until this one.
    /// Returns zero if `earlier` is actually later.
    pub fn duration_since(&self, earlier: Self) -> Duration {
        self.checked_duration_since(earlier).unwrap_or_default()
    }

    pub fn checked_duration_since(&self, earlier: Self) -> Option<Duration> {
        self.ns.checked_sub(earlier.ns).map(|ns| Duration { ns })
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Self::Output {
        Instant {
            ns: self.ns + rhs.ns,
        }
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Self::Output {
        Duration {
            ns: self.ns - rhs.ns,
        }
    }
}
