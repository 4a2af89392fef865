//! This crate measures elapsed time using the monotonic clock and builds a
//! small benchmarking harness on top of it.
//!
//! Readings are kept as whole nanoseconds in a `u64`, which keeps the types
//! small and makes math on them cheap. Elapsed times can be turned into
//! [`calendar::Time`] values for display or for adding onto a
//! [`calendar::DateTime`].
//!
//! ```
//! use stopwatch::{Bench, Stopwatch};
//!
//! let mut stopwatch = Stopwatch::start_new();
//! let report = Bench::builder()
//!     .name("sum")
//!     .iterations(100)
//!     .build()?
//!     .run(|| (0..1_000u64).sum::<u64>());
//! stopwatch.stop();
//!
//! assert_eq!(report.iterations(), 100);
//! assert!(stopwatch.elapsed() >= report.total());
//! # Ok::<(), stopwatch::Error>(())
//! ```

mod bench;
mod duration;
mod error;
mod instant;
mod stopwatch;
mod sys;

pub use bench::{Bench, Builder, Report};
pub use duration::Duration;
pub use error::Error;
pub use instant::Instant;
pub use self::stopwatch::Stopwatch;

const NANOS_PER_SEC: u64 = 1_000_000_000;
