use thiserror::Error;

/// Errors returned by the benchmarking harness.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("a benchmark needs at least one measured iteration")]
    NoIterations,
}
