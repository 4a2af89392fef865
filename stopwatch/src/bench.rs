use core::fmt::{Display, Formatter};
use std::hint::black_box;

use log::debug;

use crate::{Duration, Error, Instant};

/// Runs a function repeatedly and reports how long each call took.
///
/// Each measured iteration is timed on its own, so the report includes the
/// fastest and slowest call as well as the mean.
#[derive(Clone, Debug)]
pub struct Bench {
    name: String,
    warmup: u32,
    iterations: u32,
}

impl Bench {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Run the warmup iterations, discarding their timings, and then the
    /// measured iterations.
    pub fn run<F, T>(&self, mut f: F) -> Report
    where
        F: FnMut() -> T,
    {
        for _ in 0..self.warmup {
            black_box(f());
        }

        let mut report = Report {
            name: self.name.clone(),
            iterations: self.iterations,
            total: Duration::ZERO,
            min: Duration::MAX,
            max: Duration::ZERO,
        };

        for _ in 0..self.iterations {
            let start = Instant::now();
            black_box(f());
            report.record(start.elapsed());
        }

        debug!("{report}");

        report
    }
}

/// Configures a [`Bench`].
#[derive(Clone, Debug)]
pub struct Builder {
    name: String,
    warmup: u32,
    iterations: u32,
}

impl Builder {
    fn new() -> Self {
        Self {
            name: "bench".to_string(),
            warmup: 10,
            iterations: 1_000,
        }
    }

    /// Set the name used in the report.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the number of untimed calls made before measuring. The default is
    /// 10.
    pub fn warmup(mut self, iterations: u32) -> Self {
        self.warmup = iterations;
        self
    }

    /// Set the number of timed calls. The default is 1000.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Consumes this `Builder` and produces a `Bench`. Fails if there are no
    /// measured iterations.
    pub fn build(self) -> Result<Bench, Error> {
        if self.iterations == 0 {
            return Err(Error::NoIterations);
        }

        Ok(Bench {
            name: self.name,
            warmup: self.warmup,
            iterations: self.iterations,
        })
    }
}

/// The timings gathered by [`Bench::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    name: String,
    iterations: u32,
    total: Duration,
    min: Duration,
    max: Duration,
}

impl Report {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns the summed time of every measured call.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn mean(&self) -> Duration {
        self.total / self.iterations as u64
    }

    fn record(&mut self, elapsed: Duration) {
        self.total = self.total.saturating_add(elapsed);
        self.min = self.min.min(elapsed);
        self.max = self.max.max(elapsed);
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} iterations mean: {}ns min: {}ns max: {}ns",
            self.name,
            self.iterations,
            self.mean().as_nanos(),
            self.min.as_nanos(),
            self.max.as_nanos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        assert_eq!(
            Bench::builder().iterations(0).build().map(|_| ()),
            Err(Error::NoIterations)
        );

        let bench = Bench::builder().name("noop").warmup(0).iterations(3).build().unwrap();
        assert_eq!(bench.name, "noop");
        assert_eq!(bench.warmup, 0);
        assert_eq!(bench.iterations, 3);
    }

    #[test]
    fn counts_calls() {
        let mut calls = 0;
        let report = Bench::builder()
            .warmup(5)
            .iterations(20)
            .build()
            .unwrap()
            .run(|| calls += 1);

        assert_eq!(calls, 25);
        assert_eq!(report.iterations(), 20);
        assert_eq!(report.name(), "bench");
        assert!(report.min() <= report.mean());
        assert!(report.mean() <= report.max());
        assert!(report.max() <= report.total());
    }

    #[test]
    fn statistics() {
        let mut report = Report {
            name: "manual".to_string(),
            iterations: 3,
            total: Duration::ZERO,
            min: Duration::MAX,
            max: Duration::ZERO,
        };
        report.record(Duration::from_nanos(10));
        report.record(Duration::from_nanos(30));
        report.record(Duration::from_nanos(20));

        assert_eq!(report.total(), Duration::from_nanos(60));
        assert_eq!(report.min(), Duration::from_nanos(10));
        assert_eq!(report.max(), Duration::from_nanos(30));
        assert_eq!(report.mean(), Duration::from_nanos(20));
        assert_eq!(
            report.to_string(),
            "manual: 3 iterations mean: 20ns min: 10ns max: 30ns"
        );
    }
}
