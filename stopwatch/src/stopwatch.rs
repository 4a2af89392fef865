use calendar::{DateTime, Precision, Time};

use crate::{Duration, Instant};

/// Measures elapsed time across any number of start and stop cycles.
///
/// Time only accumulates while the stopwatch is running. Laps split the
/// accumulated time into consecutive pieces without stopping it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    accumulated: Duration,
    lap_start: Duration,
}

impl Stopwatch {
    /// Create a new stopwatch which is not running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new stopwatch and start it.
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start, or resume, the stopwatch. Has no effect if it is running.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Stop the stopwatch, keeping the time accumulated so far. Has no effect
    /// if it is not running.
    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    /// Stop the stopwatch and clear all accumulated time.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Clear all accumulated time and start again.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Returns the total time the stopwatch has been running.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    /// Returns the time since the previous lap, or since the stopwatch was
    /// first started, and begins a new lap.
    pub fn lap(&mut self) -> Duration {
        self.lap_at(Instant::now())
    }

    /// Returns the total running time as a time of day, as if the stopwatch
    /// had started at midnight. A day or more becomes the last unit of the
    /// day.
    pub fn elapsed_time<P: Precision>(&self) -> Time<P> {
        self.elapsed().as_time()
    }

    /// Returns `start` advanced by the total running time.
    pub fn elapsed_since<P: Precision>(&self, start: DateTime<P>) -> DateTime<P> {
        let mut end = start;
        end.add_units(self.elapsed().as_units::<P>());
        end
    }

    fn start_at(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    fn stop_at(&mut self, now: Instant) {
        if let Some(started) = self.started.take() {
            self.accumulated += now.duration_since(started);
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        match self.started {
            Some(started) => self.accumulated + now.duration_since(started),
            None => self.accumulated,
        }
    }

    fn lap_at(&mut self, now: Instant) -> Duration {
        let elapsed = self.elapsed_at(now);
        let lap = elapsed - self.lap_start;
        self.lap_start = elapsed;
        lap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendar::{Date, DateTimeMs, Milliseconds, TimeMs};

    fn at(ms: u64) -> Instant {
        Instant {
            ns: ms * 1_000_000,
        }
    }

    #[test]
    fn accumulates_while_running() {
        let mut stopwatch = Stopwatch::new();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_at(at(10)), Duration::ZERO);

        stopwatch.start_at(at(10));
        assert!(stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_at(at(15)), Duration::from_millis(5));

        // starting again does not move the start
        stopwatch.start_at(at(12));
        stopwatch.stop_at(at(20));
        assert_eq!(stopwatch.elapsed_at(at(100)), Duration::from_millis(10));

        stopwatch.start_at(at(200));
        stopwatch.stop_at(at(205));
        assert_eq!(stopwatch.elapsed_at(at(300)), Duration::from_millis(15));

        stopwatch.reset();
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn laps() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start_at(at(0));
        assert_eq!(stopwatch.lap_at(at(7)), Duration::from_millis(7));
        assert_eq!(stopwatch.lap_at(at(10)), Duration::from_millis(3));

        stopwatch.stop_at(at(12));
        stopwatch.start_at(at(50));
        assert_eq!(stopwatch.lap_at(at(51)), Duration::from_millis(3));
    }

    #[test]
    fn calendar_values() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start_at(at(0));
        stopwatch.stop_at(at(90_061_001));

        assert_eq!(stopwatch.elapsed_time::<Milliseconds>(), TimeMs::end());
        assert_eq!(
            stopwatch.elapsed_since(DateTimeMs::from(Date::new(31, 12, 1999))),
            DateTimeMs::new(Date::new(1, 1, 2000), TimeMs::new(1, 1, 1, 1))
        );
    }

    #[test]
    fn measures_real_time() {
        let mut stopwatch = Stopwatch::start_new();
        std::thread::sleep(core::time::Duration::from_millis(5));
        stopwatch.stop();
        assert!(stopwatch.elapsed() >= Duration::from_millis(5));
    }
}
