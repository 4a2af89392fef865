//! Reading the current date and time from the system clock.
//!
//! ```no_run
//! use calendar::{Clock, TimeNs, Zone};
//!
//! let clock = Clock::builder().zone(Zone::Gmt).build();
//!
//! let today = clock.date()?;
//! let now: TimeNs = clock.time()?;
//!
//! println!("{today}T{now}Z");
//! # Ok::<(), calendar::Error>(())
//! ```

use log::debug;

use crate::sys::{self, Reading};
use crate::{Date, DateTime, Error, Precision, Time};

/// Which wall clock to read.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub enum Zone {
    /// The local time of the host, as configured by the operating system.
    #[default]
    Local,
    /// Greenwich Mean Time, which is UTC.
    Gmt,
}

/// A source of the current date and time in a fixed [`Zone`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    zone: Zone,
}

impl Clock {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn new(zone: Zone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Returns the current date.
    pub fn date(&self) -> Result<Date, Error> {
        self.read().and_then(|reading| reading.date())
    }

    /// Returns the current time of day, truncated to the precision.
    pub fn time<P: Precision>(&self) -> Result<Time<P>, Error> {
        self.read().map(|reading| reading.time())
    }

    /// Returns the current date and time of day from a single clock reading.
    pub fn datetime<P: Precision>(&self) -> Result<DateTime<P>, Error> {
        let reading = self.read()?;
        Ok(DateTime::new(reading.date()?, reading.time()))
    }

    fn read(&self) -> Result<Reading, Error> {
        sys::read(self.zone).map_err(|e| {
            debug!("failed to read the {:?} clock: {e}", self.zone);
            e
        })
    }
}

impl Reading {
    fn date(&self) -> Result<Date, Error> {
        let year = u16::try_from(self.year).map_err(|_| Error::OutOfRange)?;
        Ok(Date::new(self.day, self.month, year))
    }

    fn time<P: Precision>(&self) -> Time<P> {
        // leap seconds are folded into the last second of the minute
        Time::new(
            self.hours,
            self.minutes,
            self.seconds,
            (self.nanos as u64 / P::NANOS_PER_UNIT) as u32,
        )
    }
}

/// Configures a [`Clock`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Builder {
    zone: Zone,
}

impl Builder {
    fn new() -> Self {
        Self::default()
    }

    /// Set the zone the clock reports times in. The default is
    /// [`Zone::Local`].
    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Consumes this `Builder` and produces a `Clock`.
    pub fn build(self) -> Clock {
        Clock::new(self.zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Milliseconds, Nanoseconds, TimeMs, TimeNs};

    fn reading() -> Reading {
        Reading {
            year: 2024,
            month: 2,
            day: 29,
            hours: 23,
            minutes: 59,
            seconds: 60,
            nanos: 999_999_999,
        }
    }

    #[test]
    fn builder() {
        assert_eq!(Clock::builder().build().zone(), Zone::Local);
        assert_eq!(Clock::builder().zone(Zone::Gmt).build(), Clock::new(Zone::Gmt));
    }

    #[test]
    fn reading_conversion() {
        let reading = reading();
        assert_eq!(reading.date(), Ok(Date::new(29, 2, 2024)));
        assert_eq!(reading.time::<Milliseconds>(), TimeMs::end());
        assert_eq!(reading.time::<Nanoseconds>(), TimeNs::end());

        let reading = Reading {
            year: 70_000,
            ..reading
        };
        assert_eq!(reading.date(), Err(Error::OutOfRange));

        let reading = Reading {
            year: -1,
            ..reading
        };
        assert_eq!(reading.date(), Err(Error::OutOfRange));
    }
}
