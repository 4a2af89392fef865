//! Dates combined with a time of day.

use core::cmp::Ordering;
use core::marker::PhantomData;

use log::trace;

use crate::precision::{Milliseconds, Nanoseconds, Precision};
use crate::{Clock, Date, Error, Time, Zone};

/// A datetime with millisecond precision.
pub type DateTimeMs = DateTime<Milliseconds>;

/// A datetime with nanosecond precision.
pub type DateTimeNs = DateTime<Nanoseconds>;

/// A [`Date`] and a [`Time`] together. Unlike a bare `Time`, arithmetic on a
/// `DateTime` carries into the date when it crosses midnight.
///
/// Datetimes are ordered by date and then by time.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct DateTime<P: Precision> {
    date: Date,
    time: Time<P>,
}

/// The span between two datetimes as whole days plus the units of the
/// remaining part of a day.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Difference<P: Precision> {
    days: u32,
    units: u64,
    _precision: PhantomData<P>,
}

impl<P: Precision> Difference<P> {
    pub fn new(days: u32, units: u64) -> Self {
        Self {
            days,
            units,
            _precision: PhantomData,
        }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Returns the part of the span shorter than a day.
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Returns the part of the span shorter than a day as a time of day.
    pub fn time(&self) -> Time<P> {
        Time::from_units(self.units)
    }

    /// Returns the whole span in units, or `None` if it does not fit in a
    /// `u64`.
    pub fn total_units(&self) -> Option<u64> {
        (self.days as u64)
            .checked_mul(P::UNITS_PER_DAY)?
            .checked_add(self.units)
    }
}

impl<P: Precision> DateTime<P> {
    pub fn new(date: Date, time: Time<P>) -> Self {
        Self { date, time }
    }

    /// Return a `DateTime` that represents the current moment in the zone.
    pub fn now(zone: Zone) -> Result<Self, Error> {
        Clock::new(zone).datetime()
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time<P> {
        self.time
    }

    pub fn set_date(&mut self, date: Date) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: Time<P>) {
        self.time = time;
    }

    pub fn day(&self) -> u8 {
        self.date.day()
    }

    pub fn month(&self) -> u8 {
        self.date.month()
    }

    pub fn year(&self) -> u16 {
        self.date.year()
    }

    pub fn hours(&self) -> u8 {
        self.time.hours()
    }

    pub fn minutes(&self) -> u8 {
        self.time.minutes()
    }

    pub fn seconds(&self) -> u8 {
        self.time.seconds()
    }

    pub fn subsecond(&self) -> u32 {
        self.time.subsecond()
    }

    pub fn set_day(&mut self, day: u8) {
        self.date.set_day(day);
    }

    pub fn set_month(&mut self, month: u8) {
        self.date.set_month(month);
    }

    pub fn set_year(&mut self, year: u16) {
        self.date.set_year(year);
    }

    pub fn set_hours(&mut self, hours: u8) {
        self.time.set_hours(hours);
    }

    pub fn set_minutes(&mut self, minutes: u8) {
        self.time.set_minutes(minutes);
    }

    pub fn set_seconds(&mut self, seconds: u8) {
        self.time.set_seconds(seconds);
    }

    pub fn set_subsecond(&mut self, subsecond: u32) {
        self.time.set_subsecond(subsecond);
    }

    pub fn add_days(&mut self, days: u32) {
        self.date.add_days(days);
    }

    pub fn subtract_days(&mut self, days: u32) {
        self.date.subtract_days(days);
    }

    /// Advance by a number of units of the precision, carrying whole days
    /// into the date.
    ///
    /// Saturates at the last unit of [`Date::MAX`].
    pub fn add_units(&mut self, units: u64) {
        let overflow = self.time.overflowing_add(units);
        if overflow == 0 {
            return;
        }

        // an overflow of one lands exactly on the next midnight
        let mut excess = overflow - 1;
        let whole_days = excess / P::UNITS_PER_DAY;
        excess -= whole_days * P::UNITS_PER_DAY;

        let days = u32::try_from(whole_days + 1).unwrap_or(u32::MAX);
        let from = self.date;
        self.date.add_days(days);

        if from.days_between(&self.date) < days {
            self.date = Date::MAX;
            self.time.set_end();
            return;
        }

        self.time.set_start();
        self.time.saturating_add(excess);

        trace!("carried {days} days into the date: {self}");
    }

    /// Move back by a number of units of the precision, borrowing whole days
    /// from the date.
    ///
    /// Saturates at midnight of [`Date::MIN`].
    pub fn subtract_units(&mut self, units: u64) {
        let underflow = self.time.overflowing_sub(units);
        if underflow == 0 {
            return;
        }

        // an underflow of one lands exactly on the last unit of the previous day
        let mut excess = underflow - 1;
        let whole_days = excess / P::UNITS_PER_DAY;
        excess -= whole_days * P::UNITS_PER_DAY;

        let days = u32::try_from(whole_days + 1).unwrap_or(u32::MAX);
        let from = self.date;
        self.date.subtract_days(days);

        if from.days_between(&self.date) < days {
            self.date = Date::MIN;
            self.time.set_start();
            return;
        }

        self.time.set_end();
        self.time.saturating_sub(excess);

        trace!("borrowed {days} days from the date: {self}");
    }

    pub fn add_hours(&mut self, hours: u64) {
        self.add_units(hours.saturating_mul(crate::SECONDS_PER_HOUR * P::UNITS_PER_SECOND));
    }

    pub fn add_minutes(&mut self, minutes: u64) {
        self.add_units(minutes.saturating_mul(crate::SECONDS_PER_MINUTE * P::UNITS_PER_SECOND));
    }

    pub fn add_seconds(&mut self, seconds: u64) {
        self.add_units(seconds.saturating_mul(P::UNITS_PER_SECOND));
    }

    pub fn subtract_hours(&mut self, hours: u64) {
        self.subtract_units(hours.saturating_mul(crate::SECONDS_PER_HOUR * P::UNITS_PER_SECOND));
    }

    pub fn subtract_minutes(&mut self, minutes: u64) {
        self.subtract_units(
            minutes.saturating_mul(crate::SECONDS_PER_MINUTE * P::UNITS_PER_SECOND),
        );
    }

    pub fn subtract_seconds(&mut self, seconds: u64) {
        self.subtract_units(seconds.saturating_mul(P::UNITS_PER_SECOND));
    }

    /// Returns the span between two datetimes. The operands are put in order
    /// first, so the result is the same either way around.
    pub fn difference(first: &Self, second: &Self) -> Difference<P> {
        let (first, second) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };

        if first.date == second.date {
            return Difference::new(0, first.time.difference(&second.time));
        }

        let days = first.date.days_between(&second.date);

        if first.time > second.time {
            // the day count includes a partial day
            Difference::new(
                days - 1,
                P::UNITS_PER_DAY - first.time.difference(&second.time),
            )
        } else {
            Difference::new(days, first.time.difference(&second.time))
        }
    }
}

impl<P: Precision> From<Date> for DateTime<P> {
    /// Midnight at the start of the date.
    fn from(date: Date) -> Self {
        Self::new(date, Time::start())
    }
}

impl<P: Precision> Ord for DateTime<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl<P: Precision> PartialOrd for DateTime<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<DateTime<Milliseconds>> for DateTime<Nanoseconds> {
    fn from(other: DateTime<Milliseconds>) -> Self {
        Self::new(other.date, other.time.into())
    }
}

impl From<DateTime<Nanoseconds>> for DateTime<Milliseconds> {
    fn from(other: DateTime<Nanoseconds>) -> Self {
        Self::new(other.date, other.time.into())
    }
}
