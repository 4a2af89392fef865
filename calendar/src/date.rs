//! Gregorian calendar dates and the day/month/year arithmetic on them.

use core::cmp::Ordering;

use log::trace;

use crate::Error;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const DAYS_PER_YEAR: u32 = 365;
const DAYS_PER_LEAP_CYCLE: u32 = 4 * DAYS_PER_YEAR + 1;

/// Returns true if the year is a leap year in the Gregorian calendar: every
/// fourth year, except centuries that are not divisible by 400.
pub const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the month of the given year. Months outside
/// of `1..=12` are clamped.
pub const fn days_in_month(month: u8, year: u16) -> u8 {
    let month = clamp_month(month);
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

/// Returns the number of days in the year, either 365 or 366.
pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in `count` consecutive years starting with
/// `year`.
///
/// *Note*: whole four year blocks are counted as `4 * 365 + 1` days without
/// applying the century rule, so spans which include a century year that is
/// not a leap year (such as 1900 or 2100) are over-counted by one day for each
/// such century. Only the trailing partial block is leap-year exact. Use
/// [`Date::days_between`] for exact differences.
pub fn days_in_years(year: u16, count: u16) -> u32 {
    let cycles = count as u32 / 4;
    let mut days = cycles * DAYS_PER_LEAP_CYCLE;

    let mut year = year as u32 + cycles * 4;
    for _ in 0..count % 4 {
        days += match u16::try_from(year) {
            Ok(year) => days_in_year(year) as u32,
            Err(_) => DAYS_PER_YEAR,
        };
        year += 1;
    }

    days
}

/// Returns the month following `month`, wrapping December to January.
pub const fn next_month(month: u8) -> u8 {
    let month = clamp_month(month);
    if month == 12 {
        1
    } else {
        month + 1
    }
}

/// Returns the month preceding `month`, wrapping January to December.
pub const fn previous_month(month: u8) -> u8 {
    let month = clamp_month(month);
    if month == 1 {
        12
    } else {
        month - 1
    }
}

const fn clamp_month(month: u8) -> u8 {
    if month < 1 {
        1
    } else if month > 12 {
        12
    } else {
        month
    }
}

/// A day of the week. Weeks start on Monday.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the number of days since Monday, in the range `0..=6`.
    pub fn days_from_monday(&self) -> u8 {
        *self as u8
    }
}

/// A date in the proleptic Gregorian calendar.
///
/// The day is always valid for the month and year, every setter clamps its
/// input to the nearest legal value. Years range from 0 through 65535.
///
/// A `Date` packs into a `u32` as `day | month << 8 | year << 16`. This is both
/// the serialized form and the basis of its ordering.
///
/// The size of a `Date` is always the same as a `u32`.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Date {
    pub(crate) day: u8,
    pub(crate) month: u8,
    pub(crate) year: u16,
}

impl Date {
    /// The earliest representable date, `0000-01-01`.
    pub const MIN: Date = Date {
        day: 1,
        month: 1,
        year: 0,
    };

    /// The latest representable date, `65535-12-31`.
    pub const MAX: Date = Date {
        day: 31,
        month: 12,
        year: u16::MAX,
    };

    /// The unix epoch, `1970-01-01`. This is also the default date.
    pub const EPOCH: Date = Date {
        day: 1,
        month: 1,
        year: 1970,
    };

    /// Create a new date. Out of range fields are clamped: the month to
    /// `1..=12` and then the day to the days in that month.
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        let mut date = Self {
            day: 1,
            month: clamp_month(month),
            year,
        };
        date.set_day(day);
        date
    }

    /// Create a new date, returning an error instead of clamping if any field
    /// is out of range.
    pub fn try_new(day: u8, month: u8, year: u16) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(month, year) {
            return Err(Error::InvalidDate);
        }

        Ok(Self { day, month, year })
    }

    /// Reconstruct a date from its packed form. Fields are clamped the same
    /// way as [`Date::new`].
    pub fn deserialize(packed: u32) -> Self {
        Self::new(
            (packed & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed >> 16) as u16,
        )
    }

    /// Returns the packed form of the date.
    pub const fn serialize(&self) -> u32 {
        self.day as u32 | (self.month as u32) << 8 | (self.year as u32) << 16
    }

    /// Replace this date with one read from its packed form.
    pub fn set_date(&mut self, packed: u32) {
        *self = Self::deserialize(packed);
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Set the day of the month, clamped to `1..=days_in_month()`.
    pub fn set_day(&mut self, day: u8) {
        self.day = day.clamp(1, self.days_in_month());
    }

    /// Set the month, clamped to `1..=12`. The day is clamped if it does not
    /// exist in the new month.
    pub fn set_month(&mut self, month: u8) {
        self.month = clamp_month(month);
        self.clamp_day();
    }

    /// Set the year. A 29th of February is clamped to the 28th if the new year
    /// is not a leap year.
    pub fn set_year(&mut self, year: u16) {
        self.year = year;
        self.clamp_day();
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the number of days in the month of this date.
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    /// Returns the day of the year, starting with 1 for January 1st.
    pub fn day_of_year(&self) -> u16 {
        let leap_day = (self.month > 2 && self.is_leap_year()) as u16;
        DAYS_BEFORE_MONTH[(self.month - 1) as usize] + leap_day + self.day as u16
    }

    /// Returns the number of days after this one until the end of the year.
    /// This is zero on December 31st.
    pub fn days_remaining_in_year(&self) -> u16 {
        days_in_year(self.year) - self.day_of_year()
    }

    pub fn weekday(&self) -> Weekday {
        // 0000-01-01 falls on a Saturday in the proleptic Gregorian calendar
        Weekday::ALL[((self.ordinal() + 5) % 7) as usize]
    }

    /// Move to the next day, rolling into the next month and year as needed.
    /// The maximum date is left unchanged.
    pub fn increment_day(&mut self) {
        if self.day < self.days_in_month() {
            self.day += 1;
            return;
        }

        if self.month == 12 {
            if self.year == u16::MAX {
                return;
            }
            self.year += 1;
        }

        self.month = next_month(self.month);
        self.day = 1;
    }

    /// Move to the previous day, rolling into the previous month and year as
    /// needed. The minimum date is left unchanged.
    pub fn decrement_day(&mut self) {
        if self.day > 1 {
            self.day -= 1;
            return;
        }

        if self.month == 1 {
            if self.year == 0 {
                return;
            }
            self.year -= 1;
        }

        self.month = previous_month(self.month);
        self.day = self.days_in_month();
    }

    /// Move to the same day of the next month. If that day does not exist in
    /// the next month it is clamped, so January 31st becomes February 28th or
    /// 29th.
    pub fn increment_month(&mut self) {
        if self.month == 12 {
            if self.year == u16::MAX {
                return;
            }
            self.year += 1;
        }

        self.month = next_month(self.month);
        self.clamp_day();
    }

    /// Move to the same day of the previous month, clamping the day as with
    /// [`Date::increment_month`].
    pub fn decrement_month(&mut self) {
        if self.month == 1 {
            if self.year == 0 {
                return;
            }
            self.year -= 1;
        }

        self.month = previous_month(self.month);
        self.clamp_day();
    }

    /// Advance the date by a number of days.
    ///
    /// Whole years are skipped first, then whole months, and only the final
    /// remainder is applied to the day of the month, so the cost depends on
    /// the number of years and months covered rather than the number of days.
    ///
    /// Saturates at [`Date::MAX`].
    pub fn add_days(&mut self, days: u32) {
        let mut remaining = days;

        remaining -= self.consume(remaining, Self::advance_to_next_year);
        remaining -= self.consume(remaining, Self::advance_to_next_month);

        // fewer days remain than are left in the month, unless we saturated
        let day = self.day as u32 + remaining;
        self.day = day.min(self.days_in_month() as u32) as u8;

        trace!("added {days} days: {self}");
    }

    /// Move the date back by a number of days. This is the inverse of
    /// [`Date::add_days`] and has the same cost.
    ///
    /// Saturates at [`Date::MIN`].
    pub fn subtract_days(&mut self, days: u32) {
        let mut remaining = days;

        remaining -= self.consume(remaining, Self::retreat_to_previous_year);
        remaining -= self.consume(remaining, Self::retreat_to_previous_month);

        // fewer days remain than the day of the month, unless we saturated
        self.day = (self.day as u32).saturating_sub(remaining).max(1) as u8;

        trace!("subtracted {days} days: {self}");
    }

    /// Returns the number of days between two dates. The order of the
    /// operands does not matter.
    pub fn days_between(&self, other: &Date) -> u32 {
        self.ordinal().abs_diff(other.ordinal())
    }

    /// Repeatedly crosses the boundary stepped over by `step` until fewer days
    /// remain than are needed to reach the next one. Returns the total number
    /// of days consumed.
    ///
    /// The first step moves to the boundary nearest to the current date, each
    /// following step starts on a boundary and so consumes a whole year or
    /// month.
    fn consume(&mut self, days: u32, step: fn(&mut Self, u32) -> u32) -> u32 {
        let mut consumed = 0;

        loop {
            let days = step(self, days - consumed);
            if days == 0 {
                return consumed;
            }
            consumed += days;
        }
    }

    /// Moves to January 1st of the next year if at least that many days are
    /// available. Returns the number of days consumed, or zero.
    fn advance_to_next_year(&mut self, days: u32) -> u32 {
        if self.year == u16::MAX {
            return 0;
        }

        let needed = self.days_remaining_in_year() as u32 + 1;
        if days < needed {
            return 0;
        }

        *self = Self {
            day: 1,
            month: 1,
            year: self.year + 1,
        };

        needed
    }

    /// Moves to the first day of the next month if at least that many days are
    /// available. Returns the number of days consumed, or zero.
    fn advance_to_next_month(&mut self, days: u32) -> u32 {
        if self.month == 12 && self.year == u16::MAX {
            return 0;
        }

        let needed = (self.days_in_month() - self.day) as u32 + 1;
        if days < needed {
            return 0;
        }

        if self.month == 12 {
            self.year += 1;
        }
        self.month = next_month(self.month);
        self.day = 1;

        needed
    }

    /// Moves to December 31st of the previous year if at least that many days
    /// are available. Returns the number of days consumed, or zero.
    fn retreat_to_previous_year(&mut self, days: u32) -> u32 {
        if self.year == 0 {
            return 0;
        }

        let needed = self.day_of_year() as u32;
        if days < needed {
            return 0;
        }

        *self = Self {
            day: 31,
            month: 12,
            year: self.year - 1,
        };

        needed
    }

    /// Moves to the last day of the previous month if at least that many days
    /// are available. Returns the number of days consumed, or zero.
    fn retreat_to_previous_month(&mut self, days: u32) -> u32 {
        if self.month == 1 && self.year == 0 {
            return 0;
        }

        let needed = self.day as u32;
        if days < needed {
            return 0;
        }

        if self.month == 1 {
            self.year -= 1;
        }
        self.month = previous_month(self.month);
        self.day = self.days_in_month();

        needed
    }

    /// Days since `0000-01-01`.
    fn ordinal(&self) -> u32 {
        let year = self.year as u32;
        let leap_days = (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400;

        year * DAYS_PER_YEAR + leap_days + self.day_of_year() as u32 - 1
    }

    fn clamp_day(&mut self) {
        self.day = self.day.min(self.days_in_month());
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serialize().cmp(&other.serialize())
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Date> for u32 {
    fn from(date: Date) -> Self {
        date.serialize()
    }
}

impl From<u32> for Date {
    fn from(packed: u32) -> Self {
        Self::deserialize(packed)
    }
}
