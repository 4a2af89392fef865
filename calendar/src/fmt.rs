//! Human readable dates and times.
//!
//! Values are written as `YYYY-MM-DD`, `HH:MM:SS.fff` (or nine fractional
//! digits at nanosecond precision) and `YYYY-MM-DDTHH:MM:SS.fff`. Ranges are
//! written as `start/stop`. Parsing accepts exactly these forms, except that
//! the fraction may have fewer digits than the precision or be left out.

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

use crate::{Date, DateTime, Error, Precision, Range, Time};

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl<P: Precision> Display for Time<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:0width$}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.subsecond(),
            width = P::DIGITS,
        )
    }
}

impl<P: Precision> Display for DateTime<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}T{}", self.date(), self.time())
    }
}

impl<T: Display> Display for Range<T>
where
    T: Ord + Copy,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.start(), self.stop())
    }
}

fn parse_field<T: FromStr>(field: &str, name: &'static str) -> Result<T, Error> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse(name));
    }

    field.parse().map_err(|_| Error::Parse(name))
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.splitn(3, '-');

        let year = parse_field(fields.next().unwrap_or_default(), "date")?;
        let month = parse_field(fields.next().unwrap_or_default(), "date")?;
        let day = parse_field(fields.next().unwrap_or_default(), "date")?;

        Date::try_new(day, month, year)
    }
}

impl<P: Precision> FromStr for Time<P> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hms, fraction) = match s.split_once('.') {
            Some((hms, fraction)) => (hms, Some(fraction)),
            None => (s, None),
        };

        let mut fields = hms.splitn(3, ':');

        let hours = parse_field(fields.next().unwrap_or_default(), "time")?;
        let minutes = parse_field(fields.next().unwrap_or_default(), "time")?;
        let seconds = parse_field(fields.next().unwrap_or_default(), "time")?;

        let subsecond = match fraction {
            None => 0,
            Some(fraction) if fraction.len() > P::DIGITS => return Err(Error::Parse("time")),
            Some(fraction) => {
                let value: u32 = parse_field(fraction, "time")?;
                // scale up to the full number of digits, `.5` is 500ms
                value * 10_u32.pow((P::DIGITS - fraction.len()) as u32)
            }
        };

        Time::try_new(hours, minutes, seconds, subsecond)
    }
}

impl<P: Precision> FromStr for DateTime<P> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, time) = s.split_once('T').ok_or(Error::Parse("datetime"))?;

        Ok(DateTime::new(date.parse()?, time.parse()?))
    }
}

impl<T> FromStr for Range<T>
where
    T: FromStr<Err = Error> + Ord + Copy,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, stop) = s.split_once('/').ok_or(Error::Parse("range"))?;

        Ok(Range::new(start.parse()?, stop.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn display() {
        assert_eq!(Date::new(1, 1, 1970).to_string(), "1970-01-01");
        assert_eq!(Date::new(5, 3, 7).to_string(), "0007-03-05");
        assert_eq!(TimeMs::new(9, 8, 7, 6).to_string(), "09:08:07.006");
        assert_eq!(TimeNs::new(9, 8, 7, 6).to_string(), "09:08:07.000000006");
        assert_eq!(
            DateTimeMs::new(Date::new(31, 12, 1999), TimeMs::end()).to_string(),
            "1999-12-31T23:59:59.999"
        );
        assert_eq!(
            DateRange::new(Date::new(1, 1, 1998), Date::new(31, 12, 1998)).to_string(),
            "1998-01-01/1998-12-31"
        );
    }

    #[test]
    fn parse() {
        assert_eq!("1998-01-31".parse::<Date>(), Ok(Date::new(31, 1, 1998)));
        assert_eq!("12:30:05".parse::<TimeMs>(), Ok(TimeMs::new(12, 30, 5, 0)));
        assert_eq!("12:30:05.5".parse::<TimeMs>(), Ok(TimeMs::new(12, 30, 5, 500)));
        assert_eq!("12:30:05.000000042".parse::<TimeNs>(), Ok(TimeNs::new(12, 30, 5, 42)));
        assert_eq!(
            "2000-02-29T00:00:00.001".parse::<DateTimeMs>(),
            Ok(DateTimeMs::new(Date::new(29, 2, 2000), TimeMs::new(0, 0, 0, 1)))
        );
        assert_eq!(
            "1998-01-01/1998-12-31".parse::<DateRange>(),
            Ok(DateRange::new(Date::new(1, 1, 1998), Date::new(31, 12, 1998)))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!("1998-13-01".parse::<Date>(), Err(Error::InvalidDate));
        assert_eq!("1999-02-29".parse::<Date>(), Err(Error::InvalidDate));
        assert_eq!("1998-01".parse::<Date>(), Err(Error::Parse("date")));
        assert_eq!("1998-+1-01".parse::<Date>(), Err(Error::Parse("date")));
        assert_eq!("24:00:00".parse::<TimeMs>(), Err(Error::InvalidTime));
        assert_eq!("12:00:00.0001".parse::<TimeMs>(), Err(Error::Parse("time")));
        assert_eq!("12:00".parse::<TimeMs>(), Err(Error::Parse("time")));
        assert_eq!(
            "2000-01-01 00:00:00".parse::<DateTimeMs>(),
            Err(Error::Parse("datetime"))
        );
    }

    #[test]
    fn round_trip() {
        let dt = DateTimeNs::new(Date::new(17, 10, 2026), TimeNs::new(8, 1, 2, 3_004_005));
        assert_eq!(dt.to_string().parse::<DateTimeNs>(), Ok(dt));

        let dt = DateTimeMs::from(dt);
        assert_eq!(dt.to_string().parse::<DateTimeMs>(), Ok(dt));
    }
}
