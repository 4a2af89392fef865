//! Conversions to and from the types in the `time` crate.

use ::time::{Month, PrimitiveDateTime};

use crate::{Date, DateTime, Error, Precision, Time};

impl TryFrom<Date> for ::time::Date {
    type Error = Error;

    /// Fails for years beyond the range supported by `time`.
    fn try_from(date: Date) -> Result<Self, Self::Error> {
        let month = Month::try_from(date.month()).map_err(|_| Error::InvalidDate)?;

        ::time::Date::from_calendar_date(date.year() as i32, month, date.day())
            .map_err(|_| Error::OutOfRange)
    }
}

impl TryFrom<::time::Date> for Date {
    type Error = Error;

    /// Fails for years before 0 or after 65535.
    fn try_from(date: ::time::Date) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| Error::OutOfRange)?;

        Date::try_new(date.day(), u8::from(date.month()), year)
    }
}

impl<P: Precision> TryFrom<Time<P>> for ::time::Time {
    type Error = Error;

    fn try_from(time: Time<P>) -> Result<Self, Self::Error> {
        let nanos = time.subsecond() as u64 * P::NANOS_PER_UNIT;

        ::time::Time::from_hms_nano(time.hours(), time.minutes(), time.seconds(), nanos as u32)
            .map_err(|_| Error::InvalidTime)
    }
}

impl<P: Precision> From<::time::Time> for Time<P> {
    /// Truncates to the precision.
    fn from(time: ::time::Time) -> Self {
        Time::new(
            time.hour(),
            time.minute(),
            time.second(),
            (time.nanosecond() as u64 / P::NANOS_PER_UNIT) as u32,
        )
    }
}

impl<P: Precision> TryFrom<DateTime<P>> for PrimitiveDateTime {
    type Error = Error;

    fn try_from(datetime: DateTime<P>) -> Result<Self, Self::Error> {
        Ok(PrimitiveDateTime::new(
            datetime.date().try_into()?,
            datetime.time().try_into()?,
        ))
    }
}

impl<P: Precision> TryFrom<PrimitiveDateTime> for DateTime<P> {
    type Error = Error;

    fn try_from(datetime: PrimitiveDateTime) -> Result<Self, Self::Error> {
        Ok(DateTime::new(
            datetime.date().try_into()?,
            datetime.time().into(),
        ))
    }
}
