use log::warn;
use time::OffsetDateTime;

use crate::{Error, Zone};

use super::Reading;

/// Reads the system time through the `time` crate. There is no portable way
/// to find the local offset here, so local time is reported as GMT.
pub fn read(zone: Zone) -> Result<Reading, Error> {
    if zone == Zone::Local {
        warn!("local time is not supported on this platform, using GMT");
    }

    let now = OffsetDateTime::now_utc();

    Ok(Reading {
        year: now.year() as i64,
        month: now.month() as u8,
        day: now.day(),
        hours: now.hour(),
        minutes: now.minute(),
        seconds: now.second(),
        nanos: now.nanosecond(),
    })
}
