use crate::{Error, Zone};

use super::Reading;

fn read_clock(clock: libc::clockid_t) -> Result<libc::timespec, Error> {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    if unsafe { libc::clock_gettime(clock, &mut ts) } != 0 {
        return Err(Error::ClockUnavailable);
    }

    Ok(ts)
}

/// Reads the realtime clock and breaks it down in the zone. The re-entrant
/// conversions are used so the result is written to our own `tm` rather than
/// to storage shared with other threads.
pub fn read(zone: Zone) -> Result<Reading, Error> {
    let ts = read_clock(libc::CLOCK_REALTIME)?;

    let mut tm: libc::tm = unsafe { core::mem::zeroed() };

    let result = unsafe {
        match zone {
            Zone::Local => libc::localtime_r(&ts.tv_sec, &mut tm),
            Zone::Gmt => libc::gmtime_r(&ts.tv_sec, &mut tm),
        }
    };

    if result.is_null() {
        return Err(Error::ClockUnavailable);
    }

    Ok(Reading {
        year: tm.tm_year as i64 + 1900,
        month: (tm.tm_mon + 1) as u8,
        day: tm.tm_mday as u8,
        hours: tm.tm_hour as u8,
        minutes: tm.tm_min as u8,
        seconds: tm.tm_sec as u8,
        nanos: ts.tv_nsec as u32,
    })
}
