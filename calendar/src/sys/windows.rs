use winapi::um::minwinbase::SYSTEMTIME;
use winapi::um::sysinfoapi::{GetLocalTime, GetSystemTime};

use crate::{Error, Zone};

use super::Reading;

const NANOS_PER_MILLI: u32 = 1_000_000;

/// Reads the system time in the zone. Windows only reports whole
/// milliseconds.
pub fn read(zone: Zone) -> Result<Reading, Error> {
    let st;
    unsafe {
        let mut systemtime: SYSTEMTIME = core::mem::zeroed();
        match zone {
            Zone::Local => GetLocalTime(&mut systemtime),
            Zone::Gmt => GetSystemTime(&mut systemtime),
        }
        st = systemtime;
    }

    Ok(Reading {
        year: st.wYear as i64,
        month: st.wMonth as u8,
        day: st.wDay as u8,
        hours: st.wHour as u8,
        minutes: st.wMinute as u8,
        seconds: st.wSecond as u8,
        nanos: st.wMilliseconds as u32 * NANOS_PER_MILLI,
    })
}
