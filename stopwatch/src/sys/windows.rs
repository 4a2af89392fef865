use crate::NANOS_PER_SEC;
use core::sync::atomic::{AtomicU64, Ordering};

pub mod monotonic {
    use super::*;

    use winapi::um::winnt::LARGE_INTEGER;

    static FREQUENCY: AtomicU64 = AtomicU64::new(0);

    fn frequency() -> u64 {
        let cached = FREQUENCY.load(Ordering::Relaxed);

        if cached != 0 {
            return cached;
        }

        let frequency;
        unsafe {
            let mut frq: LARGE_INTEGER = core::mem::zeroed();
            let _ = winapi::um::profileapi::QueryPerformanceFrequency(&mut frq);
            frequency = *frq.QuadPart() as u64;
        }

        FREQUENCY.store(frequency, Ordering::Relaxed);
        frequency
    }

    fn count() -> u64 {
        unsafe {
            let mut cnt: LARGE_INTEGER = core::mem::zeroed();
            let _ = winapi::um::profileapi::QueryPerformanceCounter(&mut cnt);
            *cnt.QuadPart() as u64
        }
    }

    pub fn now() -> crate::Instant {
        let count = count();
        let frequency = frequency();

        let secs = count / frequency;
        let ticks = count % frequency;

        crate::Instant {
            ns: secs * NANOS_PER_SEC + ticks * NANOS_PER_SEC / frequency,
        }
    }
}
