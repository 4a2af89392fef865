fn read_clock(clock: libc::clockid_t) -> libc::timespec {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    unsafe {
        libc::clock_gettime(clock, &mut ts);
    }

    ts
}

pub mod monotonic {
    use super::*;

    pub fn now() -> crate::Instant {
        let ts = read_clock(libc::CLOCK_MONOTONIC);

        let now = (ts.tv_sec as u64)
            .wrapping_mul(crate::NANOS_PER_SEC)
            .wrapping_add(ts.tv_nsec as u64);

        crate::Instant { ns: now }
    }
}
