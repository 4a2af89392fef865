use calendar::{Clock, Date, DateTime, DateTimeNs, TimeMs, Zone};
use std::time::SystemTime;

fn to_unix_secs(t: SystemTime) -> u64 {
    t.duration_since(SystemTime::UNIX_EPOCH).unwrap().as_secs()
}

fn unix_date(secs: u64) -> Date {
    let mut date = Date::EPOCH;
    date.add_days((secs / 86_400) as u32);
    date
}

#[test]
fn gmt_date() {
    // the date may roll over while we read it, so we may need to try a few
    // times
    for _ in 0..5 {
        let before = unix_date(to_unix_secs(SystemTime::now()));
        let date = Clock::new(Zone::Gmt).date().unwrap();
        let after = unix_date(to_unix_secs(SystemTime::now()));

        if before == after {
            assert_eq!(date, before);
            return;
        }
    }
    panic!("the date kept changing");
}

#[test]
fn gmt_time() {
    // the realtime clock may jump backward, so we may need to try a few times
    for _ in 0..5 {
        let t0 = to_unix_secs(SystemTime::now()) % 86_400;
        let now: DateTimeNs = DateTime::now(Zone::Gmt).unwrap();
        let t1 = to_unix_secs(SystemTime::now()) % 86_400;

        // skip readings which straddle midnight
        if t0 <= t1 {
            let secs = now.time().transform() / 1_000_000_000;
            assert!(t0 <= secs, "t0: {t0} now: {secs}");
            assert!(secs <= t1, "now: {secs} t1: {t1}");
            return;
        }
    }
}

#[test]
fn local_clock() {
    let clock = Clock::builder().build();
    assert_eq!(clock.zone(), Zone::Local);

    let date = clock.date().unwrap();
    let gmt = Clock::new(Zone::Gmt).date().unwrap();

    // local time is never more than a day from GMT
    assert!(date.days_between(&gmt) <= 1);

    let time: TimeMs = clock.time().unwrap();
    assert!(time <= TimeMs::end());
}
