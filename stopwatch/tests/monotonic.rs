use stopwatch::{Instant, Stopwatch};

#[test]
fn monotonic() {
    let mut previous = Instant::now();
    for _ in 0..1_000 {
        let now = Instant::now();
        assert!(previous <= now, "previous: {previous:?} now: {now:?}");
        previous = now;
    }
}

#[test]
fn covers_sleep() {
    let stopwatch = Stopwatch::start_new();
    std::thread::sleep(std::time::Duration::from_millis(20));
    let elapsed = stopwatch.elapsed();

    assert!(elapsed.as_nanos() >= 20_000_000, "elapsed: {elapsed:?}");
    assert!(core::time::Duration::from(elapsed) < std::time::Duration::from_secs(60));
}
