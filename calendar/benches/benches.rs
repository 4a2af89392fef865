use calendar::{Date, DateTimeMs, DateTimeNs, TimeMs, MILLISECONDS_PER_DAY};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn date(c: &mut Criterion) {
    let mut group = c.benchmark_group("date");
    group.throughput(Throughput::Elements(1));

    let start = Date::new(15, 6, 1970);

    group.bench_function("add_days/1", |b| {
        b.iter(|| {
            let mut date = start;
            date.add_days(black_box(1));
            date
        })
    });
    group.bench_function("add_days/36500", |b| {
        b.iter(|| {
            let mut date = start;
            date.add_days(black_box(36_500));
            date
        })
    });
    group.bench_function("subtract_days/36500", |b| {
        b.iter(|| {
            let mut date = start;
            date.subtract_days(black_box(36_500));
            date
        })
    });
    group.bench_function("days_between", |b| {
        let end = Date::new(1, 1, 2070);
        b.iter(|| black_box(start).days_between(&end))
    });
    group.bench_function("deserialize", |b| {
        b.iter(|| Date::deserialize(black_box(0x07B20101)))
    });

    group.finish();
}

fn datetime(c: &mut Criterion) {
    let mut group = c.benchmark_group("datetime");
    group.throughput(Throughput::Elements(1));

    let start = DateTimeMs::new(Date::new(15, 6, 1970), TimeMs::new(12, 0, 0, 0));

    group.bench_function("milliseconds/add_units/within_day", |b| {
        b.iter(|| {
            let mut dt = start;
            dt.add_units(black_box(1));
            dt
        })
    });
    group.bench_function("milliseconds/add_units/decade", |b| {
        b.iter(|| {
            let mut dt = start;
            dt.add_units(black_box(3_652 * MILLISECONDS_PER_DAY));
            dt
        })
    });

    let start = DateTimeNs::from(start);

    group.bench_function("nanoseconds/subtract_units/hour", |b| {
        b.iter(|| {
            let mut dt = start;
            dt.subtract_hours(black_box(13));
            dt
        })
    });

    group.finish();
}

criterion_group!(benches, date, datetime);
criterion_main!(benches);
