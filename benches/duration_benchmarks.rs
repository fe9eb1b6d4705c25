//! Performance benchmarks for the duration engine.
//!
//! Live mode recomputes once per second for as long as it runs, so the
//! figures of interest are a single engine call and the full controller
//! path (parse, compute, render) that a form submit goes through.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use calendar_duration::api::{Clock, DurationController, DurationRequest};
use calendar_duration::calculation::{STANDARD_WEEKEND, compute_duration, count_working_days};
use calendar_duration::config::ConfigLoader;
use calendar_duration::models::Instant;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

struct FixedClock(Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

fn make_instant(datetime_str: &str) -> Instant {
    Instant::from(NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S").unwrap())
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn create_controller() -> DurationController {
    let loader = ConfigLoader::load("./config").expect("Failed to load config");
    DurationController::from_loader(loader)
}

fn bench_single_computation(c: &mut Criterion) {
    let start = make_instant("2020-05-17 22:15:00");
    let end = make_instant("2024-08-03 06:05:30");

    c.bench_function("compute_duration", |b| {
        b.iter(|| black_box(compute_duration(black_box(start), black_box(end))))
    });
}

fn bench_span_lengths(c: &mut Criterion) {
    let start = make_instant("2000-01-31 12:00:00");
    let mut group = c.benchmark_group("span_length");

    for years in [0i64, 1, 10, 100] {
        let end = Instant::from(start.datetime() + TimeDelta::days(years * 365 + 17));
        group.bench_with_input(BenchmarkId::from_parameter(years), &end, |b, end| {
            b.iter(|| black_box(compute_duration(start, *end)))
        });
    }

    group.finish();
}

fn bench_live_hour(c: &mut Criterion) {
    let start = make_instant("2024-01-01 00:00:00");
    let ends: Vec<Instant> = (0..3_600)
        .map(|second| Instant::from(start.datetime() + TimeDelta::seconds(second)))
        .collect();

    let mut group = c.benchmark_group("live");
    group.throughput(Throughput::Elements(ends.len() as u64));

    group.bench_function("one_hour_of_ticks", |b| {
        b.iter(|| {
            for end in &ends {
                black_box(compute_duration(start, *end));
            }
        })
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let controller = create_controller();
    let clock = FixedClock(make_instant("2025-03-01 12:00:00"));
    let request = DurationRequest::between_dates("2023-01-15", "2023-03-20")
        .with_start_time("08:30")
        .with_end_time("17:45:10");

    c.bench_function("controller_calculate", |b| {
        b.iter(|| black_box(controller.calculate(black_box(&request), &clock).unwrap()))
    });
}

fn bench_working_days(c: &mut Criterion) {
    let start = make_date("2000-01-01");
    let end = make_date("2024-12-31");

    c.bench_function("working_days_25_years", |b| {
        b.iter(|| black_box(count_working_days(start, end, &STANDARD_WEEKEND).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_single_computation,
    bench_span_lengths,
    bench_live_hour,
    bench_controller,
    bench_working_days,
);
criterion_main!(benches);
