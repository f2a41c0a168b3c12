use chart_time_axis::api::{TimeAxisConfig, TimeAxisTickLayout, calculate_tick_values};
use chart_time_axis::core::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_YEAR, TimeTickDistance};
use chrono_tz::America::New_York;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// 2019-01-07T15:45:19.123Z
const NOW: f64 = 1_546_875_919_123.987;

fn bench_hourly_ticks_one_week(c: &mut Criterion) {
    c.bench_function("hourly_ticks_one_week", |b| {
        b.iter(|| {
            let _ = calculate_tick_values(
                black_box(NOW),
                black_box(NOW + 7.0 * MILLIS_PER_DAY),
                black_box(2.0 * MILLIS_PER_HOUR),
                &New_York,
            )
            .expect("ticks should succeed");
        })
    });
}

fn bench_daily_ticks_one_year(c: &mut Criterion) {
    c.bench_function("daily_ticks_one_year", |b| {
        b.iter(|| {
            let _ = calculate_tick_values(
                black_box(NOW),
                black_box(NOW + MILLIS_PER_YEAR),
                black_box(MILLIS_PER_DAY),
                &New_York,
            )
            .expect("ticks should succeed");
        })
    });
}

fn bench_tick_distance_selection(c: &mut Criterion) {
    let min_distances: Vec<f64> = (0..64).map(|i| 1.7_f64.powi(i)).collect();

    c.bench_function("tick_distance_selection_64", |b| {
        b.iter(|| {
            for min in &min_distances {
                let _ = TimeTickDistance::for_ticks(black_box(*min)).expect("selection");
            }
        })
    });
}

fn bench_axis_layout_one_month(c: &mut Criterion) {
    let config = TimeAxisConfig::new().with_timezone("America/New_York");

    c.bench_function("axis_layout_one_month", |b| {
        b.iter(|| {
            let _ = TimeAxisTickLayout::build(
                black_box(NOW),
                black_box(NOW + 30.0 * MILLIS_PER_DAY),
                black_box(12.0 * MILLIS_PER_HOUR),
                &config,
            )
            .expect("layout should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_hourly_ticks_one_week,
    bench_daily_ticks_one_year,
    bench_tick_distance_selection,
    bench_axis_layout_one_month
);
criterion_main!(benches);
