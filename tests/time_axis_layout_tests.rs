use chart_time_axis::api::{TickLabelFormat, TimeAxisConfig, TimeAxisTickLayout};
use chart_time_axis::core::{
    DayAnchorPolicy, DistanceDays, DistanceMinutes, DistanceMonths, DistanceSeconds,
    MILLIS_PER_DAY, MILLIS_PER_HOUR, TimeTickDistance,
};
use chart_time_axis::TimeAxisError;

// 2019-01-07T15:45:19.123Z
const NOW: f64 = 1_546_875_919_123.987;
// 2019-01-30T12:00:00Z
const JAN_30_NOON: f64 = 1_548_849_600_000.0;
// 2019-02-01T05:00:00Z, midnight in New York
const FEB_1_NEW_YORK: f64 = 1_548_997_200_000.0;

fn new_york() -> TimeAxisConfig {
    TimeAxisConfig::new().with_timezone("America/New_York")
}

#[test]
fn regular_ticks_never_get_finer_than_the_offset_allows() {
    let layout = TimeAxisTickLayout::build(NOW, NOW + 3.0 * MILLIS_PER_DAY, 6.0 * MILLIS_PER_HOUR, &new_york())
        .expect("layout");

    assert_eq!(layout.offset_distance, TimeTickDistance::from(DistanceMonths::ONE_MONTH));
    assert_eq!(
        layout.tick_distance,
        TimeTickDistance::from(DistanceDays::new(DayAnchorPolicy::EveryDay))
    );

    let offset_labels: Vec<&str> = layout
        .offset_ticks
        .iter()
        .map(|tick| tick.label.as_str())
        .collect();
    assert_eq!(offset_labels, vec!["January 2019", "February 2019"]);
    assert!(layout.offset_ticks[0].millis <= NOW);

    assert_eq!(
        layout.labels(),
        vec!["Jan 8, 2019", "Jan 9, 2019", "Jan 10, 2019", "Jan 11, 2019"]
    );
    assert!(layout.ticks.iter().all(|tick| tick.millis >= NOW));
    assert!(layout.ticks.iter().all(|tick| !tick.covered_by_offset));
}

#[test]
fn ticks_on_offset_boundaries_are_flagged() {
    let layout = TimeAxisTickLayout::build(
        JAN_30_NOON,
        JAN_30_NOON + 4.0 * MILLIS_PER_DAY,
        6.0 * MILLIS_PER_HOUR,
        &new_york(),
    )
    .expect("layout");

    assert_eq!(layout.offset_ticks.len(), 3);
    assert_eq!(layout.ticks.len(), 5);

    let covered: Vec<f64> = layout
        .ticks
        .iter()
        .filter(|tick| tick.covered_by_offset)
        .map(|tick| tick.millis)
        .collect();
    assert_eq!(covered, vec![FEB_1_NEW_YORK]);

    let indices: Vec<i64> = layout.ticks.iter().map(|tick| tick.index.value()).collect();
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    assert_ne!(
        layout.ticks[0].index.alternating(2),
        layout.ticks[1].index.alternating(2)
    );
}

#[test]
fn short_ranges_label_time_of_day() {
    let layout = TimeAxisTickLayout::build(NOW, NOW + 60_000.0, 5_000.0, &new_york())
        .expect("layout");

    assert_eq!(layout.offset_distance, TimeTickDistance::from(DistanceMinutes::ONE_MINUTE));
    assert_eq!(
        layout.tick_distance,
        TimeTickDistance::from(DistanceSeconds::new(5).expect("seconds"))
    );
    assert_eq!(layout.ticks.len(), 12);
    assert_eq!(layout.ticks[0].label, "10:45:20 AM");
    assert_eq!(
        layout.ticks.iter().filter(|tick| tick.covered_by_offset).count(),
        1
    );
    assert_eq!(layout.offset_ticks[1].label, "1/7/19, 10:46 AM");
}

#[test]
fn tick_label_format_comes_from_config() {
    let config = new_york().with_tick_format(TickLabelFormat::RelativeTo {
        reference_millis: NOW.floor(),
    });
    let layout = TimeAxisTickLayout::build(NOW, NOW + 60_000.0, 5_000.0, &config)
        .expect("layout");
    assert_eq!(layout.ticks[0].label, "877 ms");
    assert_eq!(layout.ticks[1].label, "5 s 877 ms");
}

#[test]
fn collapsed_range_yields_empty_layout() {
    let layout = TimeAxisTickLayout::build(NOW, NOW, 1_000.0, &new_york()).expect("layout");
    assert!(layout.ticks.is_empty());
    assert!(layout.offset_ticks.is_empty());
}

#[test]
fn unknown_time_zone_is_reported() {
    let config = TimeAxisConfig::new().with_timezone("Mars/Olympus_Mons");
    assert_eq!(
        TimeAxisTickLayout::build(NOW, NOW + 1_000.0, 10.0, &config),
        Err(TimeAxisError::UnknownTimeZone("Mars/Olympus_Mons".to_owned()))
    );
}
