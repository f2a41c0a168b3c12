use chart_time_axis::api::{
    TickValuesCache, TickValuesCacheStats, TimeAxisConfig, calculate_tick_values,
};
use chart_time_axis::TimeAxisError;
use chrono_tz::America::New_York;
use chrono_tz::Tz;

// 2019-01-07T15:45:19.123Z
const NOW: f64 = 1_546_875_919_123.987;

#[test]
fn repeated_requests_hit_the_cache() {
    let mut cache = TickValuesCache::new(4);
    let first = cache
        .tick_values(NOW, NOW + 60_000.0, 5_000.0, New_York)
        .expect("ticks");
    let second = cache
        .tick_values(NOW, NOW + 60_000.0, 5_000.0, New_York)
        .expect("ticks");

    assert_eq!(first, second);
    assert_eq!(
        first,
        calculate_tick_values(NOW, NOW + 60_000.0, 5_000.0, &New_York).expect("ticks")
    );
    assert_eq!(
        cache.stats(),
        TickValuesCacheStats {
            hits: 1,
            misses: 1,
            size: 1,
        }
    );
}

#[test]
fn time_zone_is_part_of_the_key() {
    let mut cache = TickValuesCache::new(4);
    cache
        .tick_values(NOW, NOW + 86_400_000.0, 3_600_000.0, New_York)
        .expect("ticks");
    cache
        .tick_values(NOW, NOW + 86_400_000.0, 3_600_000.0, Tz::UTC)
        .expect("ticks");
    assert_eq!(cache.stats().misses, 2);
    assert_eq!(cache.stats().size, 2);
}

#[test]
fn oldest_entry_is_evicted_first() {
    let mut cache = TickValuesCache::new(2);
    for offset in [0.0, 1.0, 2.0] {
        cache
            .tick_values(NOW + offset, NOW + 60_000.0, 5_000.0, Tz::UTC)
            .expect("ticks");
    }
    assert_eq!(cache.stats().size, 2);

    cache
        .tick_values(NOW + 2.0, NOW + 60_000.0, 5_000.0, Tz::UTC)
        .expect("ticks");
    cache
        .tick_values(NOW, NOW + 60_000.0, 5_000.0, Tz::UTC)
        .expect("ticks");
    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 4);
}

#[test]
fn zero_capacity_disables_storage() {
    let mut cache = TickValuesCache::new(0);
    cache
        .tick_values(NOW, NOW + 60_000.0, 5_000.0, Tz::UTC)
        .expect("ticks");
    cache
        .tick_values(NOW, NOW + 60_000.0, 5_000.0, Tz::UTC)
        .expect("ticks");
    assert_eq!(
        cache.stats(),
        TickValuesCacheStats {
            hits: 0,
            misses: 2,
            size: 0,
        }
    );
}

#[test]
fn failures_are_not_cached() {
    let mut cache = TickValuesCache::new(4);
    let result = cache.tick_values(NOW, NOW - 1.0, 5_000.0, Tz::UTC);
    assert!(matches!(result, Err(TimeAxisError::InvalidRange { .. })));
    assert_eq!(cache.stats().size, 0);

    cache.clear();
    assert_eq!(cache.stats(), TickValuesCacheStats::default());
}

#[test]
fn capacity_comes_from_config() {
    let config = TimeAxisConfig::new().with_tick_cache_capacity(1);
    let mut cache = TickValuesCache::from_config(&config);
    assert_eq!(cache.capacity(), 1);

    let zone = config.time_zone().expect("zone");
    cache
        .tick_values(NOW, NOW + 60_000.0, 5_000.0, zone)
        .expect("ticks");
    cache
        .tick_values(NOW, NOW + 120_000.0, 5_000.0, zone)
        .expect("ticks");
    assert_eq!(cache.stats().size, 1);

    let disabled = TimeAxisConfig::new().with_tick_cache_capacity(0);
    assert_eq!(TickValuesCache::from_config(&disabled).capacity(), 0);
    assert_eq!(
        TickValuesCache::from_config(&TimeAxisConfig::default()).capacity(),
        64
    );
}
