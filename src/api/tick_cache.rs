use chrono_tz::Tz;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::error::TimeAxisResult;

use super::{TimeAxisConfig, calculate_tick_values};

/// Runtime metrics exposed by [`TickValuesCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickValuesCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TickValuesKey {
    start: OrderedFloat<f64>,
    end: OrderedFloat<f64>,
    min_tick_distance: OrderedFloat<f64>,
    timezone: Tz,
}

/// Memo of [`calculate_tick_values`] results.
///
/// Keeps at most `capacity` entries and evicts the oldest insertion first.
/// Failed calculations are not stored.
#[derive(Debug, Default)]
pub struct TickValuesCache {
    entries: IndexMap<TickValuesKey, Vec<f64>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl TickValuesCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Sized by [`TimeAxisConfig::tick_cache_capacity`].
    #[must_use]
    pub fn from_config(config: &TimeAxisConfig) -> Self {
        Self::new(config.tick_cache_capacity)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn tick_values(
        &mut self,
        start: f64,
        end: f64,
        min_tick_distance: f64,
        timezone: Tz,
    ) -> TimeAxisResult<Vec<f64>> {
        let key = TickValuesKey {
            start: OrderedFloat(start),
            end: OrderedFloat(end),
            min_tick_distance: OrderedFloat(min_tick_distance),
            timezone,
        };
        if let Some(ticks) = self.entries.get(&key) {
            self.hits = self.hits.saturating_add(1);
            return Ok(ticks.clone());
        }

        self.misses = self.misses.saturating_add(1);
        let ticks = calculate_tick_values(start, end, min_tick_distance, &timezone)?;
        if self.capacity == 0 {
            return Ok(ticks);
        }
        while self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, ticks.clone());
        Ok(ticks)
    }

    #[must_use]
    pub fn stats(&self) -> TickValuesCacheStats {
        TickValuesCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
