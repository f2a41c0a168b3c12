//! Threshold tables mapping a minimum distance onto a tick distance.

use tracing::debug;

use super::{
    DistanceDays, DistanceHours, DistanceMillis, DistanceMinutes, DistanceMonths,
    DistanceSeconds, DistanceYears, TimeTickDistance,
};
use crate::core::day_anchor::DayAnchorPolicy;
use crate::core::factors::Factors;
use crate::core::magnitude::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE};
use crate::error::{TimeAxisError, TimeAxisResult};

type Selector = fn(f64) -> TimeTickDistance;

/// Applies when the requested distance is strictly greater than `above`.
struct ThresholdRule {
    above: f64,
    select: Selector,
}

struct SelectionTable {
    rules: &'static [ThresholdRule],
    fallback: Selector,
}

impl SelectionTable {
    fn select(&self, min_distance: f64) -> TimeTickDistance {
        let selector = self
            .rules
            .iter()
            .find(|rule| min_distance > rule.above)
            .map_or(self.fallback, |rule| rule.select);
        selector(min_distance)
    }
}

static TICK_TABLE: SelectionTable = SelectionTable {
    rules: &[
        ThresholdRule {
            above: 365.0 * MILLIS_PER_DAY,
            select: |min| DistanceYears::at_least(min, Factors::All).into(),
        },
        ThresholdRule {
            above: 168.0 * MILLIS_PER_DAY,
            select: |_| DistanceYears::ONE_YEAR.into(),
        },
        ThresholdRule {
            above: 15.0 * MILLIS_PER_DAY,
            select: |min| DistanceMonths::at_least(min).into(),
        },
        ThresholdRule {
            above: 12.0 * MILLIS_PER_HOUR,
            select: |min| DistanceDays::at_least(min).into(),
        },
        ThresholdRule {
            above: 30.0 * MILLIS_PER_MINUTE,
            select: |min| DistanceHours::at_least(min).into(),
        },
        ThresholdRule {
            above: MILLIS_PER_MINUTE,
            select: |min| DistanceMinutes::at_least(min).into(),
        },
        ThresholdRule {
            above: 500.0,
            select: |min| DistanceSeconds::at_least(min).into(),
        },
    ],
    fallback: |min| DistanceMillis::at_least(min, Factors::All).into(),
};

static OFFSET_TABLE: SelectionTable = SelectionTable {
    rules: &[
        ThresholdRule {
            above: 60.0 * MILLIS_PER_DAY,
            select: |span| DistanceYears::at_least(span, Factors::Only10s).into(),
        },
        ThresholdRule {
            above: 2.0 * MILLIS_PER_DAY,
            select: |_| DistanceMonths::ONE_MONTH.into(),
        },
        ThresholdRule {
            above: 2.0 * MILLIS_PER_HOUR,
            select: |_| DistanceDays::new(DayAnchorPolicy::EveryDay).into(),
        },
        ThresholdRule {
            above: 2.0 * MILLIS_PER_MINUTE,
            select: |_| DistanceHours::ONE_HOUR.into(),
        },
        ThresholdRule {
            above: 2_000.0,
            select: |_| DistanceMinutes::ONE_MINUTE.into(),
        },
        ThresholdRule {
            above: 500.0,
            select: |_| DistanceSeconds::ONE_SECOND.into(),
        },
    ],
    fallback: |span| DistanceMillis::at_least(span, Factors::Only10s).into(),
};

fn validate_non_negative(value: f64) -> TimeAxisResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TimeAxisError::InvalidMinTickDistance { value });
    }
    Ok(())
}

impl TimeTickDistance {
    /// Coarsest-first selection of the regular tick distance for a minimum distance in millis.
    pub fn for_ticks(min_tick_distance: f64) -> TimeAxisResult<TimeTickDistance> {
        validate_non_negative(min_tick_distance)?;
        let distance = TICK_TABLE.select(min_tick_distance);
        debug!(min_tick_distance, %distance, "selected tick distance");
        Ok(distance)
    }

    /// Selects the offset label distance for the span of the visible range in millis.
    pub fn for_offsets(span: f64) -> TimeAxisResult<TimeTickDistance> {
        validate_non_negative(span)?;
        let distance = OFFSET_TABLE.select(span);
        debug!(span, %distance, "selected offset distance");
        Ok(distance)
    }
}
