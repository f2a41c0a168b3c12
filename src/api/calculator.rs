use chrono::Utc;
use tracing::debug;

use crate::core::{CalendarZone, TimeTickDistance, is_supported_timestamp};
use crate::error::{TimeAxisError, TimeAxisResult};

/// Calculates the tick values for a visible time range.
///
/// `start` and `end` are inclusive epoch millis, `min_tick_distance` is the
/// smallest allowed distance between two ticks in millis. A collapsed range
/// (`start == end`) yields no ticks.
pub fn calculate_tick_values(
    start: f64,
    end: f64,
    min_tick_distance: f64,
    zone: &dyn CalendarZone,
) -> TimeAxisResult<Vec<f64>> {
    validate_range(start, end)?;
    if !min_tick_distance.is_finite() || min_tick_distance < 0.0 {
        return Err(TimeAxisError::InvalidMinTickDistance {
            value: min_tick_distance,
        });
    }
    if start == end {
        return Ok(Vec::new());
    }

    let distance = TimeTickDistance::for_ticks(min_tick_distance)?;
    let ticks = distance.calculate_ticks(start, end, zone)?;
    debug!(
        start,
        end,
        min_tick_distance,
        %distance,
        count = ticks.len(),
        "calculated tick values"
    );
    Ok(ticks)
}

/// [`calculate_tick_values`] in UTC.
pub fn calculate_tick_values_utc(
    start: f64,
    end: f64,
    min_tick_distance: f64,
) -> TimeAxisResult<Vec<f64>> {
    calculate_tick_values(start, end, min_tick_distance, &Utc)
}

pub(super) fn validate_range(start: f64, end: f64) -> TimeAxisResult<()> {
    for value in [start, end] {
        if !is_supported_timestamp(value) {
            return Err(TimeAxisError::UnsupportedTimestamp { value });
        }
    }
    if start > end {
        return Err(TimeAxisError::InvalidRange { start, end });
    }
    Ok(())
}
