use tracing::debug;

use crate::core::{GlobalTimeIndex, I18nConfig, TimeTickDistance};
use crate::error::{TimeAxisError, TimeAxisResult};

use super::TimeAxisConfig;
use super::calculator::validate_range;

/// Tick that carries the coarse offset label (e.g. `January 2019`).
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetTick {
    pub millis: f64,
    pub label: String,
    pub index: GlobalTimeIndex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegularTick {
    pub millis: f64,
    pub label: String,
    pub index: GlobalTimeIndex,
    /// Same instant as an offset tick; renderers usually draw a placeholder instead of the label.
    pub covered_by_offset: bool,
}

/// Time-domain result of one time-axis layout pass.
///
/// Offset ticks start at the offset boundary at or before `start`, so the
/// first one labels the period the visible range begins in. Regular ticks
/// before `start` are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxisTickLayout {
    pub offset_distance: TimeTickDistance,
    pub tick_distance: TimeTickDistance,
    pub offset_ticks: Vec<OffsetTick>,
    pub ticks: Vec<RegularTick>,
}

impl TimeAxisTickLayout {
    pub fn build(
        start: f64,
        end: f64,
        min_tick_distance: f64,
        config: &TimeAxisConfig,
    ) -> TimeAxisResult<Self> {
        validate_range(start, end)?;
        if !min_tick_distance.is_finite() || min_tick_distance < 0.0 {
            return Err(TimeAxisError::InvalidMinTickDistance {
                value: min_tick_distance,
            });
        }
        config.validate()?;
        let i18n = config.i18n()?;

        let offset_distance = TimeTickDistance::for_offsets(end - start)?;
        let tick_distance = TimeTickDistance::for_ticks(min_tick_distance)?
            .coerce_at_least(offset_distance.smallest_possible_tick_distance());

        if start == end {
            return Ok(Self {
                offset_distance,
                tick_distance,
                offset_ticks: Vec::new(),
                ticks: Vec::new(),
            });
        }

        let offset_ticks = offset_distance
            .calculate_ticks(start, end, &i18n.timezone)?
            .into_iter()
            .map(|millis| OffsetTick {
                millis,
                label: offset_distance.format_as_offset(millis, i18n),
                index: offset_distance.calculate_estimated_index(millis, &i18n.timezone),
            })
            .collect::<Vec<_>>();

        let ticks = tick_distance
            .calculate_ticks(start, end, &i18n.timezone)?
            .into_iter()
            .filter(|millis| *millis >= start)
            .map(|millis| regular_tick(millis, &tick_distance, &offset_ticks, config, i18n))
            .collect::<Vec<_>>();

        debug!(
            %offset_distance,
            %tick_distance,
            offset_ticks = offset_ticks.len(),
            ticks = ticks.len(),
            "built time axis tick layout"
        );

        Ok(Self {
            offset_distance,
            tick_distance,
            offset_ticks,
            ticks,
        })
    }

    /// Labels of the regular ticks in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|tick| tick.label.as_str()).collect()
    }
}

fn regular_tick(
    millis: f64,
    distance: &TimeTickDistance,
    offset_ticks: &[OffsetTick],
    config: &TimeAxisConfig,
    i18n: I18nConfig,
) -> RegularTick {
    let covered_by_offset = offset_ticks
        .binary_search_by(|offset| offset.millis.total_cmp(&millis))
        .is_ok();
    RegularTick {
        millis,
        label: config.tick_format.format(millis, distance, i18n),
        index: distance.calculate_estimated_index(millis, &i18n.timezone),
        covered_by_offset,
    }
}
