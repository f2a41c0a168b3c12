use std::fmt;

use chrono::Timelike;

use super::{
    DistanceMillis, GlobalTimeIndex, TickSink, TickStrategy, TimeTickDistance, calendar_overflow,
    first_candidate_at_least, linear_index,
};
use crate::core::calendar::CalendarZone;
use crate::core::magnitude::{MILLIS_PER_HOUR, TimeMagnitude};
use crate::core::time_format::{I18nConfig, TimeLabelPattern, format_time_label};
use crate::error::{TimeAxisError, TimeAxisResult};

/// Ticks every n hours, starting at the local hour of day rounded down to a
/// multiple of n.
///
/// Steps are added in absolute time, so DST transitions shift the local
/// wall-clock hour of later ticks instead of producing irregular gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceHours {
    hours: u32,
}

impl DistanceHours {
    const CANDIDATES: [u32; 6] = [1, 2, 3, 4, 6, 12];

    pub const ONE_HOUR: Self = Self { hours: 1 };

    pub fn new(hours: u32) -> TimeAxisResult<Self> {
        if hours == 0 {
            return Err(TimeAxisError::InvalidTickDistance(
                "hour distance must be >= 1".to_owned(),
            ));
        }
        Ok(Self { hours })
    }

    #[must_use]
    pub fn hours(self) -> u32 {
        self.hours
    }

    #[must_use]
    pub fn at_least(min_tick_distance: f64) -> Self {
        Self {
            hours: first_candidate_at_least(&Self::CANDIDATES, min_tick_distance / MILLIS_PER_HOUR),
        }
    }

    fn step_millis(self) -> f64 {
        f64::from(self.hours) * MILLIS_PER_HOUR
    }

    fn first_tick(self, start: f64, zone: &dyn CalendarZone) -> Option<f64> {
        let local = zone.local_date_time(start)?;
        let hour = local.hour() / self.hours * self.hours;
        let hour_start = local.date().and_hms_opt(hour, 0, 0)?;
        let anchored = zone.local_to_millis(hour_start)?;
        // zones with half-hour DST shifts may push the local hour past `start`
        if anchored > start {
            let step = self.step_millis();
            return Some((start / step).floor() * step);
        }
        Some(anchored)
    }
}

impl TickStrategy for DistanceHours {
    fn magnitude(&self) -> TimeMagnitude {
        TimeMagnitude::Hours
    }

    fn typical_distance_for_comparison(&self) -> f64 {
        self.step_millis()
    }

    fn calculate_ticks_unchecked(
        &self,
        start: f64,
        end: f64,
        zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>> {
        let first = self
            .first_tick(start, zone)
            .ok_or_else(|| calendar_overflow(self))?;
        let step = self.step_millis();

        let mut sink = TickSink::new(self, start, end);
        let mut index = 0.0;
        loop {
            let tick = first + index * step;
            if tick > end {
                break;
            }
            sink.push(tick)?;
            index += 1.0;
        }
        Ok(sink.finish())
    }

    fn format_as_offset(&self, millis: f64, i18n: I18nConfig) -> String {
        format_time_label(millis, TimeLabelPattern::DateTimeShort, i18n)
    }

    fn calculate_estimated_index(&self, millis: f64, _zone: &dyn CalendarZone) -> GlobalTimeIndex {
        let hour_of_epoch = linear_index(millis, MILLIS_PER_HOUR).value();
        GlobalTimeIndex(hour_of_epoch.div_euclid(i64::from(self.hours)))
    }

    fn smallest_possible_tick_distance(&self) -> TimeTickDistance {
        DistanceMillis::ONE_MILLI.into()
    }
}

impl fmt::Display for DistanceHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours == 1 {
            f.write_str("1 hour")
        } else {
            write!(f, "{} hours", self.hours)
        }
    }
}
