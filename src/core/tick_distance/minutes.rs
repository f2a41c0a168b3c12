use std::fmt;

use super::{
    DistanceMillis, GlobalTimeIndex, TickSink, TickStrategy, TimeTickDistance,
    first_candidate_at_least, linear_index,
};
use crate::core::calendar::{CalendarZone, round_down_to_base};
use crate::core::magnitude::{MILLIS_PER_MINUTE, TimeMagnitude};
use crate::core::time_format::{I18nConfig, TimeLabelPattern, format_time_label};
use crate::error::{TimeAxisError, TimeAxisResult};

/// Ticks every n minutes, aligned to epoch minutes divisible by n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceMinutes {
    minutes: u32,
}

impl DistanceMinutes {
    const CANDIDATES: [u32; 6] = [1, 2, 5, 10, 15, 30];

    pub const ONE_MINUTE: Self = Self { minutes: 1 };

    pub fn new(minutes: u32) -> TimeAxisResult<Self> {
        if minutes == 0 {
            return Err(TimeAxisError::InvalidTickDistance(
                "minute distance must be >= 1".to_owned(),
            ));
        }
        Ok(Self { minutes })
    }

    #[must_use]
    pub fn minutes(self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub fn at_least(min_tick_distance: f64) -> Self {
        Self {
            minutes: first_candidate_at_least(
                &Self::CANDIDATES,
                min_tick_distance / MILLIS_PER_MINUTE,
            ),
        }
    }
}

impl TickStrategy for DistanceMinutes {
    fn magnitude(&self) -> TimeMagnitude {
        TimeMagnitude::Minutes
    }

    fn typical_distance_for_comparison(&self) -> f64 {
        f64::from(self.minutes) * MILLIS_PER_MINUTE
    }

    fn calculate_ticks_unchecked(
        &self,
        start: f64,
        end: f64,
        _zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>> {
        let start_minute = linear_index(start, MILLIS_PER_MINUTE).value();
        let first_minute = round_down_to_base(start_minute, i64::from(self.minutes));
        let first = first_minute as f64 * MILLIS_PER_MINUTE;
        let step = self.typical_distance_for_comparison();

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
        let minute_of_epoch = linear_index(millis, MILLIS_PER_MINUTE).value();
        GlobalTimeIndex(minute_of_epoch.div_euclid(i64::from(self.minutes)))
    }

    fn smallest_possible_tick_distance(&self) -> TimeTickDistance {
        DistanceMillis::ONE_MILLI.into()
    }
}

impl fmt::Display for DistanceMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 1 {
            f.write_str("1 minute")
        } else {
            write!(f, "{} minutes", self.minutes)
        }
    }
}
