use std::fmt;

use super::{
    DistanceMillis, GlobalTimeIndex, TickSink, TickStrategy, TimeTickDistance,
    first_candidate_at_least, linear_index,
};
use crate::core::calendar::{CalendarZone, round_down_to_base};
use crate::core::magnitude::{MILLIS_PER_SECOND, TimeMagnitude};
use crate::core::time_format::{I18nConfig, TimeLabelPattern, format_time_label};
use crate::error::{TimeAxisError, TimeAxisResult};

/// Ticks every n seconds, aligned to epoch seconds divisible by n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceSeconds {
    seconds: u32,
}

impl DistanceSeconds {
    const CANDIDATES: [u32; 7] = [1, 2, 5, 10, 15, 30, 60];

    pub const ONE_SECOND: Self = Self { seconds: 1 };

    pub fn new(seconds: u32) -> TimeAxisResult<Self> {
        if seconds == 0 {
            return Err(TimeAxisError::InvalidTickDistance(
                "second distance must be >= 1".to_owned(),
            ));
        }
        Ok(Self { seconds })
    }

    #[must_use]
    pub fn seconds(self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn at_least(min_tick_distance: f64) -> Self {
        Self {
            seconds: first_candidate_at_least(
                &Self::CANDIDATES,
                min_tick_distance / MILLIS_PER_SECOND,
            ),
        }
    }

    fn step_millis(self) -> f64 {
        f64::from(self.seconds) * MILLIS_PER_SECOND
    }
}

impl TickStrategy for DistanceSeconds {
    fn magnitude(&self) -> TimeMagnitude {
        TimeMagnitude::Seconds
    }

    fn typical_distance_for_comparison(&self) -> f64 {
        self.step_millis()
    }

    fn calculate_ticks_unchecked(
        &self,
        start: f64,
        end: f64,
        _zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>> {
        let start_second = linear_index(start, MILLIS_PER_SECOND).value();
        let first = round_down_to_base(start_second, i64::from(self.seconds)) as f64
            * MILLIS_PER_SECOND;
        let step = self.step_millis();

        let mut sink = TickSink::new(self, start, end);
        let mut tick = first;
        let mut index = 0.0;
        while tick <= end {
            sink.push(tick)?;
            index += 1.0;
            tick = first + index * step;
        }
        Ok(sink.finish())
    }

    fn format_as_offset(&self, millis: f64, i18n: I18nConfig) -> String {
        format_time_label(millis, TimeLabelPattern::DateTime, i18n)
    }

    fn calculate_estimated_index(&self, millis: f64, _zone: &dyn CalendarZone) -> GlobalTimeIndex {
        let second_of_epoch = linear_index(millis, MILLIS_PER_SECOND).value();
        GlobalTimeIndex(second_of_epoch.div_euclid(i64::from(self.seconds)))
    }

    fn smallest_possible_tick_distance(&self) -> TimeTickDistance {
        DistanceMillis::ONE_MILLI.into()
    }
}

impl fmt::Display for DistanceSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 1 {
            f.write_str("1 second")
        } else {
            write!(f, "{} seconds", self.seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceSeconds;

    #[test]
    fn at_least_tops_out_at_one_minute() {
        assert_eq!(DistanceSeconds::at_least(400.0).seconds(), 1);
        assert_eq!(DistanceSeconds::at_least(3_000.0).seconds(), 5);
        assert_eq!(DistanceSeconds::at_least(45_000.0).seconds(), 60);
        assert_eq!(DistanceSeconds::at_least(90_000.0).seconds(), 60);
    }
}
