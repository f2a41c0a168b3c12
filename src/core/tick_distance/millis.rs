use std::fmt;

use ordered_float::OrderedFloat;

use super::{
    GlobalTimeIndex, TickSink, TickStrategy, TimeTickDistance, linear_index, nice_multiple,
};
use crate::core::calendar::CalendarZone;
use crate::core::factors::Factors;
use crate::core::magnitude::TimeMagnitude;
use crate::core::time_format::{I18nConfig, TimeLabelPattern, format_time_label};
use crate::error::{TimeAxisError, TimeAxisResult};

/// Ticks every n milliseconds, where n may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceMillis {
    millis: OrderedFloat<f64>,
}

impl DistanceMillis {
    pub const ONE_MILLI: Self = Self {
        millis: OrderedFloat(1.0),
    };

    pub fn new(millis: f64) -> TimeAxisResult<Self> {
        if !millis.is_finite() || millis <= 0.0 {
            return Err(TimeAxisError::InvalidTickDistance(format!(
                "millis distance must be finite and > 0, got {millis}"
            )));
        }
        Ok(Self {
            millis: OrderedFloat(millis),
        })
    }

    #[must_use]
    pub fn millis(self) -> f64 {
        self.millis.into_inner()
    }

    /// Smallest "nice" millis step covering `min_tick_distance`; never below one millisecond.
    #[must_use]
    pub fn at_least(min_tick_distance: f64, factors: Factors) -> Self {
        if !min_tick_distance.is_finite() || min_tick_distance <= 1.0 {
            return Self::ONE_MILLI;
        }
        Self {
            millis: OrderedFloat(nice_multiple(min_tick_distance, factors).max(1.0)),
        }
    }
}

impl TickStrategy for DistanceMillis {
    fn magnitude(&self) -> TimeMagnitude {
        TimeMagnitude::Millis
    }

    fn typical_distance_for_comparison(&self) -> f64 {
        self.millis()
    }

    fn calculate_ticks_unchecked(
        &self,
        start: f64,
        end: f64,
        _zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>> {
        let step = self.millis();
        let first = if step < 1.0 {
            start
        } else {
            (start / step).floor() * step
        };

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
        format_time_label(millis, TimeLabelPattern::DateTimeShortWithMillis, i18n)
    }

    fn calculate_estimated_index(&self, millis: f64, _zone: &dyn CalendarZone) -> GlobalTimeIndex {
        linear_index(millis, self.millis())
    }

    fn smallest_possible_tick_distance(&self) -> TimeTickDistance {
        Self::ONE_MILLI.into()
    }
}

impl fmt::Display for DistanceMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.millis())
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceMillis;
    use crate::core::factors::Factors;

    #[test]
    fn non_positive_distances_are_rejected() {
        assert!(DistanceMillis::new(0.0).is_err());
        assert!(DistanceMillis::new(-5.0).is_err());
        assert!(DistanceMillis::new(f64::NAN).is_err());
        assert!(DistanceMillis::new(0.25).is_ok());
    }

    #[test]
    fn at_least_never_drops_below_one_milli() {
        assert_eq!(DistanceMillis::at_least(0.0, Factors::All).millis(), 1.0);
        assert_eq!(DistanceMillis::at_least(0.3, Factors::All).millis(), 1.0);
        assert_eq!(DistanceMillis::at_least(42.0, Factors::All).millis(), 50.0);
        assert_eq!(DistanceMillis::at_least(400.0, Factors::Only10s).millis(), 1_000.0);
    }
}
