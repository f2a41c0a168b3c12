use std::fmt;

use chrono::Datelike;

use super::{
    DistanceDays, GlobalTimeIndex, TickSink, TickStrategy, TimeTickDistance, calendar_overflow,
    linear_index, nice_multiple,
};
use crate::core::calendar::{
    CalendarZone, plus_years, round_down_to_base, start_of_next_year, start_of_year,
};
use crate::core::day_anchor::DayAnchorPolicy;
use crate::core::factors::Factors;
use crate::core::magnitude::{MILLIS_PER_YEAR, TimeMagnitude};
use crate::core::time_format::{I18nConfig, TimeLabelPattern, format_time_label};
use crate::error::{TimeAxisError, TimeAxisResult};

/// Ticks on January 1st of every n-th year (years divisible by n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceYears {
    years: u32,
}

impl DistanceYears {
    pub const ONE_YEAR: Self = Self { years: 1 };

    pub fn new(years: u32) -> TimeAxisResult<Self> {
        if years == 0 {
            return Err(TimeAxisError::InvalidTickDistance(
                "year distance must be >= 1".to_owned(),
            ));
        }
        Ok(Self { years })
    }

    #[must_use]
    pub fn years(self) -> u32 {
        self.years
    }

    /// Smallest "nice" year step (power of ten times a factor) covering `min_tick_distance` millis.
    #[must_use]
    pub fn at_least(min_tick_distance: f64, factors: Factors) -> Self {
        let years = min_tick_distance / MILLIS_PER_YEAR;
        if !years.is_finite() || years <= 0.0 {
            return Self::ONE_YEAR;
        }
        let step = nice_multiple(years, factors).ceil().clamp(1.0, f64::from(u32::MAX));
        Self {
            years: step as u32,
        }
    }
}

impl TickStrategy for DistanceYears {
    fn magnitude(&self) -> TimeMagnitude {
        TimeMagnitude::Years
    }

    fn typical_distance_for_comparison(&self) -> f64 {
        f64::from(self.years) * MILLIS_PER_YEAR
    }

    fn calculate_ticks_unchecked(
        &self,
        start: f64,
        end: f64,
        zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>> {
        let start_date = zone.local_date(start).ok_or_else(|| calendar_overflow(self))?;
        let end_date = zone.local_date(end).ok_or_else(|| calendar_overflow(self))?;
        let last = start_of_next_year(end_date).ok_or_else(|| calendar_overflow(self))?;

        let first_year = round_down_to_base(i64::from(start_date.year()), i64::from(self.years));
        let aligned = i32::try_from(first_year).ok().and_then(start_of_year);

        let mut sink = TickSink::new(self, start, end);
        let mut current = match aligned {
            Some(date) => Some(date),
            // the aligned year precedes the calendar, so open with the start year
            None => {
                let opening = start_of_year(start_date.year())
                    .and_then(|date| zone.start_of_day_millis(date))
                    .ok_or_else(|| calendar_overflow(self))?;
                sink.push(opening)?;
                i32::try_from(first_year + i64::from(self.years))
                    .ok()
                    .and_then(start_of_year)
            }
        };
        // a step beyond the calendar range is certainly beyond `last`
        while let Some(date) = current.filter(|date| *date <= last) {
            let tick = zone
                .start_of_day_millis(date)
                .ok_or_else(|| calendar_overflow(self))?;
            sink.push(tick)?;
            current = plus_years(date, self.years);
        }
        Ok(sink.finish())
    }

    fn format_as_offset(&self, millis: f64, i18n: I18nConfig) -> String {
        match i18n.timezone.local_date(millis) {
            Some(date) => {
                round_down_to_base(i64::from(date.year()), i64::from(self.years)).to_string()
            }
            None => format_time_label(millis, TimeLabelPattern::Year, i18n),
        }
    }

    fn calculate_estimated_index(&self, millis: f64, zone: &dyn CalendarZone) -> GlobalTimeIndex {
        match zone.local_date(millis) {
            Some(date) => {
                GlobalTimeIndex(i64::from(date.year()).div_euclid(i64::from(self.years)))
            }
            None => linear_index(millis, self.typical_distance_for_comparison()),
        }
    }

    fn smallest_possible_tick_distance(&self) -> TimeTickDistance {
        DistanceDays::new(DayAnchorPolicy::EveryDay).into()
    }
}

impl fmt::Display for DistanceYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years == 1 {
            f.write_str("1 year")
        } else {
            write!(f, "{} years", self.years)
        }
    }
}
