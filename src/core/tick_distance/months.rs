use std::fmt;

use chrono::Datelike;

use super::{
    DistanceDays, GlobalTimeIndex, TickSink, TickStrategy, TimeTickDistance, calendar_overflow,
    first_candidate_at_least, linear_index,
};
use crate::core::calendar::{
    CalendarZone, month_of_epoch, plus_months, round_down_to_base, start_of_month,
    start_of_next_month,
};
use crate::core::day_anchor::DayAnchorPolicy;
use crate::core::magnitude::{MILLIS_PER_DAY, TimeMagnitude};
use crate::core::time_format::{I18nConfig, TimeLabelPattern, format_time_label};
use crate::error::{TimeAxisError, TimeAxisResult};

/// Ticks on the first day of every n-th month (zero-based month divisible by n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistanceMonths {
    months: u32,
}

impl DistanceMonths {
    const CANDIDATES: [u32; 4] = [1, 2, 3, 6];

    pub const ONE_MONTH: Self = Self { months: 1 };

    /// Accepts 1 to 11 months. Larger distances are expressed in years.
    pub fn new(months: u32) -> TimeAxisResult<Self> {
        if !(1..=11).contains(&months) {
            return Err(TimeAxisError::InvalidTickDistance(format!(
                "month distance must be within 1..=11, got {months}"
            )));
        }
        Ok(Self { months })
    }

    #[must_use]
    pub fn months(self) -> u32 {
        self.months
    }

    /// Smallest of 1, 2, 3 or 6 months whose shortest span (28 days per month) covers `min_tick_distance`.
    #[must_use]
    pub fn at_least(min_tick_distance: f64) -> Self {
        let ratio = min_tick_distance / (28.0 * MILLIS_PER_DAY);
        Self {
            months: first_candidate_at_least(&Self::CANDIDATES, ratio),
        }
    }
}

impl TickStrategy for DistanceMonths {
    fn magnitude(&self) -> TimeMagnitude {
        TimeMagnitude::Months
    }

    fn typical_distance_for_comparison(&self) -> f64 {
        f64::from(self.months) * 30.0 * MILLIS_PER_DAY
    }

    fn calculate_ticks_unchecked(
        &self,
        start: f64,
        end: f64,
        zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>> {
        let start_date = zone.local_date(start).ok_or_else(|| calendar_overflow(self))?;
        let end_date = zone.local_date(end).ok_or_else(|| calendar_overflow(self))?;
        let last = start_of_next_month(end_date).ok_or_else(|| calendar_overflow(self))?;

        let month0 = round_down_to_base(i64::from(start_date.month0()), i64::from(self.months));
        let mut current = start_of_month(start_date.year(), month0 as u32 + 1)
            .ok_or_else(|| calendar_overflow(self))?;

        let mut sink = TickSink::new(self, start, end);
        while current <= last {
            let tick = zone
                .start_of_day_millis(current)
                .ok_or_else(|| calendar_overflow(self))?;
            sink.push(tick)?;
            match plus_months(current, self.months) {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(sink.finish())
    }

    fn format_as_offset(&self, millis: f64, i18n: I18nConfig) -> String {
        format_time_label(millis, TimeLabelPattern::YearMonth, i18n)
    }

    fn calculate_estimated_index(&self, millis: f64, zone: &dyn CalendarZone) -> GlobalTimeIndex {
        match zone.local_date(millis) {
            Some(date) => GlobalTimeIndex(month_of_epoch(date).div_euclid(i64::from(self.months))),
            None => linear_index(millis, self.typical_distance_for_comparison()),
        }
    }

    fn smallest_possible_tick_distance(&self) -> TimeTickDistance {
        DistanceDays::new(DayAnchorPolicy::EveryDay).into()
    }
}

impl fmt::Display for DistanceMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.months == 1 {
            f.write_str("1 month")
        } else {
            write!(f, "{} months", self.months)
        }
    }
}
