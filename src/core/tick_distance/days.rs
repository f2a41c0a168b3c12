use std::fmt;

use chrono::{Datelike, Days};

use super::{
    DistanceMillis, GlobalTimeIndex, TickSink, TickStrategy, TimeTickDistance, calendar_overflow,
    linear_index,
};
use crate::core::calendar::{CalendarZone, month_of_epoch};
use crate::core::day_anchor::DayAnchorPolicy;
use crate::core::magnitude::{MILLIS_PER_DAY, TimeMagnitude};
use crate::core::time_format::{I18nConfig, TimeLabelPattern, format_time_label};
use crate::error::TimeAxisResult;

/// Ticks at local midnight of the days selected by a [`DayAnchorPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DistanceDays {
    policy: DayAnchorPolicy,
}

impl DistanceDays {
    #[must_use]
    pub const fn new(policy: DayAnchorPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(self) -> DayAnchorPolicy {
        self.policy
    }

    #[must_use]
    pub fn at_least(min_tick_distance: f64) -> Self {
        Self::new(DayAnchorPolicy::for_min_distance(min_tick_distance))
    }
}

impl TickStrategy for DistanceDays {
    fn magnitude(&self) -> TimeMagnitude {
        TimeMagnitude::Days
    }

    fn typical_distance_for_comparison(&self) -> f64 {
        f64::from(self.policy.worst_case_days_distance()) * MILLIS_PER_DAY
    }

    fn calculate_ticks_unchecked(
        &self,
        start: f64,
        end: f64,
        zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>> {
        let start_date = zone.local_date(start).ok_or_else(|| calendar_overflow(self))?;
        let end_date = zone.local_date(end).ok_or_else(|| calendar_overflow(self))?;
        let last = end_date
            .checked_add_days(Days::new(u64::from(self.policy.worst_case_days_distance())))
            .ok_or_else(|| calendar_overflow(self))?;

        let mut current = self.policy.same_or_below(start_date);
        let mut sink = TickSink::new(self, start, end);
        while current <= last {
            let tick = zone
                .start_of_day_millis(current)
                .ok_or_else(|| calendar_overflow(self))?;
            sink.push(tick)?;
            match self.policy.next(current) {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(sink.finish())
    }

    fn format_as_offset(&self, millis: f64, i18n: I18nConfig) -> String {
        format_time_label(millis, TimeLabelPattern::Date, i18n)
    }

    fn calculate_estimated_index(&self, millis: f64, zone: &dyn CalendarZone) -> GlobalTimeIndex {
        let Some(date) = zone.local_date(millis) else {
            return linear_index(millis, self.typical_distance_for_comparison());
        };
        let ticks_per_month = i64::from(self.policy.ticks_per_month());
        let within_month = i64::from(date.day()) / i64::from(self.policy.typical_days_distance());
        GlobalTimeIndex(month_of_epoch(date) * ticks_per_month + within_month)
    }

    fn smallest_possible_tick_distance(&self) -> TimeTickDistance {
        DistanceMillis::ONE_MILLI.into()
    }
}

impl fmt::Display for DistanceDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.policy {
            DayAnchorPolicy::EveryDay => f.write_str("every day"),
            policy => write!(f, "every {} days", policy.typical_days_distance()),
        }
    }
}
