use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::calendar::start_of_next_month;
use crate::core::magnitude::MILLIS_PER_DAY;

/// Which days of a month carry a tick when stepping in days.
///
/// Months have unequal length, so anything coarser than `EveryDay` uses a
/// fixed set of day-of-month anchors and restarts at day 1 of each month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum DayAnchorPolicy {
    #[default]
    EveryDay,
    Every5Days,
    Every10Days,
    Every15Days,
}

impl DayAnchorPolicy {
    const CANDIDATE_DAYS: [f64; 4] = [1.0, 5.0, 10.0, 15.0];

    /// Valid day-of-month anchors. Empty for `EveryDay` (every day is valid).
    #[must_use]
    pub fn anchor_days(self) -> &'static [u32] {
        match self {
            Self::EveryDay => &[],
            Self::Every5Days => &[1, 5, 10, 15, 20, 25],
            Self::Every10Days => &[1, 10, 20],
            Self::Every15Days => &[1, 15],
        }
    }

    /// Largest gap between two consecutive anchors, in days (25th -> 1st of a 31 day month).
    #[must_use]
    pub fn worst_case_days_distance(self) -> u32 {
        match self {
            Self::EveryDay => 1,
            Self::Every5Days => 7,
            Self::Every10Days => 12,
            Self::Every15Days => 17,
        }
    }

    #[must_use]
    pub fn typical_days_distance(self) -> u32 {
        match self {
            Self::EveryDay => 1,
            Self::Every5Days => 5,
            Self::Every10Days => 10,
            Self::Every15Days => 15,
        }
    }

    /// Estimated ticks per month, used for the global index.
    #[must_use]
    pub fn ticks_per_month(self) -> u32 {
        match self {
            Self::EveryDay => 31,
            other => other.anchor_days().len() as u32,
        }
    }

    /// Picks the policy for a minimum tick distance ("at least" selection over 1, 5, 10, 15 days).
    #[must_use]
    pub fn for_min_distance(min_tick_distance: f64) -> Self {
        let min_days = min_tick_distance / MILLIS_PER_DAY;
        let days = Self::CANDIDATE_DAYS
            .iter()
            .copied()
            .find(|candidate| *candidate >= min_days)
            .unwrap_or(15.0);

        if days >= 15.0 {
            Self::Every15Days
        } else if days >= 10.0 {
            Self::Every10Days
        } else if days >= 5.0 {
            Self::Every5Days
        } else {
            Self::EveryDay
        }
    }

    /// The anchor on or before `date` within the same month.
    #[must_use]
    pub fn same_or_below(self, date: NaiveDate) -> NaiveDate {
        let day = date.day();
        let anchor = self
            .anchor_days()
            .iter()
            .rev()
            .copied()
            .find(|anchor| *anchor <= day);

        match anchor {
            Some(anchor) => date.with_day(anchor).unwrap_or(date),
            None => date,
        }
    }

    /// The anchor following `current`, rolling over to day 1 of the next month.
    #[must_use]
    pub fn next(self, current: NaiveDate) -> Option<NaiveDate> {
        if self == Self::EveryDay {
            return current.succ_opt();
        }

        let day = current.day();
        match self.anchor_days().iter().copied().find(|anchor| *anchor > day) {
            Some(anchor) => current.with_day(anchor),
            None => start_of_next_month(current),
        }
    }
}
