//! Calendar port used by the tick strategies.
//!
//! Strategies never do day/month arithmetic by hand. They convert epoch
//! millis to local calendar fields through [`CalendarZone`], snap to the
//! start of a period with the helpers below and convert back.

use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
};
use tracing::warn;

/// Smallest supported instant: `-100000-01-01T00:00:00Z`.
pub const MIN_SUPPORTED_MILLIS: f64 = -3_217_862_419_200_000.0;
/// Greatest supported instant: `+100000-01-01T00:00:00Z`.
pub const MAX_SUPPORTED_MILLIS: f64 = 3_093_527_980_800_000.0;

#[must_use]
pub fn is_supported_timestamp(millis: f64) -> bool {
    millis.is_finite() && (MIN_SUPPORTED_MILLIS..=MAX_SUPPORTED_MILLIS).contains(&millis)
}

/// Timezone-aware conversion between epoch millis and local calendar fields.
///
/// Implemented for every `chrono::TimeZone`, so `Utc`, `FixedOffset` and
/// `chrono_tz::Tz` can all be injected.
pub trait CalendarZone {
    /// Local wall-clock time for the given instant (sub-millisecond part dropped).
    fn local_date_time(&self, millis: f64) -> Option<NaiveDateTime>;

    /// Instant of the given local wall-clock time.
    ///
    /// Ambiguous local times resolve to the earliest instant. Local times inside
    /// a DST gap are moved forward by one hour.
    fn local_to_millis(&self, local: NaiveDateTime) -> Option<f64>;

    fn local_date(&self, millis: f64) -> Option<NaiveDate> {
        self.local_date_time(millis).map(|local| local.date())
    }

    fn start_of_day_millis(&self, date: NaiveDate) -> Option<f64> {
        self.local_to_millis(date.and_time(NaiveTime::MIN))
    }
}

impl<Z: TimeZone> CalendarZone for Z {
    fn local_date_time(&self, millis: f64) -> Option<NaiveDateTime> {
        if !millis.is_finite() {
            return None;
        }
        let utc = DateTime::<Utc>::from_timestamp_millis(millis.floor() as i64)?;
        Some(utc.with_timezone(self).naive_local())
    }

    fn local_to_millis(&self, local: NaiveDateTime) -> Option<f64> {
        let resolved = match self.from_local_datetime(&local).earliest() {
            Some(resolved) => resolved,
            None => {
                warn!(%local, "local time falls into a DST gap, moving forward one hour");
                let shifted = local.checked_add_signed(TimeDelta::hours(1))?;
                self.from_local_datetime(&shifted).earliest()?
            }
        };
        Some(resolved.timestamp_millis() as f64)
    }
}

#[must_use]
pub fn start_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

#[must_use]
pub fn start_of_next_year(date: NaiveDate) -> Option<NaiveDate> {
    start_of_year(date.year().checked_add(1)?)
}

#[must_use]
pub fn start_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[must_use]
pub fn start_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    plus_months(date.with_day(1)?, 1)
}

/// Adds whole months, clamping the day to the end of shorter months.
#[must_use]
pub fn plus_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

#[must_use]
pub fn plus_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    plus_months(date, years.checked_mul(12)?)
}

/// Months elapsed since January 1970 (negative before).
#[must_use]
pub fn month_of_epoch(date: NaiveDate) -> i64 {
    (i64::from(date.year()) - 1970) * 12 + i64::from(date.month0())
}

/// Rounds `value` down to a multiple of `base` (towards negative infinity).
#[must_use]
pub fn round_down_to_base(value: i64, base: i64) -> i64 {
    if base <= 0 {
        return value;
    }
    value.div_euclid(base) * base
}
