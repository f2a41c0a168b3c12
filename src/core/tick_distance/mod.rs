//! Calendar-aware tick distances.
//!
//! A [`TimeTickDistance`] is one of seven magnitude variants. Each variant
//! anchors the first tick on a calendar boundary at or before the range
//! start, enumerates ticks until the range end, formats offset labels and
//! estimates a global index used for alternating styles.

mod days;
mod hours;
mod millis;
mod minutes;
mod months;
mod seconds;
mod selection;
mod years;

use std::cmp::Ordering;
use std::fmt;

use ordered_float::OrderedFloat;
use tracing::{trace, warn};

use crate::core::calendar::{CalendarZone, is_supported_timestamp};
use crate::core::factors::Factors;
use crate::core::magnitude::TimeMagnitude;
use crate::core::time_format::I18nConfig;
use crate::error::{TimeAxisError, TimeAxisResult};

pub use days::DistanceDays;
pub use hours::DistanceHours;
pub use millis::DistanceMillis;
pub use minutes::DistanceMinutes;
pub use months::DistanceMonths;
pub use seconds::DistanceSeconds;
pub use years::DistanceYears;

/// Upper bound for the number of ticks a single calculation may produce.
pub const MAX_TICK_COUNT: usize = 1000;

/// Calendar conversion works on whole milliseconds, so the first tick may
/// land up to one millisecond after a fractional start.
pub const FIRST_TICK_TOLERANCE_MILLIS: f64 = 1.0;

/// Best-effort bucket id of a tick, stable while the visible window scrolls.
///
/// Consecutive ticks of one calculation get distinct indices. The value is
/// *not* a duration count and must not be used for time arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalTimeIndex(pub i64);

impl GlobalTimeIndex {
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }

    /// Maps the index onto `count` alternating styles (e.g. two background fills).
    #[must_use]
    pub fn alternating(self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        self.0.rem_euclid(count as i64) as usize
    }
}

/// Behaviour shared by the per-magnitude distances.
pub(crate) trait TickStrategy: fmt::Display {
    fn magnitude(&self) -> TimeMagnitude;

    fn typical_distance_for_comparison(&self) -> f64;

    /// Enumerates ticks without range validation.
    fn calculate_ticks_unchecked(
        &self,
        start: f64,
        end: f64,
        zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>>;

    fn format_as_offset(&self, millis: f64, i18n: I18nConfig) -> String;

    fn calculate_estimated_index(&self, millis: f64, zone: &dyn CalendarZone) -> GlobalTimeIndex;

    fn smallest_possible_tick_distance(&self) -> TimeTickDistance;
}

/// Collects ticks and enforces [`MAX_TICK_COUNT`].
pub(crate) struct TickSink<'a> {
    ticks: Vec<f64>,
    distance: &'a dyn fmt::Display,
    start: f64,
    end: f64,
}

impl<'a> TickSink<'a> {
    pub(crate) fn new(distance: &'a dyn fmt::Display, start: f64, end: f64) -> Self {
        Self {
            ticks: Vec::new(),
            distance,
            start,
            end,
        }
    }

    pub(crate) fn push(&mut self, tick: f64) -> TimeAxisResult<()> {
        if self.ticks.len() >= MAX_TICK_COUNT {
            warn!(
                distance = %self.distance,
                start = self.start,
                end = self.end,
                limit = MAX_TICK_COUNT,
                "tick limit exceeded"
            );
            return Err(TimeAxisError::TooManyTicks {
                limit: MAX_TICK_COUNT,
                distance: self.distance.to_string(),
                start: self.start,
                end: self.end,
            });
        }
        self.ticks.push(tick);
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<f64> {
        self.ticks
    }
}

pub(crate) fn calendar_overflow(distance: &dyn fmt::Display) -> TimeAxisError {
    TimeAxisError::CalendarOverflow {
        distance: distance.to_string(),
    }
}

/// Index fallback for instants the calendar cannot represent.
pub(crate) fn linear_index(millis: f64, step_millis: f64) -> GlobalTimeIndex {
    if !millis.is_finite() || !step_millis.is_finite() || step_millis <= 0.0 {
        return GlobalTimeIndex(0);
    }
    GlobalTimeIndex((millis / step_millis).floor() as i64)
}

/// Distance between two ticks of a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeTickDistance {
    Millis(DistanceMillis),
    Seconds(DistanceSeconds),
    Minutes(DistanceMinutes),
    Hours(DistanceHours),
    Days(DistanceDays),
    Months(DistanceMonths),
    Years(DistanceYears),
}

impl TimeTickDistance {
    fn strategy(&self) -> &dyn TickStrategy {
        match self {
            Self::Millis(distance) => distance,
            Self::Seconds(distance) => distance,
            Self::Minutes(distance) => distance,
            Self::Hours(distance) => distance,
            Self::Days(distance) => distance,
            Self::Months(distance) => distance,
            Self::Years(distance) => distance,
        }
    }

    #[must_use]
    pub fn magnitude(&self) -> TimeMagnitude {
        self.strategy().magnitude()
    }

    /// Approximate distance between two ticks in millis. Only used for ordering.
    #[must_use]
    pub fn typical_distance_for_comparison(&self) -> f64 {
        self.strategy().typical_distance_for_comparison()
    }

    /// Calculates the ticks from `start` until `end` (both inclusive, epoch millis).
    ///
    /// The first tick is anchored on a calendar boundary at or before `start`.
    /// Fails when the range is empty or unsupported, when more than
    /// [`MAX_TICK_COUNT`] ticks would be produced, or when the first tick lands
    /// after `start`.
    pub fn calculate_ticks(
        &self,
        start: f64,
        end: f64,
        zone: &dyn CalendarZone,
    ) -> TimeAxisResult<Vec<f64>> {
        for value in [start, end] {
            if !is_supported_timestamp(value) {
                return Err(TimeAxisError::UnsupportedTimestamp { value });
            }
        }
        if start >= end {
            return Err(TimeAxisError::InvalidRange { start, end });
        }

        let ticks = self.strategy().calculate_ticks_unchecked(start, end, zone)?;

        if let Some(&first_tick) = ticks.first() {
            if first_tick > start + FIRST_TICK_TOLERANCE_MILLIS {
                return Err(TimeAxisError::MisalignedFirstTick {
                    first_tick,
                    start,
                    distance: self.to_string(),
                });
            }
        }

        trace!(distance = %self, count = ticks.len(), "calculated ticks");
        Ok(ticks)
    }

    /// Short label for an offset tick, e.g. `2019`, `January 2019` or `Jan 5, 2019`.
    #[must_use]
    pub fn format_as_offset(&self, millis: f64, i18n: I18nConfig) -> String {
        self.strategy().format_as_offset(millis, i18n)
    }

    /// Estimated global index. See [`GlobalTimeIndex`].
    #[must_use]
    pub fn calculate_estimated_index(&self, millis: f64, zone: &dyn CalendarZone) -> GlobalTimeIndex {
        self.strategy().calculate_estimated_index(millis, zone)
    }

    /// The finest distance that may subdivide an offset label of this distance.
    #[must_use]
    pub fn smallest_possible_tick_distance(&self) -> TimeTickDistance {
        self.strategy().smallest_possible_tick_distance()
    }

    /// Returns the coarser of `self` and `minimum`.
    #[must_use]
    pub fn coerce_at_least(self, minimum: TimeTickDistance) -> TimeTickDistance {
        self.max(minimum)
    }
}

impl Ord for TimeTickDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude().cmp(&other.magnitude()).then_with(|| {
            OrderedFloat(self.typical_distance_for_comparison())
                .cmp(&OrderedFloat(other.typical_distance_for_comparison()))
        })
    }
}

impl PartialOrd for TimeTickDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeTickDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.strategy().fmt(f)
    }
}

impl From<DistanceYears> for TimeTickDistance {
    fn from(distance: DistanceYears) -> Self {
        Self::Years(distance)
    }
}

impl From<DistanceMonths> for TimeTickDistance {
    fn from(distance: DistanceMonths) -> Self {
        Self::Months(distance)
    }
}

impl From<DistanceDays> for TimeTickDistance {
    fn from(distance: DistanceDays) -> Self {
        Self::Days(distance)
    }
}

impl From<DistanceHours> for TimeTickDistance {
    fn from(distance: DistanceHours) -> Self {
        Self::Hours(distance)
    }
}

impl From<DistanceMinutes> for TimeTickDistance {
    fn from(distance: DistanceMinutes) -> Self {
        Self::Minutes(distance)
    }
}

impl From<DistanceSeconds> for TimeTickDistance {
    fn from(distance: DistanceSeconds) -> Self {
        Self::Seconds(distance)
    }
}

impl From<DistanceMillis> for TimeTickDistance {
    fn from(distance: DistanceMillis) -> Self {
        Self::Millis(distance)
    }
}

/// First candidate `>= ratio`, or the largest candidate when none is.
pub(crate) fn first_candidate_at_least(candidates: &[u32], ratio: f64) -> u32 {
    candidates
        .iter()
        .copied()
        .find(|candidate| f64::from(*candidate) >= ratio)
        .or_else(|| candidates.last().copied())
        .unwrap_or(1)
}

/// Scales `ratio` onto a power of ten times a factor from `factors`.
pub(crate) fn nice_multiple(ratio: f64, factors: Factors) -> f64 {
    if !ratio.is_finite() || ratio <= 0.0 {
        return 1.0;
    }
    let magnitude = 10.0_f64.powf(ratio.log10().floor());
    magnitude * factors.calculate_factor(ratio / magnitude)
}
