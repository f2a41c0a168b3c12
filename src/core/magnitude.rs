use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: f64 = 1_000.0;
pub const MILLIS_PER_MINUTE: f64 = 60.0 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;
/// A calendar year approximated as 365 days.
pub const MILLIS_PER_YEAR: f64 = 365.0 * MILLIS_PER_DAY;

/// Broad unit family of a tick distance.
///
/// The declaration order is the primary ordering key when comparing tick
/// distances: every `Years` distance is coarser than any `Months` distance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TimeMagnitude {
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeMagnitude {
    pub const ALL: [TimeMagnitude; 7] = [
        Self::Millis,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Months,
        Self::Years,
    ];
}
