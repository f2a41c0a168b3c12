use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    I18nConfig, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
    TimeLabelPattern, TimeMagnitude, TimeTickDistance, format_time_label,
};

/// How regular (non-offset) tick labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickLabelFormat {
    /// Only the part of the instant that the offset label does not show.
    #[default]
    OffsetAware,
    /// Full ISO 8601 with the zone offset.
    Iso8601,
    /// Signed distance to a reference instant, e.g. `-1 d 2 h 3 min`.
    RelativeTo { reference_millis: f64 },
}

impl TickLabelFormat {
    #[must_use]
    pub fn format(self, millis: f64, distance: &TimeTickDistance, i18n: I18nConfig) -> String {
        match self {
            Self::OffsetAware => {
                format_time_label(millis, offset_aware_pattern(distance.magnitude()), i18n)
            }
            Self::Iso8601 => format_time_label(millis, TimeLabelPattern::Iso8601, i18n),
            Self::RelativeTo { reference_millis } => format_relative(millis - reference_millis),
        }
    }
}

fn offset_aware_pattern(magnitude: TimeMagnitude) -> TimeLabelPattern {
    match magnitude {
        TimeMagnitude::Millis => TimeLabelPattern::SecondMillis,
        TimeMagnitude::Seconds => TimeLabelPattern::TimeOfDay,
        TimeMagnitude::Minutes | TimeMagnitude::Hours => TimeLabelPattern::TimeOfDayShort,
        TimeMagnitude::Days | TimeMagnitude::Months => TimeLabelPattern::Date,
        TimeMagnitude::Years => TimeLabelPattern::Year,
    }
}

const RELATIVE_UNITS: [(f64, &str); 5] = [
    (MILLIS_PER_DAY, "d"),
    (MILLIS_PER_HOUR, "h"),
    (MILLIS_PER_MINUTE, "min"),
    (MILLIS_PER_SECOND, "s"),
    (1.0, "ms"),
];

/// Formats a signed duration, dropping zero units. Sub-millisecond parts are rounded.
pub(crate) fn format_relative(delta_millis: f64) -> String {
    if !delta_millis.is_finite() {
        return "nan".to_owned();
    }

    let mut remaining = delta_millis.abs().round();
    if remaining == 0.0 {
        return "0 ms".to_owned();
    }

    let mut parts: SmallVec<[String; 5]> = SmallVec::new();
    for (unit_millis, suffix) in RELATIVE_UNITS {
        let count = (remaining / unit_millis).floor();
        if count >= 1.0 {
            parts.push(format!("{count:.0} {suffix}"));
            remaining -= count * unit_millis;
        }
    }

    let sign = if delta_millis < 0.0 { "-" } else { "" };
    format!("{sign}{}", parts.join(" "))
}
