use chrono::{DateTime, Datelike, Locale, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Locale preset used by axis label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
    DeDe,
}

impl AxisLabelLocale {
    #[must_use]
    pub(crate) fn chrono_locale(self) -> Locale {
        match self {
            Self::EnUs => Locale::en_US,
            Self::EsEs => Locale::es_ES,
            Self::DeDe => Locale::de_DE,
        }
    }
}

/// Locale and time zone used to render labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub locale: AxisLabelLocale,
    pub timezone: Tz,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: AxisLabelLocale::EnUs,
            timezone: Tz::UTC,
        }
    }
}

impl I18nConfig {
    #[must_use]
    pub fn new(locale: AxisLabelLocale, timezone: Tz) -> Self {
        Self { locale, timezone }
    }

    #[must_use]
    pub fn us() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeLabelPattern {
    /// `2019`
    Year,
    /// `January 2019`
    YearMonth,
    /// `Jan 5, 2019`
    Date,
    /// `1/7/19, 10:45 AM`
    DateTimeShort,
    /// `Jan 7, 2019, 10:45:19 AM`
    DateTime,
    /// `1/7/19, 10:45:19.123 AM`
    DateTimeShortWithMillis,
    /// `10:45:19 AM`
    TimeOfDay,
    /// `10:45 AM`
    TimeOfDayShort,
    /// `19.123`
    SecondMillis,
    /// `2019-01-07T10:45:19.123-05:00`
    Iso8601,
}

fn strftime_pattern(locale: AxisLabelLocale, pattern: TimeLabelPattern) -> &'static str {
    match (locale, pattern) {
        (_, TimeLabelPattern::Year) => "%Y",
        (_, TimeLabelPattern::SecondMillis) => "%S%.3f",
        (_, TimeLabelPattern::Iso8601) => "%Y-%m-%dT%H:%M:%S%.3f%:z",
        (AxisLabelLocale::EnUs, TimeLabelPattern::YearMonth) => "%B %Y",
        (AxisLabelLocale::EnUs, TimeLabelPattern::Date) => "%b %-d, %Y",
        (AxisLabelLocale::EnUs, TimeLabelPattern::DateTimeShort) => "%-m/%-d/%y, %-I:%M %p",
        (AxisLabelLocale::EnUs, TimeLabelPattern::DateTime) => "%b %-d, %Y, %-I:%M:%S %p",
        (AxisLabelLocale::EnUs, TimeLabelPattern::DateTimeShortWithMillis) => {
            "%-m/%-d/%y, %-I:%M:%S%.3f %p"
        }
        (AxisLabelLocale::EnUs, TimeLabelPattern::TimeOfDay) => "%-I:%M:%S %p",
        (AxisLabelLocale::EnUs, TimeLabelPattern::TimeOfDayShort) => "%-I:%M %p",
        (AxisLabelLocale::EsEs, TimeLabelPattern::YearMonth) => "%B de %Y",
        (AxisLabelLocale::EsEs, TimeLabelPattern::Date) => "%-d %b %Y",
        (AxisLabelLocale::EsEs, TimeLabelPattern::DateTimeShort) => "%d/%m/%y %H:%M",
        (AxisLabelLocale::EsEs, TimeLabelPattern::DateTime) => "%-d %b %Y %H:%M:%S",
        (AxisLabelLocale::EsEs, TimeLabelPattern::DateTimeShortWithMillis) => {
            "%d/%m/%y %H:%M:%S%.3f"
        }
        (AxisLabelLocale::EsEs, TimeLabelPattern::TimeOfDay) => "%H:%M:%S",
        (AxisLabelLocale::EsEs, TimeLabelPattern::TimeOfDayShort) => "%H:%M",
        (AxisLabelLocale::DeDe, TimeLabelPattern::YearMonth) => "%B %Y",
        (AxisLabelLocale::DeDe, TimeLabelPattern::Date) => "%d.%m.%Y",
        (AxisLabelLocale::DeDe, TimeLabelPattern::DateTimeShort) => "%d.%m.%y, %H:%M",
        (AxisLabelLocale::DeDe, TimeLabelPattern::DateTime) => "%d.%m.%Y, %H:%M:%S",
        (AxisLabelLocale::DeDe, TimeLabelPattern::DateTimeShortWithMillis) => {
            "%d.%m.%y, %H:%M:%S%.3f"
        }
        (AxisLabelLocale::DeDe, TimeLabelPattern::TimeOfDay) => "%H:%M:%S",
        (AxisLabelLocale::DeDe, TimeLabelPattern::TimeOfDayShort) => "%H:%M",
    }
}

/// Formats epoch millis in the configured zone and locale.
///
/// Timestamps chrono cannot represent fall back to the raw millis.
#[must_use]
pub fn format_time_label(millis: f64, pattern: TimeLabelPattern, i18n: I18nConfig) -> String {
    if !millis.is_finite() {
        return "nan".to_owned();
    }
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(millis.floor() as i64) else {
        return format!("{millis:.0}");
    };
    let local = utc.with_timezone(&i18n.timezone);

    if pattern == TimeLabelPattern::Year {
        // chrono prefixes years beyond 9999 with '+'
        return local.year().to_string();
    }

    local
        .format_localized(strftime_pattern(i18n.locale, pattern), i18n.locale.chrono_locale())
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono_tz::America::New_York;
    use chrono_tz::Europe::Berlin;

    use super::{AxisLabelLocale, I18nConfig, TimeLabelPattern, format_time_label};

    // 2019-01-07T15:45:19.123Z
    const TIME: f64 = 1_546_875_919_123.987;

    fn us_new_york() -> I18nConfig {
        I18nConfig::new(AxisLabelLocale::EnUs, New_York)
    }

    #[test]
    fn us_patterns_render_in_local_zone() {
        let i18n = us_new_york();
        assert_eq!(format_time_label(TIME, TimeLabelPattern::Year, i18n), "2019");
        assert_eq!(
            format_time_label(TIME, TimeLabelPattern::YearMonth, i18n),
            "January 2019"
        );
        assert_eq!(format_time_label(TIME, TimeLabelPattern::Date, i18n), "Jan 7, 2019");
        assert_eq!(
            format_time_label(TIME, TimeLabelPattern::DateTimeShort, i18n),
            "1/7/19, 10:45 AM"
        );
        assert_eq!(
            format_time_label(TIME, TimeLabelPattern::DateTimeShortWithMillis, i18n),
            "1/7/19, 10:45:19.123 AM"
        );
        assert_eq!(
            format_time_label(TIME, TimeLabelPattern::SecondMillis, i18n),
            "19.123"
        );
        assert_eq!(
            format_time_label(TIME, TimeLabelPattern::Iso8601, i18n),
            "2019-01-07T10:45:19.123-05:00"
        );
    }

    #[test]
    fn german_patterns_use_dotted_dates() {
        let i18n = I18nConfig::new(AxisLabelLocale::DeDe, Berlin);
        assert_eq!(format_time_label(TIME, TimeLabelPattern::Date, i18n), "07.01.2019");
        assert_eq!(
            format_time_label(TIME, TimeLabelPattern::DateTime, i18n),
            "07.01.2019, 16:45:19"
        );
    }

    #[test]
    fn large_years_are_not_sign_prefixed() {
        // 100000-01-01T00:00:00Z
        let millis = 3_093_527_980_800_000.0;
        assert_eq!(
            format_time_label(millis, TimeLabelPattern::Year, I18nConfig::us()),
            "100000"
        );
    }

    #[test]
    fn non_finite_millis_render_as_nan() {
        assert_eq!(
            format_time_label(f64::NAN, TimeLabelPattern::Date, I18nConfig::us()),
            "nan"
        );
    }
}
