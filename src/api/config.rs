use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::{AxisLabelLocale, I18nConfig};
use crate::error::{TimeAxisError, TimeAxisResult};

use super::TickLabelFormat;

/// Serializable time-axis setup: label locale, zone, tick label format and cache size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisConfig {
    #[serde(default)]
    pub locale: AxisLabelLocale,
    /// IANA zone name, e.g. `America/New_York`.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub tick_format: TickLabelFormat,
    /// Entries kept by [`super::TickValuesCache`]. `0` disables caching.
    #[serde(default = "default_tick_cache_capacity")]
    pub tick_cache_capacity: usize,
}

impl Default for TimeAxisConfig {
    fn default() -> Self {
        Self {
            locale: AxisLabelLocale::default(),
            timezone: default_timezone(),
            tick_format: TickLabelFormat::default(),
            tick_cache_capacity: default_tick_cache_capacity(),
        }
    }
}

impl TimeAxisConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, tick_format: TickLabelFormat) -> Self {
        self.tick_format = tick_format;
        self
    }

    #[must_use]
    pub fn with_tick_cache_capacity(mut self, capacity: usize) -> Self {
        self.tick_cache_capacity = capacity;
        self
    }

    /// Resolves the configured IANA zone name.
    pub fn time_zone(&self) -> TimeAxisResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| TimeAxisError::UnknownTimeZone(self.timezone.clone()))
    }

    pub fn i18n(&self) -> TimeAxisResult<I18nConfig> {
        Ok(I18nConfig::new(self.locale, self.time_zone()?))
    }

    pub fn validate(&self) -> TimeAxisResult<()> {
        self.time_zone()?;
        if let TickLabelFormat::RelativeTo { reference_millis } = self.tick_format {
            if !reference_millis.is_finite() {
                return Err(TimeAxisError::InvalidConfig(
                    "relative tick format reference must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> TimeAxisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimeAxisError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TimeAxisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimeAxisError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_timezone() -> String {
    "UTC".to_owned()
}

fn default_tick_cache_capacity() -> usize {
    64
}
