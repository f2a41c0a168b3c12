pub mod calendar;
pub mod day_anchor;
pub mod factors;
pub mod magnitude;
pub mod tick_distance;
pub mod time_format;

pub use calendar::{
    CalendarZone, MAX_SUPPORTED_MILLIS, MIN_SUPPORTED_MILLIS, is_supported_timestamp,
};
pub use day_anchor::DayAnchorPolicy;
pub use factors::Factors;
pub use magnitude::{
    MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MILLIS_PER_YEAR,
    TimeMagnitude,
};
pub use tick_distance::{
    DistanceDays, DistanceHours, DistanceMillis, DistanceMinutes, DistanceMonths,
    DistanceSeconds, DistanceYears, FIRST_TICK_TOLERANCE_MILLIS, GlobalTimeIndex,
    MAX_TICK_COUNT, TimeTickDistance,
};
pub use time_format::{AxisLabelLocale, I18nConfig, TimeLabelPattern, format_time_label};
