use thiserror::Error;

pub type TimeAxisResult<T> = Result<T, TimeAxisError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeAxisError {
    #[error("invalid time range: start={start} must be smaller than end={end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("timestamp {value} is outside the supported range")]
    UnsupportedTimestamp { value: f64 },

    #[error("min tick distance must be finite and >= 0 but was {value}")]
    InvalidMinTickDistance { value: f64 },

    #[error("invalid tick distance: {0}")]
    InvalidTickDistance(String),

    #[error("more than {limit} ticks for {distance} between {start} and {end}")]
    TooManyTicks {
        limit: usize,
        distance: String,
        start: f64,
        end: f64,
    },

    #[error("first tick {first_tick} must be before/same as start {start} for {distance}")]
    MisalignedFirstTick {
        first_tick: f64,
        start: f64,
        distance: String,
    },

    #[error("tick anchor for {distance} is not representable by the calendar")]
    CalendarOverflow { distance: String },

    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
