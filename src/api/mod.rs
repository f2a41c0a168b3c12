mod axis_layout;
mod calculator;
mod config;
mod tick_cache;
mod tick_format;

pub use axis_layout::{OffsetTick, RegularTick, TimeAxisTickLayout};
pub use calculator::{calculate_tick_values, calculate_tick_values_utc};
pub use config::TimeAxisConfig;
pub use tick_cache::{TickValuesCache, TickValuesCacheStats};
pub use tick_format::TickLabelFormat;
