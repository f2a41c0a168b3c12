//! chart-time-axis: calendar-aware tick generation for chart time axes.
//!
//! Picks a human-legible tick distance (milliseconds through years) for a
//! visible time range, enumerates calendar-anchored tick timestamps in a
//! given time zone, formats offset labels and assigns each tick a global
//! index for stable alternating styles.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{TimeAxisConfig, TimeAxisTickLayout, calculate_tick_values};
pub use crate::core::TimeTickDistance;
pub use error::{TimeAxisError, TimeAxisResult};
