//! Telemetry helpers for applications embedding `chart-time-axis`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left
//! to the host. Events by level:
//!
//! - `warn`: tick limit exceeded, local anchors moved out of a DST gap
//! - `debug`: distance selection, axis layout and tick value summaries
//! - `trace`: per-calculation tick counts in `core::tick_distance`

/// Filter used by [`init_default_tracing`] when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "chart_time_axis=info";

/// Filter that surfaces every tick calculation while keeping the rest of the
/// crate at `debug`.
pub const TICK_TRACING_FILTER: &str =
    "chart_time_axis=debug,chart_time_axis::core::tick_distance=trace";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_TRACING_FILTER`].
/// Returns `false` when the feature is disabled or a global subscriber was
/// already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Initializes a compact subscriber with explicit filter directives, e.g.
/// [`TICK_TRACING_FILTER`]. Invalid directives are rejected with `false`.
#[must_use]
pub fn init_tracing(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        };
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::{TICK_TRACING_FILTER, init_tracing};

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn without_the_feature_nothing_is_installed() {
        assert!(!super::init_default_tracing());
        assert!(!init_tracing(TICK_TRACING_FILTER));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn invalid_directives_are_rejected() {
        assert!(!init_tracing("chart_time_axis=not_a_level"));
        assert!(!TICK_TRACING_FILTER.is_empty());
    }
}
