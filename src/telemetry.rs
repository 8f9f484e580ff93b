//! Tracing setup for hosts embedding `chart-motion`.
//!
//! The draw loop and the segment manager log at `trace` level on every
//! frame, so the default filter keeps this crate at `info` unless the host
//! overrides it through `RUST_LOG`.

const DEFAULT_FILTER: &str = "info,chart_motion=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is on.
///
/// Returns `false` when the feature is disabled or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with an explicit fallback filter used
/// when `RUST_LOG` is unset, e.g. `"chart_motion::render=trace"` to inspect
/// frame pacing.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
