//! Telemetry helpers for hosts embedding the series rendering core.
//!
//! The core only emits `tracing` events (pass summaries at `debug`, per-series
//! detail at `trace`, skipped series at `warn`). Installing a subscriber is
//! left to the host; `init_default_tracing` is a convenience for binaries and
//! benches that have no subscriber of their own.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is on.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
