//! Log output for applications and tests built on slicekit.
//!
//! The library itself only emits `tracing` events: `warn` for selector misses,
//! `debug` when slices are built, `trace` for every applied case.

use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `default_directive`
/// (for example `"info"` or `"slicekit=debug"`). Fails if a global
/// subscriber is already set.
pub fn init_tracing(
    default_directive: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init()
}
