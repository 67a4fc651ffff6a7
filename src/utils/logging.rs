//! Logging setup
//!
//! Thin wrapper around `tracing-subscriber` so binaries and tests share the
//! same initialization path. Honors `RUST_LOG` when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `default_level` is used when `RUST_LOG` is not set, e.g. `"info"` or
/// `"geoscraper_rs=debug"`. Safe to call more than once; later calls are
/// no-ops.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
