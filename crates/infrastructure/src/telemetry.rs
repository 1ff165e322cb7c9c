//! Logging setup.
//!
//! The engine only emits `tracing` events; hosts embedding it call
//! [`init_tracing`] once to get them printed.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "RENDERNAMES_LOG";

const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RENDERNAMES_LOG`, then `RUST_LOG`, then `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a global fmt subscriber.
///
/// Returns `false` when a global subscriber was already set, so hosts may
/// call this on every add-on reload.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
