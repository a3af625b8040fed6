//! Dev convenience for installing a `tracing` subscriber.
//! Compiled only with the `tracing-subscriber` feature.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::IngestConfig;

/// Installs a global fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// ANSI colour is enabled only for the `development` environment. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init(cfg: &IngestConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_ansi(cfg.is_development())
        .with_target(false)
        .try_init();
}
