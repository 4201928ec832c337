//! Tracing subscriber setup.

use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG` (default `canvas_drag=info`).
///
/// Returns `false` if a global subscriber was already installed, which makes
/// it safe to call from every test.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
