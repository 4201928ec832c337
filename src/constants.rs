//! Crate-wide constants.
//!
//! Centralizes defaults and thresholds so the controller, settings and perf
//! modules agree on them.

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "canvas-drag";

/// File name of the settings file
pub const SETTINGS_FILE_NAME: &str = "drag.json";

// ============================================================================
// Timing
// ============================================================================

/// Host callbacks slower than this are logged (milliseconds)
pub const DEFAULT_SLOW_CALLBACK_MS: f64 = 4.0;

/// Number of samples to keep for operation statistics
pub const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Logging
// ============================================================================

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "canvas_drag=info";
