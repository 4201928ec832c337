//! Error types for the ambient parts of the crate.
//!
//! The drag state machine itself never fails. These errors cover the edges
//! that touch the outside world: settings files, JSON payloads and
//! host-supplied geometry.

use thiserror::Error;

/// Errors that can occur outside the drag state machine
#[derive(Error, Debug)]
pub enum DragError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Temp file could not be moved into place
    #[error("Failed to persist {}: {source}", path.display())]
    Persist {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Geometry the controller cannot do math with
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Settings value outside its usable range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for fallible operations
pub type DragResult<T> = Result<T, DragError>;
