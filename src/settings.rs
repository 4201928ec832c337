//! Controller settings, persisted as JSON in the platform config directory.
//!
//! Missing or unknown fields are tolerated so older and newer settings files
//! keep loading.

use crate::constants::{DEFAULT_SLOW_CALLBACK_MS, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::error::{DragError, DragResult};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What a controller does when pressed again while a drag is already active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondPressPolicy {
    /// Keep the running session; the extra press is dropped
    #[default]
    Ignore,
    /// Discard the running session's uncommitted position and re-anchor
    Restart,
}

/// Tunables for a `DragController`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Handling of a press that arrives mid-drag
    pub second_press: SecondPressPolicy,
    /// Host callbacks slower than this are logged as slow
    pub slow_callback_ms: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            second_press: SecondPressPolicy::default(),
            slow_callback_ms: DEFAULT_SLOW_CALLBACK_MS,
        }
    }
}

/// Location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl DragSettings {
    /// Load from the default location, falling back to defaults on any failure.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`; a missing file gives defaults, a broken one logs and gives defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load drag settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> DragResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()
    }

    /// Reject thresholds that would make every callback (or none) count as slow.
    pub fn validate(self) -> DragResult<Self> {
        if !self.slow_callback_ms.is_finite() || self.slow_callback_ms < 0.0 {
            return Err(DragError::InvalidSettings(format!(
                "slow_callback_ms {} must be finite and non-negative",
                self.slow_callback_ms
            )));
        }
        Ok(self)
    }

    /// Write atomically: a temp file in the same directory is persisted over `path`.
    pub fn save_to(&self, path: &Path) -> DragResult<()> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        file.persist(path).map_err(|e| DragError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        tracing::debug!(path = %path.display(), "Saved drag settings");
        Ok(())
    }

    /// Save to the default location.
    pub fn save(&self) -> DragResult<()> {
        let path = default_settings_path().ok_or_else(|| {
            DragError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no config directory on this platform",
            ))
        })?;
        self.save_to(&path)
    }
}
