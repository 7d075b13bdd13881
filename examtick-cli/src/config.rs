//! User preference settings
//!
//! Stored as JSON under the platform config directory. Every field has a
//! default, so a missing file or missing keys are never an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use examtick_common::{ClockFormat, PressureMode};
use log::debug;

use crate::constants::{APP_DIR_NAME, MSG_SETTINGS_DEFAULTS, SETTINGS_FILE_NAME};
use crate::errors::CliError;

/// User preferences for the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Mode used for one-off countdowns when `--mode` is not given
    #[serde(default)]
    pub default_pressure_mode: PressureMode,

    /// Use 24-hour time format (false = 12-hour with AM/PM)
    #[serde(default)]
    pub use_24_hour_time: bool,
}

impl Settings {
    /// Platform default location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load settings, falling back to defaults when the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{}{}", MSG_SETTINGS_DEFAULTS, path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CliError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), CliError> {
        let write_err = |source: io::Error| CliError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(CliError::Encode)?;
        fs::write(path, json).map_err(write_err)
    }

    /// Clock convention for exact timestamps
    pub fn clock_format(&self) -> ClockFormat {
        ClockFormat::from_24_hour(self.use_24_hour_time)
    }
}
