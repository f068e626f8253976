//! Settings loading from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::Settings;

/// Settings file consulted when `--settings` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "./settings.toml";

/// Error type for settings loading.
///
/// An absent file is kept distinct from every other failure: it gets a
/// one-line diagnostic naming the path, while read and parse failures are
/// reported in full.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unable to load settings file {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read settings file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse settings file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load and deserialize settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            SettingsError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SettingsError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
