//! Settings file loading and persistence.
//!
//! Settings live in `settings.toml` inside the directory returned by
//! [`resolve_config_dir`](crate::filesystem::resolve_config_dir). A missing
//! file is the first-run case; an unreadable or malformed file is reported
//! and treated as defaults, but never overwritten.

use std::path::{Path, PathBuf};

use plx_types::config::PlxConfig;
use plx_types::error::ConfigError;

/// Settings file name inside the settings directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Location of the settings file in `dir`.
pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

/// Outcome of reading the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsFile {
    /// No file yet.
    Missing,
    /// Parsed successfully. Absent keys take their defaults.
    Loaded(PlxConfig),
    /// Present but unusable; a warning has been logged.
    Invalid,
}

impl SettingsFile {
    /// The effective configuration, falling back to defaults.
    pub fn into_config(self) -> PlxConfig {
        match self {
            Self::Loaded(config) => config,
            Self::Missing | Self::Invalid => PlxConfig::default(),
        }
    }
}

/// Load `settings.toml` from `dir`.
pub async fn load_settings(dir: &Path) -> SettingsFile {
    let path = settings_path(dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings.toml found at {}", path.display());
            return SettingsFile::Missing;
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return SettingsFile::Invalid;
        }
    };

    match toml::from_str::<PlxConfig>(&content) {
        Ok(config) => SettingsFile::Loaded(config),
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            SettingsFile::Invalid
        }
    }
}

/// Write `config` to `settings.toml` in `dir`, creating the directory.
///
/// Returns the path written.
pub async fn save_settings(dir: &Path, config: &PlxConfig) -> Result<PathBuf, ConfigError> {
    let path = settings_path(dir);

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ConfigError::Write {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))?;

    tokio::fs::write(&path, content)
        .await
        .map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::info!("Saved settings to {}", path.display());
    Ok(path)
}
