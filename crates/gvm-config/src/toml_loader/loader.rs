//! Core TOML config loading: read from path or platform default.

use crate::schema::GvmConfig;
use crate::validation;
use gvm_common::ConfigError;
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields,
/// then validates it. Values that fail validation are rejected.
pub fn load_from_path(path: &Path) -> Result<GvmConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: GvmConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("rejecting config at {}: {e}", path.display());
        return Err(e);
    }

    info!("loaded config from {}", path.display());
    debug!(?config, "resolved config");
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/mygvm/config.toml`
/// On Linux: `~/.config/mygvm/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<GvmConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(GvmConfig::default())
        }
        other => other,
    }
}

/// Load config from `path`, falling back to defaults on any failure.
///
/// The emulator still starts with a broken config file; the error is
/// handed back so it can be shown to the user.
pub fn load_or_default(path: &Path) -> (GvmConfig, Option<ConfigError>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(e) => {
            warn!("config load failed, using defaults: {e}");
            (GvmConfig::default(), Some(e))
        }
    }
}
