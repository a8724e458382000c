//! mygvm configuration and color parsing.
//!
//! Provides `#rgb` / `#rrggbb` color parsing into packed `0xRRGGBB`
//! values, and the TOML configuration whose UI section is resolved
//! through it. All config sections use defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gvm_config::{colors::parse_color, load_config};
//!
//! assert_eq!(parse_color("#f00"), Ok(0xFF0000));
//!
//! let config = load_config().expect("failed to load config");
//! let palette = config.ui.palette().expect("config was validated");
//! println!("{:06x}", palette.background);
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use colors::{parse_color, parse_rgb, validate_color};
pub use schema::{GvmConfig, RunConfig, UiConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_from_path, load_or_default};

use gvm_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// one if none exists.
pub fn load_config() -> Result<GvmConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GvmConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = GvmConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"run\""));
        assert!(json.contains("\"ui\""));
        assert!(json.contains("\"background_color\": \"#ffffff\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GvmConfig::default();
        let json = config_to_json(&config);
        let parsed: GvmConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn reexported_parser_is_usable() {
        assert_eq!(parse_color("#123456"), Ok(0x12_34_56));
        assert!(validate_color("#abc"));
        assert!(parse_rgb("abc").is_err());
    }
}
