//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod run;
mod ui;


use crate::schema::GvmConfig;
use gvm_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GvmConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    run::validate_run(&mut errors, config);
    ui::validate_ui(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
