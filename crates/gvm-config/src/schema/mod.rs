//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod run;
mod ui;

pub use run::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the emulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GvmConfig {
    pub run: RunConfig,
    pub ui: UiConfig,
}
