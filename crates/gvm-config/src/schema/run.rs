//! VM execution pacing configuration.

use serde::{Deserialize, Serialize};

/// How the interpreter is stepped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Instructions executed per tick.
    pub steps: u32,
    /// Milliseconds to sleep between ticks when `delay_enabled` is set.
    pub delay: u32,
    pub delay_enabled: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            delay: 10,
            delay_enabled: true,
        }
    }
}
