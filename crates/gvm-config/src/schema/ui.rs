//! Screen appearance configuration.

use gvm_common::{ColorError, Palette};
use serde::{Deserialize, Serialize};

use crate::colors::parse_color;

/// Screen colors and scaling.
///
/// Colors are kept as the strings found in the file and only resolved
/// through [`UiConfig::palette`], so a bad value can be reported back
/// exactly as the user wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub background_color: String,
    pub foreground_color: String,
    /// Screen pixels per emulated pixel.
    pub pixel_scale: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".into(),
            foreground_color: "#000000".into(),
            pixel_scale: 2,
        }
    }
}

impl UiConfig {
    /// Resolve both colors to packed `0xRRGGBB` values.
    ///
    /// # Errors
    ///
    /// Returns the error for the background color first if both are invalid.
    pub fn palette(&self) -> Result<Palette, ColorError> {
        Ok(Palette {
            background: parse_color(&self.background_color)?,
            foreground: parse_color(&self.foreground_color)?,
        })
    }
}
