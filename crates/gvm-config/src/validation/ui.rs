//! UI section validation (colors, pixel scale).

use crate::schema::GvmConfig;

use super::helpers::{validate_hex_color, validate_range};

pub(crate) fn validate_ui(errors: &mut Vec<String>, config: &GvmConfig) {
    validate_hex_color(errors, "ui.background_color", &config.ui.background_color);
    validate_hex_color(errors, "ui.foreground_color", &config.ui.foreground_color);
    validate_range(errors, "ui.pixel_scale", config.ui.pixel_scale, 1, 8);
}
