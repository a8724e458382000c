//! Hex color parsing and validation.
//!
//! Accepts exactly `#RGB` and `#RRGGBB` (case-insensitive) and produces a
//! packed `0xRRGGBB` integer. Shorthand digits are doubled, so `#abc` is
//! read as `#aabbcc`. Input is matched as-is: surrounding whitespace, a
//! missing `#`, alpha digits and color names are all rejected.

mod parse;


use gvm_common::types::Color;
use gvm_common::ColorError;

use parse::{decode_hex, HEX_RE};

/// Parse a `#RGB` or `#RRGGBB` string into a packed `0xRRGGBB` value.
///
/// The returned value is always within `0..=0xFFFFFF`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] carrying the original input
/// when it is not one of the two accepted shapes.
pub fn parse_color(s: &str) -> Result<u32, ColorError> {
    let invalid = || ColorError::InvalidColorFormat(s.to_owned());

    let caps = HEX_RE.captures(s).ok_or_else(invalid)?;
    decode_hex(&caps[1]).ok_or_else(invalid)
}

/// Parse a hex color string into its separate channels.
pub fn parse_rgb(s: &str) -> Result<Color, ColorError> {
    parse_color(s).map(Color::from_packed)
}

/// Validate that a string is a recognized hex color.
pub fn validate_color(s: &str) -> bool {
    HEX_RE.is_match(s)
}
