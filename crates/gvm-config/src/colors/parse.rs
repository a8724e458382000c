//! Internal hex decoding helpers.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([a-fA-F0-9]{3}|[a-fA-F0-9]{6})$").unwrap());

fn pack(r: u32, g: u32, b: u32) -> u32 {
    r << 16 | g << 8 | b
}

/// Decode the digits after `#` into a packed color.
///
/// Three digits are expanded by repeating each nibble (`0xa` -> `0xaa`),
/// six digits are read as three byte pairs. Any other length is `None`.
pub(super) fn decode_hex(digits: &str) -> Option<u32> {
    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16))
        .collect::<Option<Vec<u32>>>()?;

    match nibbles.as_slice() {
        &[r, g, b] => Some(pack(r << 4 | r, g << 4 | g, b << 4 | b)),
        &[r1, r2, g1, g2, b1, b2] => Some(pack(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2)),
        _ => None,
    }
}
