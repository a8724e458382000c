use serde::{Deserialize, Serialize};

/// Largest value a packed `0xRRGGBB` color can take.
pub const MAX_PACKED: u32 = 0xFF_FF_FF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a packed `0xRRGGBB` value into channels. Bits above 23 are dropped.
    pub fn from_packed(packed: u32) -> Self {
        let [_, r, g, b] = packed.to_be_bytes();
        Self { r, g, b }
    }

    pub fn to_packed(self) -> u32 {
        u32::from(self.r) << 16 | u32::from(self.g) << 8 | u32::from(self.b)
    }
}

/// Background and foreground of the emulator screen, packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: u32,
    pub foreground: u32,
}

impl Palette {
    pub fn background_rgb(&self) -> Color {
        Color::from_packed(self.background)
    }

    pub fn foreground_rgb(&self) -> Color {
        Color::from_packed(self.foreground)
    }
}
