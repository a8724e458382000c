mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_packed_splits_channels() {
        let c = Color::from_packed(0x12_34_56);
        assert_eq!(c, Color::from_rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn color_from_packed_ignores_high_byte() {
        let c = Color::from_packed(0xAB_FF_80_00);
        assert_eq!(c, Color::from_rgb(0xFF, 0x80, 0x00));
        assert_eq!(c.to_packed(), 0xFF_80_00);
    }

    #[test]
    fn color_packed_extremes() {
        assert_eq!(Color::from_rgb(0, 0, 0).to_packed(), 0);
        assert_eq!(Color::from_rgb(255, 255, 255).to_packed(), 0xFF_FF_FF);
        assert_eq!(Color::from_rgb(255, 0, 0).to_packed(), 16_711_680);
        assert_eq!(Color::from_rgb(0, 255, 0).to_packed(), 65_280);
    }

    #[test]
    fn color_packed_roundtrip_samples() {
        for packed in [0u32, 1, 0xFF, 0x1_00, 0xFF_00, 0xAB_CD_EF, 0xFF_FF_FF] {
            assert_eq!(Color::from_packed(packed).to_packed(), packed);
        }
    }

    #[test]
    fn color_serialization() {
        let c = Color::from_rgb(10, 20, 30);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":10,"g":20,"b":30}"#);
        let deserialized: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }

    #[test]
    fn palette_channels() {
        let p = Palette {
            background: 0xFF_FF_FF,
            foreground: 0x00_00_80,
        };
        assert_eq!(p.background_rgb(), Color::from_rgb(255, 255, 255));
        assert_eq!(p.foreground_rgb(), Color::from_rgb(0, 0, 128));
    }
}
