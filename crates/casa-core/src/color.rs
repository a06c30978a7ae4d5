//! RGBW color state and the fixed preset palette

use serde::{Deserialize, Serialize};

/// Color channels of a light entity
///
/// The white channel is only present on RGBW hardware and is preserved
/// untouched when a preset replaces the RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorState {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u8>,
}

impl ColorState {
    /// RGB-only color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, w: None }
    }

    /// RGBW color
    pub fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w: Some(w) }
    }

    /// Replace the RGB channels, keeping the white channel as-is
    pub fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, w: self.w }
    }
}

/// Fixed preset swatches offered by color pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPreset {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
    White,
}

impl ColorPreset {
    /// All presets in picker order
    pub const ALL: [ColorPreset; 9] = [
        ColorPreset::Red,
        ColorPreset::Orange,
        ColorPreset::Yellow,
        ColorPreset::Green,
        ColorPreset::Cyan,
        ColorPreset::Blue,
        ColorPreset::Purple,
        ColorPreset::Magenta,
        ColorPreset::White,
    ];

    /// RGB channels of this preset
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorPreset::Red => (255, 0, 0),
            ColorPreset::Orange => (255, 165, 0),
            ColorPreset::Yellow => (255, 255, 0),
            ColorPreset::Green => (0, 255, 0),
            ColorPreset::Cyan => (0, 255, 255),
            ColorPreset::Blue => (0, 0, 255),
            ColorPreset::Purple => (128, 0, 128),
            ColorPreset::Magenta => (255, 0, 255),
            ColorPreset::White => (255, 255, 255),
        }
    }

    /// Human label for the swatch
    pub fn label(&self) -> &'static str {
        match self {
            ColorPreset::Red => "Red",
            ColorPreset::Orange => "Orange",
            ColorPreset::Yellow => "Yellow",
            ColorPreset::Green => "Green",
            ColorPreset::Cyan => "Cyan",
            ColorPreset::Blue => "Blue",
            ColorPreset::Purple => "Purple",
            ColorPreset::Magenta => "Magenta",
            ColorPreset::White => "White",
        }
    }

    /// Apply this preset over the current color, preserving any white channel
    pub fn apply_to(&self, current: Option<&ColorState>) -> ColorState {
        let (r, g, b) = self.rgb();
        match current {
            Some(color) => color.with_rgb(r, g, b),
            None => ColorState::rgb(r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_preserves_white_channel() {
        let current = ColorState::rgbw(10, 20, 30, 200);
        let next = ColorPreset::Blue.apply_to(Some(&current));
        assert_eq!(next, ColorState::rgbw(0, 0, 255, 200));
    }

    #[test]
    fn test_preset_on_rgb_only() {
        let current = ColorState::rgb(10, 20, 30);
        let next = ColorPreset::Orange.apply_to(Some(&current));
        assert_eq!(next, ColorState::rgb(255, 165, 0));
        assert_eq!(next.w, None);
    }

    #[test]
    fn test_preset_without_current_color() {
        let next = ColorPreset::White.apply_to(None);
        assert_eq!(next, ColorState::rgb(255, 255, 255));
    }

    #[test]
    fn test_white_channel_skipped_in_json() {
        let json = serde_json::to_string(&ColorState::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);

        let json = serde_json::to_string(&ColorState::rgbw(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"w":4}"#);
    }

    #[test]
    fn test_all_presets_have_distinct_rgb() {
        let mut seen = std::collections::HashSet::new();
        for preset in ColorPreset::ALL {
            assert!(seen.insert(preset.rgb()), "duplicate rgb for {:?}", preset);
        }
    }
}
