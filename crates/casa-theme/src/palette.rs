//! Theme modes and their color palettes

use serde::{Deserialize, Serialize};

/// The two render modes the panel supports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// The named colors every screen draws with
///
/// Values are `#RRGGBB` strings. The set is fixed; screens never mix their
/// own colors, they pick from here so both modes stay coherent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub card_background: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub primary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub border: &'static str,
    pub divider: &'static str,
}

impl Palette {
    /// Palette used in light mode
    pub fn light() -> Self {
        Self {
            background: "#F5F5F5",
            card_background: "#FFFFFF",
            text: "#212121",
            text_secondary: "#757575",
            primary: "#2196F3",
            success: "#4CAF50",
            warning: "#FF9800",
            error: "#F44336",
            info: "#03A9F4",
            border: "#E0E0E0",
            divider: "#EEEEEE",
        }
    }

    /// Palette used in dark mode
    pub fn dark() -> Self {
        Self {
            background: "#121212",
            card_background: "#1E1E1E",
            text: "#FFFFFF",
            text_secondary: "#B0B0B0",
            primary: "#90CAF9",
            success: "#81C784",
            warning: "#FFB74D",
            error: "#E57373",
            info: "#4FC3F7",
            border: "#333333",
            divider: "#2A2A2A",
        }
    }

    /// The palette for a mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_wire_tags() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), r#""dark""#);
        let mode: ThemeMode = serde_json::from_str(r#""light""#).unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_palettes_differ_per_mode() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_eq!(light, Palette::light());
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
    }
}
