//! Light/dark styling as data. Color selection is a pure lookup keyed by the
//! theme value; nothing else in the crate branches on the theme.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Hex colors for one theme. `bar_positive`/`bar_negative` fill the bars,
/// `accent` colors the value labels, `subtle` draws the zero axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub subtle: &'static str,
    pub accent: &'static str,
    pub bar_positive: &'static str,
    pub bar_negative: &'static str,
}

const DARK: Palette = Palette {
    text: "#e2e8f0",
    subtle: "#4a5568",
    accent: "#FFC107",
    bar_positive: "#007A7A",
    bar_negative: "#E53E3E",
};

const LIGHT: Palette = Palette {
    text: "#1a202c",
    subtle: "#cbd5e0",
    accent: "#D97706",
    bar_positive: "#047857",
    bar_negative: "#DC2626",
};

impl Theme {
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(Theme::Dark.palette().bar_positive, "#007A7A");
        assert_eq!(Theme::Light.palette().bar_negative, "#DC2626");
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
    }

    #[test]
    fn test_theme_wire_format() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
