// Color and shadow tokens for the light and dark themes

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub shadow: &'static str,
}

/// Drop shadow applied to word cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardShadow {
    pub color: &'static str,
    /// (width, height) offset in points
    pub offset: (f32, f32),
    pub opacity: f32,
    pub radius: f32,
    /// Android elevation
    pub elevation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ThemeColors,
    pub card_shadow: CardShadow,
}

pub static LIGHT_THEME: Theme = Theme {
    colors: ThemeColors {
        primary: "#007AFF",
        background: "#FFFFFF",
        surface: "#F8F9FA",
        text: "#1C1C1E",
        text_secondary: "#666666",
        border: "#E5E5E7",
        accent: "#FF6B35",
        shadow: "#000000",
    },
    card_shadow: CardShadow {
        color: "#000000",
        offset: (0.0, 2.0),
        opacity: 0.1,
        radius: 8.0,
        elevation: 3,
    },
};

pub static DARK_THEME: Theme = Theme {
    colors: ThemeColors {
        primary: "#0a85ffff",
        background: "#000000",
        surface: "#1C1C1E",
        text: "#FFFFFF",
        text_secondary: "#8E8E93",
        border: "#38383A",
        accent: "#FF9F0A",
        shadow: "#000000",
    },
    card_shadow: CardShadow {
        color: "#000000",
        offset: (0.0, 2.0),
        opacity: 0.3,
        radius: 8.0,
        elevation: 3,
    },
};
