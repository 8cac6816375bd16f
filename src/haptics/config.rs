// Haptics configuration record and partial updates

use serde::{Deserialize, Serialize};

/// Strength of an impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl Intensity {
    /// Next intensity in the light -> medium -> heavy cycle
    pub fn next(self) -> Intensity {
        match self {
            Intensity::Light => Intensity::Medium,
            Intensity::Medium => Intensity::Heavy,
            Intensity::Heavy => Intensity::Light,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Light => write!(f, "light"),
            Intensity::Medium => write!(f, "medium"),
            Intensity::Heavy => write!(f, "heavy"),
        }
    }
}

/// Persisted haptics settings.
///
/// Keys missing from stored JSON fall back to the defaults (all on, medium).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HapticsConfig {
    /// Master switch for all feedback
    pub enabled: bool,
    pub scroll_feedback: bool,
    pub button_feedback: bool,
    pub success_feedback: bool,
    pub error_feedback: bool,
    pub selection_feedback: bool,
    pub intensity: Intensity,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scroll_feedback: true,
            button_feedback: true,
            success_feedback: true,
            error_feedback: true,
            selection_feedback: true,
            intensity: Intensity::Medium,
        }
    }
}

/// Partial update - only `Some` fields are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HapticsConfigUpdate {
    pub enabled: Option<bool>,
    pub scroll_feedback: Option<bool>,
    pub button_feedback: Option<bool>,
    pub success_feedback: Option<bool>,
    pub error_feedback: Option<bool>,
    pub selection_feedback: Option<bool>,
    pub intensity: Option<Intensity>,
}

impl HapticsConfig {
    /// Return a copy with `update` merged over this config
    pub fn merged(mut self, update: &HapticsConfigUpdate) -> Self {
        if let Some(v) = update.enabled {
            self.enabled = v;
        }
        if let Some(v) = update.scroll_feedback {
            self.scroll_feedback = v;
        }
        if let Some(v) = update.button_feedback {
            self.button_feedback = v;
        }
        if let Some(v) = update.success_feedback {
            self.success_feedback = v;
        }
        if let Some(v) = update.error_feedback {
            self.error_feedback = v;
        }
        if let Some(v) = update.selection_feedback {
            self.selection_feedback = v;
        }
        if let Some(v) = update.intensity {
            self.intensity = v;
        }
        self
    }
}
