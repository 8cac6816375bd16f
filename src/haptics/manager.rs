// Haptics manager - owns the haptics config and gates every feedback trigger on it
// Constructed explicitly and shared by reference; there is no global instance

use super::config::{HapticsConfig, HapticsConfigUpdate, Intensity};
use super::engine::{HapticEngine, NotificationKind};
use super::HapticsError;
use crate::preferences::{keys, PreferenceStore};
use crate::{debug, info, warn};
use parking_lot::RwLock;
use std::sync::Arc;

/// What happened to a feedback request. Callers are free to ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// The engine played the feedback
    Played,
    /// A config flag suppressed the feedback
    Skipped,
    /// The engine reported a failure, which was logged
    Failed(String),
}

impl FeedbackOutcome {
    pub fn played(&self) -> bool {
        matches!(self, FeedbackOutcome::Played)
    }
}

#[derive(Debug, Clone, Copy)]
enum Feedback {
    Impact(Intensity),
    Selection,
    Notification(NotificationKind),
}

pub struct HapticsManager {
    config: RwLock<HapticsConfig>,
    store: Arc<dyn PreferenceStore>,
    engine: Arc<dyn HapticEngine>,
}

impl HapticsManager {
    /// Load the persisted config merged over defaults.
    ///
    /// Unreadable or malformed stored config is logged and replaced by defaults.
    pub fn load(store: Arc<dyn PreferenceStore>, engine: Arc<dyn HapticEngine>) -> Self {
        let config = match store.get(keys::HAPTICS_CONFIG) {
            Ok(Some(json)) => match serde_json::from_str::<HapticsConfig>(&json) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse haptics config, using defaults: {}", e);
                    HapticsConfig::default()
                }
            },
            Ok(None) => HapticsConfig::default(),
            Err(e) => {
                warn!("Failed to load haptics config, using defaults: {}", e);
                HapticsConfig::default()
            }
        };
        debug!("Haptics config loaded: {:?}", config);

        Self {
            config: RwLock::new(config),
            store,
            engine,
        }
    }

    /// Current config snapshot
    pub fn config(&self) -> HapticsConfig {
        *self.config.read()
    }

    /// Merge `update` into the config and persist before returning.
    ///
    /// On a persistence failure the merged value stays active in memory and the
    /// error is returned.
    pub fn update_config(&self, update: &HapticsConfigUpdate) -> Result<HapticsConfig, HapticsError> {
        let mut config = self.config.write();
        *config = config.merged(update);
        self.persist(&config)?;
        info!("Haptics config updated: {:?}", *config);
        Ok(*config)
    }

    /// Advance light -> medium -> heavy -> light and persist
    pub fn cycle_intensity(&self) -> Result<Intensity, HapticsError> {
        let next = self.config().intensity.next();
        let config = self.update_config(&HapticsConfigUpdate {
            intensity: Some(next),
            ..Default::default()
        })?;
        Ok(config.intensity)
    }

    fn persist(&self, config: &HapticsConfig) -> Result<(), HapticsError> {
        let json = serde_json::to_string(config)
            .map_err(|e| HapticsError::PersistenceError(e.to_string()))?;
        self.store
            .set(keys::HAPTICS_CONFIG, &json)
            .map_err(|e| HapticsError::PersistenceError(e.to_string()))
    }

    /// Impact at `intensity`, or the configured intensity when None
    pub async fn impact(&self, intensity: Option<Intensity>) -> FeedbackOutcome {
        let config = self.config();
        let intensity = intensity.unwrap_or(config.intensity);
        self.play(config.enabled, Feedback::Impact(intensity)).await
    }

    pub async fn selection(&self) -> FeedbackOutcome {
        let config = self.config();
        self.play(config.enabled && config.selection_feedback, Feedback::Selection)
            .await
    }

    pub async fn success(&self) -> FeedbackOutcome {
        let config = self.config();
        self.play(
            config.enabled && config.success_feedback,
            Feedback::Notification(NotificationKind::Success),
        )
        .await
    }

    pub async fn error(&self) -> FeedbackOutcome {
        let config = self.config();
        self.play(
            config.enabled && config.error_feedback,
            Feedback::Notification(NotificationKind::Error),
        )
        .await
    }

    pub async fn warning(&self) -> FeedbackOutcome {
        let config = self.config();
        self.play(config.enabled, Feedback::Notification(NotificationKind::Warning))
            .await
    }

    pub async fn on_scroll(&self) -> FeedbackOutcome {
        let config = self.config();
        self.play(
            config.enabled && config.scroll_feedback,
            Feedback::Impact(Intensity::Light),
        )
        .await
    }

    pub async fn on_button_press(&self) -> FeedbackOutcome {
        let config = self.config();
        self.play(
            config.enabled && config.button_feedback,
            Feedback::Impact(config.intensity),
        )
        .await
    }

    pub async fn on_toggle(&self) -> FeedbackOutcome {
        self.selection().await
    }

    pub async fn on_card_flip(&self) -> FeedbackOutcome {
        self.impact(Some(Intensity::Medium)).await
    }

    pub async fn on_swipe_action(&self) -> FeedbackOutcome {
        self.impact(Some(Intensity::Light)).await
    }

    /// Play selection, light/medium/heavy impacts and success in order.
    ///
    /// Used by the settings screen's "test haptics" action.
    pub async fn test_sequence(&self) -> Result<Vec<FeedbackOutcome>, HapticsError> {
        if !self.config().enabled {
            return Err(HapticsError::Disabled);
        }
        Ok(vec![
            self.selection().await,
            self.impact(Some(Intensity::Light)).await,
            self.impact(Some(Intensity::Medium)).await,
            self.impact(Some(Intensity::Heavy)).await,
            self.success().await,
        ])
    }

    async fn play(&self, allowed: bool, feedback: Feedback) -> FeedbackOutcome {
        if !allowed {
            return FeedbackOutcome::Skipped;
        }

        let result = match feedback {
            Feedback::Impact(intensity) => self.engine.impact(intensity).await,
            Feedback::Selection => self.engine.selection().await,
            Feedback::Notification(kind) => self.engine.notification(kind).await,
        };

        match result {
            Ok(()) => FeedbackOutcome::Played,
            Err(e) => {
                warn!("Haptic feedback {:?} failed: {}", feedback, e);
                FeedbackOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
