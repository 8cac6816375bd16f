// Haptics module - feedback configuration and gated feedback triggers

mod config;
mod engine;
mod manager;

pub use config::{HapticsConfig, HapticsConfigUpdate, Intensity};
pub use engine::{HapticEngine, LoggingEngine, NotificationKind};
pub use manager::{FeedbackOutcome, HapticsManager};

/// Error types for haptics operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HapticsError {
    /// Haptics are switched off in the config
    #[error("Haptics are disabled")]
    Disabled,
    /// The platform refused or failed to play feedback
    #[error("Haptic engine error: {0}")]
    EngineError(String),
    /// Failed to persist the config
    #[error("Failed to persist haptics config: {0}")]
    PersistenceError(String),
}
