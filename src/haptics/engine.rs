// Haptic feedback primitives
// The platform layer implements HapticEngine; the crate only decides when to call it

use super::config::Intensity;
use super::HapticsError;
use async_trait::async_trait;

/// Notification feedback patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// Trait for the device's feedback primitives
/// Allows mocking in tests while a platform bridge drives real hardware
#[async_trait]
pub trait HapticEngine: Send + Sync {
    /// Play an impact of the given strength
    async fn impact(&self, intensity: Intensity) -> Result<(), HapticsError>;

    /// Play a selection tick
    async fn selection(&self) -> Result<(), HapticsError>;

    /// Play a notification pattern
    async fn notification(&self, kind: NotificationKind) -> Result<(), HapticsError>;
}

/// Engine for hosts without haptic hardware; records each call at trace level
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEngine;

#[async_trait]
impl HapticEngine for LoggingEngine {
    async fn impact(&self, intensity: Intensity) -> Result<(), HapticsError> {
        crate::trace!("[haptics] impact {}", intensity);
        Ok(())
    }

    async fn selection(&self) -> Result<(), HapticsError> {
        crate::trace!("[haptics] selection");
        Ok(())
    }

    async fn notification(&self, kind: NotificationKind) -> Result<(), HapticsError> {
        crate::trace!("[haptics] notification {:?}", kind);
        Ok(())
    }
}
