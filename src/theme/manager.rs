// Theme manager - dark/light flag persisted under the "theme" key

use super::palette::{Theme, DARK_THEME, LIGHT_THEME};
use crate::preferences::{keys, PreferenceStore};
use crate::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Error types for theme operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    /// The toggled value is active but could not be saved
    #[error("Failed to persist theme preference: {0}")]
    PersistenceError(String),
}

pub struct ThemeManager {
    is_dark: AtomicBool,
    store: Arc<dyn PreferenceStore>,
}

impl ThemeManager {
    /// Load the stored preference. Anything but "dark" means light.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let is_dark = match store.get(keys::THEME) {
            Ok(value) => value.as_deref() == Some(DARK),
            Err(e) => {
                warn!("Error loading theme preference: {}", e);
                false
            }
        };
        debug!("Theme loaded: {}", if is_dark { DARK } else { LIGHT });

        Self {
            is_dark: AtomicBool::new(is_dark),
            store,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.load(Ordering::SeqCst)
    }

    /// Token set for the active mode
    pub fn theme(&self) -> &'static Theme {
        if self.is_dark() {
            &DARK_THEME
        } else {
            &LIGHT_THEME
        }
    }

    /// Flip the mode immediately, then persist it.
    ///
    /// A persistence failure is returned but the flip is not rolled back.
    pub fn toggle_theme(&self) -> Result<bool, ThemeError> {
        let is_dark = !self.is_dark.fetch_xor(true, Ordering::SeqCst);
        info!("Theme switched to {}", if is_dark { DARK } else { LIGHT });

        self.store
            .set(keys::THEME, if is_dark { DARK } else { LIGHT })
            .map_err(|e| {
                warn!("Error saving theme preference: {}", e);
                ThemeError::PersistenceError(e.to_string())
            })?;
        Ok(is_dark)
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
