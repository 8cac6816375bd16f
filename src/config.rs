// Application configuration - provider endpoints, timeouts and session sizing
// Loaded once at startup from {config_dir}/wordfeed/config.json

use crate::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides the configured Wordnik API key
pub const WORDNIK_API_KEY_ENV: &str = "WORDNIK_API_KEY";

pub const DEFAULT_WORD_OF_DAY_BASE_URL: &str = "https://api.wordnik.com/v4";
pub const DEFAULT_DICTIONARY_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2";

/// Smallest first draw, as a multiple of the target count
pub const MIN_FIRST_BATCH_MULTIPLIER: usize = 3;
/// Smallest supplementary draw, as a multiple of the target count
pub const MIN_SUPPLEMENTARY_BATCH_MULTIPLIER: usize = 2;

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Could not locate the config directory
    #[error("Could not determine config directory: {0}")]
    DirectoryNotFound(String),
    /// Failed to read the config file
    #[error("Failed to read config: {0}")]
    ReadError(String),
    /// Config file is not valid JSON for AppConfig
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

/// Runtime configuration for the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Base URL of the word-of-the-day provider
    pub word_of_day_base_url: String,
    /// Base URL of the dictionary provider
    pub dictionary_base_url: String,
    /// API key for the word-of-the-day provider
    pub wordnik_api_key: String,
    /// Upper bound for a single provider request in milliseconds (default: 10000)
    pub request_timeout_ms: u64,
    /// Number of defined random words per session (default: 10)
    pub target_count: usize,
    /// First candidate draw is target_count times this (default and minimum: 3)
    pub first_batch_multiplier: usize,
    /// Supplementary candidate draw is target_count times this (default and minimum: 2)
    pub supplementary_batch_multiplier: usize,
    /// Definition lookups in flight at once (default: 1)
    pub lookup_concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            word_of_day_base_url: DEFAULT_WORD_OF_DAY_BASE_URL.to_string(),
            dictionary_base_url: DEFAULT_DICTIONARY_BASE_URL.to_string(),
            wordnik_api_key: String::new(),
            request_timeout_ms: 10_000,
            target_count: 10,
            first_batch_multiplier: MIN_FIRST_BATCH_MULTIPLIER,
            supplementary_batch_multiplier: MIN_SUPPLEMENTARY_BATCH_MULTIPLIER,
            lookup_concurrency: 1,
        }
    }
}

impl AppConfig {
    /// Load the config from an explicit path.
    ///
    /// A missing file yields defaults. Keys absent from the file fall back to
    /// their defaults. The API key environment override is applied last.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            debug!("Loading config from {:?}", path);
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;
            serde_json::from_str::<AppConfig>(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?
        } else {
            debug!("No config file at {:?}, using defaults", path);
            AppConfig::default()
        };

        if let Ok(key) = std::env::var(WORDNIK_API_KEY_ENV) {
            if !key.is_empty() {
                debug!("Using {} from environment", WORDNIK_API_KEY_ENV);
                config.wordnik_api_key = key;
            }
        }

        Ok(config.normalized())
    }

    /// Load the config from the platform config directory
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = crate::paths::get_config_file()
            .map_err(|e| ConfigError::DirectoryNotFound(e.to_string()))?;
        let config = Self::load_from(&path)?;
        info!(
            "Config loaded: target_count={}, timeout={}ms, lookup_concurrency={}",
            config.target_count, config.request_timeout_ms, config.lookup_concurrency
        );
        Ok(config)
    }

    /// Provider request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Clamp values that would make the pipeline degenerate
    fn normalized(mut self) -> Self {
        self.lookup_concurrency = self.lookup_concurrency.max(1);
        self.first_batch_multiplier = self.first_batch_multiplier.max(MIN_FIRST_BATCH_MULTIPLIER);
        self.supplementary_batch_multiplier = self
            .supplementary_batch_multiplier
            .max(MIN_SUPPLEMENTARY_BATCH_MULTIPLIER);
        if self.request_timeout_ms == 0 {
            self.request_timeout_ms = AppConfig::default().request_timeout_ms;
        }
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
