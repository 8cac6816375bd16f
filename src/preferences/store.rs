// Preference store trait and the in-memory backend

use parking_lot::Mutex;
use std::collections::HashMap;

/// Error types for preference persistence
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferenceError {
    /// Failed to read the backing storage
    #[error("Failed to read preferences: {0}")]
    ReadError(String),
    /// Failed to persist to the backing storage
    #[error("Failed to persist preferences: {0}")]
    WriteError(String),
}

/// Backend trait for string-valued key-value persistence.
///
/// Implementations must make each `set`/`remove` durable before returning.
pub trait PreferenceStore: Send + Sync {
    /// Get the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), PreferenceError>;
}

/// Non-persistent store backed by a HashMap
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.values.lock().remove(key);
        Ok(())
    }
}
