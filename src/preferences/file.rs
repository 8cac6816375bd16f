// JSON file preference backend
// Follows the same temp file + rename pattern as the other file-backed stores

use super::store::{PreferenceError, PreferenceStore};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Preference store persisted as one JSON object of key -> string value.
///
/// Values are cached in memory after `open`; every mutation rewrites the whole
/// file atomically and only updates the cache once the write succeeded.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Cached values, sorted for stable file output
    values: Mutex<BTreeMap<String, String>>,
    /// Path to persistence file
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file starts an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        crate::debug!("Opening preference store at {:?}", path);

        let values = if path.exists() {
            let content =
                fs::read_to_string(&path).map_err(|e| PreferenceError::ReadError(e.to_string()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| PreferenceError::ReadError(e.to_string()))?
            }
        } else {
            crate::debug!("No preference file found, starting with empty store");
            BTreeMap::new()
        };

        crate::info!("Loaded {} preference keys", values.len());
        Ok(Self {
            values: Mutex::new(values),
            path,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `values` to the file using atomic write (temp file + rename)
    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PreferenceError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(values)
            .map_err(|e| PreferenceError::WriteError(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path).map_err(|e| {
                PreferenceError::WriteError(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes())
                .map_err(|e| PreferenceError::WriteError(format!("Failed to write: {}", e)))?;
            file.sync_all()
                .map_err(|e| PreferenceError::WriteError(format!("Failed to sync: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            PreferenceError::WriteError(format!("Failed to rename: {}", e))
        })?;

        crate::trace!("Persisted {} preference keys to {:?}", values.len(), self.path);
        Ok(())
    }

    /// Apply `mutate` to a copy of the cache, persist it, then commit
    fn update<F>(&self, mutate: F) -> Result<(), PreferenceError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut values = self.values.lock();
        let mut next = values.clone();
        mutate(&mut next);
        self.save(&next)?;
        *values = next;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        if !self.values.lock().contains_key(key) {
            return Ok(());
        }
        self.update(|values| {
            values.remove(key);
        })
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
