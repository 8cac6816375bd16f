// Favorites store - persists favorited words as one JSON array in the preference store
// Every mutation is a read-modify-write of the full list

use super::guard::{ToggleGuard, ToggleTicket};
use crate::preferences::{keys, PreferenceStore};
use crate::words::WordDefinition;
use crate::{debug, info};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A favorited word with the moment it was added
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteWord {
    #[serde(flatten)]
    pub entry: WordDefinition,
    /// ISO 8601 timestamp of the add event
    pub date_added: String,
    /// Unique identifier for this add event
    pub id: String,
}

impl FavoriteWord {
    fn from_definition(entry: WordDefinition) -> Self {
        Self {
            entry,
            date_added: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            id: Uuid::new_v4().to_string(),
        }
    }

    pub fn word(&self) -> &str {
        &self.entry.word
    }
}

/// Error types for favorites operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FavoritesError {
    /// Word text is empty
    #[error("Cannot favorite an empty word")]
    InvalidWord,
    /// Another toggle for this word has not finished
    #[error("A toggle for {0:?} is already in progress")]
    ToggleInProgress(String),
    /// Failed to read or decode the persisted list
    #[error("Failed to load favorites: {0}")]
    LoadError(String),
    /// Failed to persist the list
    #[error("Failed to persist favorites: {0}")]
    PersistenceError(String),
}

/// Store for favorited words, most recently added first
pub struct FavoritesStore {
    store: Arc<dyn PreferenceStore>,
    toggling: ToggleGuard,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            toggling: ToggleGuard::default(),
        }
    }

    /// Read the persisted list. An absent or blank value is an empty list.
    pub fn list(&self) -> Result<Vec<FavoriteWord>, FavoritesError> {
        let stored = self
            .store
            .get(keys::FAVORITES)
            .map_err(|e| FavoritesError::LoadError(e.to_string()))?;

        match stored {
            Some(json) if !json.trim().is_empty() => {
                serde_json::from_str(&json).map_err(|e| FavoritesError::LoadError(e.to_string()))
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Case-insensitive membership check
    pub fn is_favorited(&self, word: &str) -> Result<bool, FavoritesError> {
        Ok(contains(&self.list()?, word))
    }

    /// Prepend `word` unless it is already a favorite
    pub fn add(&self, word: &WordDefinition) -> Result<(), FavoritesError> {
        validate(word)?;
        let mut favorites = self.list()?;
        if contains(&favorites, &word.word) {
            debug!("{:?} is already a favorite", word.word);
            return Ok(());
        }
        favorites.insert(0, FavoriteWord::from_definition(word.clone()));
        self.save(&favorites)?;
        info!("Added {:?} to favorites ({} total)", word.word, favorites.len());
        Ok(())
    }

    /// Remove every entry matching `word` case-insensitively
    pub fn remove(&self, word: &str) -> Result<(), FavoritesError> {
        let mut favorites = self.list()?;
        let before = favorites.len();
        favorites.retain(|fav| !fav.entry.same_word(word));
        self.save(&favorites)?;
        info!("Removed {} favorite(s) matching {:?}", before - favorites.len(), word);
        Ok(())
    }

    /// Remove `word` if present, otherwise add it. Writes exactly once.
    ///
    /// Returns whether the word is a favorite afterwards.
    pub fn toggle(&self, word: &WordDefinition) -> Result<bool, FavoritesError> {
        validate(word)?;
        let mut favorites = self.list()?;
        let now_favorite = if contains(&favorites, &word.word) {
            favorites.retain(|fav| !fav.entry.same_word(&word.word));
            false
        } else {
            favorites.insert(0, FavoriteWord::from_definition(word.clone()));
            true
        };
        self.save(&favorites)?;
        debug!("Toggled {:?}, favorite={}", word.word, now_favorite);
        Ok(now_favorite)
    }

    /// Claim the per-word toggle guard. The claim is released when the ticket drops.
    pub fn begin_toggle(&self, word: &str) -> Result<ToggleTicket<'_>, FavoritesError> {
        self.toggling
            .try_claim(word)
            .ok_or_else(|| FavoritesError::ToggleInProgress(word.to_string()))
    }

    /// Whether a toggle for `word` is in flight
    pub fn is_toggling(&self, word: &str) -> bool {
        self.toggling.is_claimed(word)
    }

    /// `toggle` under the per-word guard
    pub fn toggle_guarded(&self, word: &WordDefinition) -> Result<bool, FavoritesError> {
        let _ticket = self.begin_toggle(&word.word)?;
        self.toggle(word)
    }

    /// Drop the whole persisted list
    pub fn clear_all(&self) -> Result<(), FavoritesError> {
        self.store
            .remove(keys::FAVORITES)
            .map_err(|e| FavoritesError::PersistenceError(e.to_string()))?;
        info!("Cleared all favorites");
        Ok(())
    }

    fn save(&self, favorites: &[FavoriteWord]) -> Result<(), FavoritesError> {
        let json = serde_json::to_string(favorites)
            .map_err(|e| FavoritesError::PersistenceError(e.to_string()))?;
        self.store
            .set(keys::FAVORITES, &json)
            .map_err(|e| FavoritesError::PersistenceError(e.to_string()))
    }
}

fn contains(favorites: &[FavoriteWord], word: &str) -> bool {
    favorites.iter().any(|fav| fav.entry.same_word(word))
}

fn validate(word: &WordDefinition) -> Result<(), FavoritesError> {
    if word.word.trim().is_empty() {
        return Err(FavoritesError::InvalidWord);
    }
    Ok(())
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
