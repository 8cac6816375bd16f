// Word records shared by the acquisition pipeline and the favorites store

use serde::{Deserialize, Serialize};

/// Sentinel definition text some dictionary responses carry instead of a meaning
pub const NOT_FOUND_DEFINITION: &str = "No definition found.";

/// Fallback when the word-of-day response lacks a definition
pub const NO_DEFINITION_AVAILABLE: &str = "No definition available.";

/// Fallback part of speech
pub const UNKNOWN_PART_OF_SPEECH: &str = "unknown";

/// A word with its first definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordDefinition {
    pub word: String,
    pub definition: String,
    pub part_of_speech: String,
    /// Whether this record is the featured word of the day
    #[serde(default)]
    pub is_word_of_day: bool,
}

impl WordDefinition {
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        part_of_speech: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            part_of_speech: part_of_speech.into(),
            is_word_of_day: false,
        }
    }

    /// Record shown when the word of the day could not be fetched
    pub fn word_of_day_unavailable() -> Self {
        Self {
            word: "Unavailable".to_string(),
            definition: "Could not fetch Word of the Day.".to_string(),
            part_of_speech: UNKNOWN_PART_OF_SPEECH.to_string(),
            is_word_of_day: true,
        }
    }

    /// Whether this record carries a usable definition for the feed
    pub fn has_usable_definition(&self) -> bool {
        let definition = self.definition.trim();
        !self.word.trim().is_empty() && !definition.is_empty() && definition != NOT_FOUND_DEFINITION
    }

    /// Case-insensitive comparison on the word text
    pub fn same_word(&self, other: &str) -> bool {
        self.word.to_lowercase() == other.to_lowercase()
    }
}

/// Result of one acquisition session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub word_of_day: WordDefinition,
    pub random_words: Vec<WordDefinition>,
}
