// Random word candidates drawn from the bundled word list

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::HashSet;

/// Word list compiled into the binary
const BUNDLED_WORDS: &str = include_str!("../../data/random_words.json");

/// Error types for loading a word list
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CandidateError {
    /// Word list document is not `{"words": [...]}`
    #[error("Invalid word list: {0}")]
    InvalidData(String),
}

/// Source of candidate words for definition lookups
pub trait CandidateSource: Send + Sync {
    /// Draw up to `count` distinct words
    fn draw(&self, count: usize) -> Vec<String>;
}

#[derive(Deserialize)]
struct WordListDocument {
    words: Vec<String>,
}

/// Fixed word list sampled by full Fisher-Yates shuffle
pub struct WordList {
    words: Vec<String>,
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for WordList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList")
            .field("len", &self.words.len())
            .finish()
    }
}

impl WordList {
    /// Build a list from arbitrary words, seeded from OS entropy.
    ///
    /// Blank entries and case-insensitive duplicates are dropped so a single
    /// draw can never repeat a word.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(words, StdRng::from_entropy())
    }

    /// Build a list with a deterministic RNG
    pub fn with_seed<I, S>(words: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng<I, S>(words: I, rng: StdRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| {
                let w: String = w.into();
                w.trim().to_string()
            })
            .filter(|w| !w.is_empty() && seen.insert(w.to_lowercase()))
            .collect();
        Self {
            words,
            rng: Mutex::new(rng),
        }
    }

    /// Parse a `{"words": [...]}` document
    pub fn from_json(json: &str) -> Result<Self, CandidateError> {
        let doc: WordListDocument =
            serde_json::from_str(json).map_err(|e| CandidateError::InvalidData(e.to_string()))?;
        Ok(Self::new(doc.words))
    }

    /// The list shipped with the app
    pub fn bundled() -> Result<Self, CandidateError> {
        let list = Self::from_json(BUNDLED_WORDS)?;
        crate::debug!("Loaded bundled word list with {} words", list.len());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl CandidateSource for WordList {
    fn draw(&self, count: usize) -> Vec<String> {
        if self.words.is_empty() {
            crate::warn!("Word list is empty, no candidates to draw");
            return Vec::new();
        }

        // Shuffle the whole list so every word is equally likely at every position
        let mut shuffled = self.words.clone();
        shuffled.shuffle(&mut *self.rng.lock());
        shuffled.truncate(count.min(self.words.len()));
        shuffled
    }
}
