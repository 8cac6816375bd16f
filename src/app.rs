// App bootstrap - builds every service explicitly and wires them together
// The presentation layer holds one WordFeed and calls into it on user events

use crate::config::AppConfig;
use crate::favorites::{FavoritesError, FavoritesStore};
use crate::haptics::{HapticEngine, HapticsManager, LoggingEngine};
use crate::preferences::{JsonFileStore, PreferenceStore};
use crate::theme::ThemeManager;
use crate::words::{
    FreeDictionaryClient, PipelineConfig, Session, WordAcquisitionPipeline, WordDefinition,
    WordList, WordnikClient,
};
use crate::{debug, info};
use std::sync::Arc;

/// Error types for app construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Could not determine data directory: {0}")]
    DataDirNotFound(String),
    #[error("Failed to open preferences: {0}")]
    Preferences(String),
    #[error("Failed to build providers: {0}")]
    Providers(String),
    #[error("Failed to load word list: {0}")]
    WordList(String),
}

/// All app services sharing one preference store
pub struct WordFeed {
    pub favorites: FavoritesStore,
    pub theme: ThemeManager,
    pub haptics: HapticsManager,
    pipeline: WordAcquisitionPipeline,
    target_count: usize,
}

impl WordFeed {
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        engine: Arc<dyn HapticEngine>,
        pipeline: WordAcquisitionPipeline,
        target_count: usize,
    ) -> Self {
        Self {
            favorites: FavoritesStore::new(store.clone()),
            theme: ThemeManager::load(store.clone()),
            haptics: HapticsManager::load(store, engine),
            pipeline,
            target_count,
        }
    }

    /// Production wiring: preference file in the data dir, HTTP providers,
    /// bundled word list and the logging haptic engine
    pub fn open_default(config: &AppConfig) -> Result<Self, AppError> {
        let path = crate::paths::get_preferences_file()
            .map_err(|e| AppError::DataDirNotFound(e.to_string()))?;
        let store = JsonFileStore::open(path).map_err(|e| AppError::Preferences(e.to_string()))?;
        let pipeline = build_pipeline(config)?;
        Ok(Self::new(
            Arc::new(store),
            Arc::new(LoggingEngine),
            pipeline,
            config.target_count,
        ))
    }

    /// Acquire a fresh session. Nothing is cached between sessions.
    pub async fn start_session(&self) -> Session {
        debug!("Starting session with target {}", self.target_count);
        self.pipeline.acquire_session(self.target_count).await
    }

    /// Toggle a favorite from a card or the favorites list.
    ///
    /// The per-word guard is held until the last haptic cue finishes, so a
    /// second press on the same word in the meantime is rejected with
    /// `ToggleInProgress` and writes nothing. Plays the button cue first,
    /// then success or error depending on the outcome.
    pub async fn toggle_favorite(&self, word: &WordDefinition) -> Result<bool, FavoritesError> {
        let _ticket = self.favorites.begin_toggle(&word.word)?;

        self.haptics.on_button_press().await;
        match self.favorites.toggle(word) {
            Ok(now_favorite) => {
                self.haptics.success().await;
                Ok(now_favorite)
            }
            Err(e) => {
                self.haptics.error().await;
                Err(e)
            }
        }
    }

    /// Clear every favorite with the same haptic cues as a toggle
    pub async fn clear_favorites(&self) -> Result<(), FavoritesError> {
        self.haptics.on_button_press().await;
        match self.favorites.clear_all() {
            Ok(()) => {
                self.haptics.success().await;
                Ok(())
            }
            Err(e) => {
                self.haptics.error().await;
                Err(e)
            }
        }
    }

    /// Plain-text rendering of a session for the headless binary
    pub fn render_session(&self, session: &Session) -> Result<String, FavoritesError> {
        let favorites = self.favorites.list()?;
        let is_favorite = |word: &WordDefinition| favorites.iter().any(|f| f.entry.same_word(&word.word));
        let marker = |word: &WordDefinition| if is_favorite(word) { "*" } else { " " };

        let mut out = format!(
            "[{} theme]\n",
            if self.theme.is_dark() { "dark" } else { "light" }
        );
        let wotd = &session.word_of_day;
        out.push_str(&format!(
            "Word of the Day: {}{} ({}): {}\n",
            marker(wotd),
            wotd.word,
            wotd.part_of_speech,
            wotd.definition
        ));
        for (i, word) in session.random_words.iter().enumerate() {
            out.push_str(&format!(
                "{:>2}. {}{} ({}): {}\n",
                i + 1,
                marker(word),
                word.word,
                word.part_of_speech,
                word.definition
            ));
        }
        out.push_str(&format!("{} favorite(s) saved", favorites.len()));
        Ok(out)
    }
}

/// Build the acquisition pipeline from config with the bundled word list
pub fn build_pipeline(config: &AppConfig) -> Result<WordAcquisitionPipeline, AppError> {
    let client = crate::words::providers::build_http_client(config.request_timeout())
        .map_err(|e| AppError::Providers(e.to_string()))?;
    let word_of_day = WordnikClient::with_client(
        client.clone(),
        config.word_of_day_base_url.clone(),
        config.wordnik_api_key.clone(),
    );
    let definitions = FreeDictionaryClient::with_client(client, config.dictionary_base_url.clone());
    let candidates = WordList::bundled().map_err(|e| AppError::WordList(e.to_string()))?;

    info!(
        "Pipeline ready: {} candidate words, dictionary at {}",
        candidates.len(),
        config.dictionary_base_url
    );

    Ok(WordAcquisitionPipeline::new(
        Arc::new(word_of_day),
        Arc::new(definitions),
        Arc::new(candidates),
        PipelineConfig::from(config),
    ))
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
