//! Key-value preference persistence.
//!
//! Every persisted slice of app state (theme flag, haptics config, favorites
//! list) is stored as a string value under its own key in a
//! [`PreferenceStore`]. Two backends are provided:
//! - `JsonFileStore`: a single JSON file with atomic writes
//! - `MemoryStore`: in-process map for tests and ephemeral sessions

mod file;
mod store;

pub use file::JsonFileStore;
pub use store::{MemoryStore, PreferenceError, PreferenceStore};

/// Keys used by the stores in this crate
pub mod keys {
    pub const THEME: &str = "theme";
    pub const HAPTICS_CONFIG: &str = "haptics_config";
    pub const FAVORITES: &str = "@word_app_favorites";
}
