// Platform directories for configuration and persisted preferences

use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "wordfeed";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error types for path resolution
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// Platform config directory not found
    #[error("Config directory not found")]
    ConfigDirNotFound,
    /// Platform data directory not found
    #[error("App data directory not found")]
    DataDirNotFound,
}

/// Get the directory holding `config.json`
/// Returns {config_dir}/wordfeed/
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    let config_dir = dirs::config_dir().ok_or(PathError::ConfigDirNotFound)?;
    Ok(config_dir.join(APP_DIR_NAME))
}

/// Get the directory holding persisted preferences
/// Returns {data_dir}/wordfeed/
pub fn get_data_dir() -> Result<PathBuf, PathError> {
    let data_dir = dirs::data_dir().ok_or(PathError::DataDirNotFound)?;
    Ok(data_dir.join(APP_DIR_NAME))
}

/// Full path of the configuration file
pub fn get_config_file() -> Result<PathBuf, PathError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Full path of the preference store file
pub fn get_preferences_file() -> Result<PathBuf, PathError> {
    Ok(get_data_dir()?.join(PREFERENCES_FILE_NAME))
}
