// Remote word providers - word of the day and dictionary definitions
// Traits allow mocking in tests while using reqwest clients in production

mod dictionary;
mod wordnik;

pub use dictionary::{parse_dictionary_response, FreeDictionaryClient};
pub use wordnik::{parse_word_of_day_response, WordnikClient};

use super::types::WordDefinition;
use async_trait::async_trait;
use std::time::Duration;

const USER_AGENT: &str = concat!("wordfeed/", env!("CARGO_PKG_VERSION"));

/// Error types for provider requests
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// Transport failure (connection, TLS, timeout inside the client)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-success HTTP status
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    /// Body did not have the expected shape
    #[error("Invalid API response structure: {0}")]
    MalformedResponse(String),
    /// Request exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// Invalid base URL or request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::NetworkError(format!("timed out: {}", e))
        } else if let Some(status) = e.status() {
            ProviderError::HttpStatus(status.as_u16())
        } else if e.is_decode() {
            ProviderError::MalformedResponse(e.to_string())
        } else {
            ProviderError::NetworkError(e.to_string())
        }
    }
}

/// Source of the featured word of the day
#[async_trait]
pub trait WordOfDaySource: Send + Sync {
    /// Fetch today's word. The returned record has `is_word_of_day` set.
    async fn word_of_day(&self) -> Result<WordDefinition, ProviderError>;
}

/// Source of single-word definitions
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up `word`.
    ///
    /// Returns `Ok(None)` when the provider has no usable definition
    /// (unknown word, non-success status, malformed body). Transport
    /// failures are returned as errors.
    async fn lookup(&self, word: &str) -> Result<Option<WordDefinition>, ProviderError>;
}

/// Build the shared HTTP client with a per-request timeout
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ProviderError::InvalidRequest(e.to_string()))
}
