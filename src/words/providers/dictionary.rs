// Free Dictionary API client - first meaning of a single word

use super::{build_http_client, DefinitionSource, ProviderError};
use crate::words::types::{WordDefinition, UNKNOWN_PART_OF_SPEECH};
use crate::{debug, trace};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DictionaryEntry {
    word: Option<String>,
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meaning {
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    definition: Option<String>,
}

/// Parse a dictionary body for `requested`.
///
/// Anything other than an array whose first entry has a first meaning with a
/// non-empty first definition is reported as not found.
pub fn parse_dictionary_response(requested: &str, body: &str) -> Option<WordDefinition> {
    let entries: Vec<DictionaryEntry> = match serde_json::from_str(body) {
        Ok(entries) => entries,
        Err(e) => {
            trace!("Undecodable dictionary body for {:?}: {}", requested, e);
            return None;
        }
    };

    let entry = entries.into_iter().next()?;
    let meaning = entry.meanings.into_iter().next()?;
    let definition = meaning
        .definitions
        .into_iter()
        .next()?
        .definition
        .filter(|d| !d.trim().is_empty())?;

    let word = entry
        .word
        .filter(|w| !w.trim().is_empty())
        .unwrap_or_else(|| requested.to_string());
    let part_of_speech = meaning
        .part_of_speech
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_PART_OF_SPEECH.to_string());

    Some(WordDefinition::new(word, definition, part_of_speech))
}

/// Client for `GET {base}/entries/en/{word}`
#[derive(Debug, Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl FreeDictionaryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self::with_client(build_http_client(timeout)?, base_url))
    }

    /// Share an existing HTTP client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Lowercased word as a single percent-encoded path segment
    fn request_url(&self, word: &str) -> Result<Url, ProviderError> {
        let lowercase = word.to_lowercase();
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidRequest(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidRequest(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["entries", "en", lowercase.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl DefinitionSource for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Option<WordDefinition>, ProviderError> {
        let word = word.trim();
        if word.is_empty() {
            debug!("Skipping lookup for empty word");
            return Ok(None);
        }

        let url = self.request_url(word)?;
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            debug!("No definition found for {:?}: status {}", word, response.status());
            return Ok(None);
        }

        let body = response.text().await?;
        let definition = parse_dictionary_response(word, &body);
        if definition.is_none() {
            debug!("No definition found for {:?}: unexpected response structure", word);
        }
        Ok(definition)
    }
}
