// Wordnik word-of-the-day client

use super::{build_http_client, ProviderError, WordOfDaySource};
use crate::words::types::{WordDefinition, NO_DEFINITION_AVAILABLE, UNKNOWN_PART_OF_SPEECH};
use crate::debug;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordOfDayBody {
    word: Option<String>,
    #[serde(default)]
    definitions: Vec<WordOfDayDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordOfDayDefinition {
    text: Option<String>,
    part_of_speech: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a word-of-the-day body.
///
/// Missing definition text or part of speech fall back to placeholders; a
/// missing word is a malformed response.
pub fn parse_word_of_day_response(body: &str) -> Result<WordDefinition, ProviderError> {
    let parsed: WordOfDayBody =
        serde_json::from_str(body).map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    let word = non_empty(parsed.word)
        .ok_or_else(|| ProviderError::MalformedResponse("missing word".to_string()))?;

    let (text, part_of_speech) = match parsed.definitions.into_iter().next() {
        Some(first) => (non_empty(first.text), non_empty(first.part_of_speech)),
        None => (None, None),
    };

    Ok(WordDefinition {
        word,
        definition: text.unwrap_or_else(|| NO_DEFINITION_AVAILABLE.to_string()),
        part_of_speech: part_of_speech.unwrap_or_else(|| UNKNOWN_PART_OF_SPEECH.to_string()),
        is_word_of_day: true,
    })
}

/// Client for `GET {base}/words.json/wordOfTheDay`
#[derive(Debug, Clone)]
pub struct WordnikClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WordnikClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self::with_client(build_http_client(timeout)?, base_url, api_key))
    }

    /// Share an existing HTTP client
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn request_url(&self) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidRequest(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidRequest(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["words.json", "wordOfTheDay"]);
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl WordOfDaySource for WordnikClient {
    async fn word_of_day(&self) -> Result<WordDefinition, ProviderError> {
        let url = self.request_url()?;
        debug!("Fetching word of the day from {}", self.base_url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_word_of_day_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "word": "halcyon",
            "definitions": [
                {"text": "Calm and peaceful.", "partOfSpeech": "adjective"},
                {"text": "A kingfisher.", "partOfSpeech": "noun"}
            ]
        }"#;
        let word = parse_word_of_day_response(body).unwrap();
        assert_eq!(word.word, "halcyon");
        assert_eq!(word.definition, "Calm and peaceful.");
        assert_eq!(word.part_of_speech, "adjective");
        assert!(word.is_word_of_day);
    }

    #[test]
    fn test_parse_missing_definitions_falls_back() {
        let word = parse_word_of_day_response(r#"{"word": "zephyr"}"#).unwrap();
        assert_eq!(word.definition, "No definition available.");
        assert_eq!(word.part_of_speech, "unknown");

        let word =
            parse_word_of_day_response(r#"{"word": "zephyr", "definitions": [{"text": ""}]}"#)
                .unwrap();
        assert_eq!(word.definition, "No definition available.");
        assert_eq!(word.part_of_speech, "unknown");
    }

    #[test]
    fn test_parse_missing_word_is_malformed() {
        let result = parse_word_of_day_response(r#"{"definitions": []}"#);
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));

        let result = parse_word_of_day_response("<html>oops</html>");
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }

    #[test]
    fn test_request_url_shape() {
        let client =
            WordnikClient::new("https://api.wordnik.com/v4/", "secret", Duration::from_secs(1))
                .unwrap();
        let url = client.request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.wordnik.com/v4/words.json/wordOfTheDay?api_key=secret"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 (discard) on loopback is closed in test environments
        let client =
            WordnikClient::new("http://127.0.0.1:9", "key", Duration::from_secs(2)).unwrap();
        let result = client.word_of_day().await;
        assert!(matches!(result, Err(ProviderError::NetworkError(_))));
    }
}
