// Word acquisition pipeline - word of the day plus a batch of defined random words
// Runs a bounded two-phase accept loop: first batch, then at most one supplementary batch

use super::candidates::CandidateSource;
use super::providers::{DefinitionSource, ProviderError, WordOfDaySource};
use super::types::{Session, WordDefinition};
use crate::config::{AppConfig, MIN_FIRST_BATCH_MULTIPLIER, MIN_SUPPLEMENTARY_BATCH_MULTIPLIER};
use crate::{debug, info, warn};
use futures_util::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Sizing and timing for one pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// First candidate draw is target_count times this
    pub first_batch_multiplier: usize,
    /// Supplementary candidate draw is target_count times this
    pub supplementary_batch_multiplier: usize,
    /// Definition lookups in flight at once; results are still consumed in candidate order
    pub lookup_concurrency: usize,
    /// Upper bound for any single provider call
    pub request_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for PipelineConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            first_batch_multiplier: config.first_batch_multiplier,
            supplementary_batch_multiplier: config.supplementary_batch_multiplier,
            lookup_concurrency: config.lookup_concurrency,
            request_timeout: config.request_timeout(),
        }
    }
}

/// Phase of the accept loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    FirstBatch,
    SupplementaryBatch,
    Done,
}

impl Phase {
    /// Transition after a batch has been consumed
    fn next(self, accepted: usize, target: usize) -> Phase {
        match self {
            _ if accepted >= target => Phase::Done,
            Phase::FirstBatch => Phase::SupplementaryBatch,
            Phase::SupplementaryBatch | Phase::Done => Phase::Done,
        }
    }
}

/// Assembles a session from the word-of-day provider, the dictionary
/// provider and the candidate word list
pub struct WordAcquisitionPipeline {
    word_of_day: Arc<dyn WordOfDaySource>,
    definitions: Arc<dyn DefinitionSource>,
    candidates: Arc<dyn CandidateSource>,
    config: PipelineConfig,
}

impl WordAcquisitionPipeline {
    pub fn new(
        word_of_day: Arc<dyn WordOfDaySource>,
        definitions: Arc<dyn DefinitionSource>,
        candidates: Arc<dyn CandidateSource>,
        config: PipelineConfig,
    ) -> Self {
        let config = PipelineConfig {
            first_batch_multiplier: config.first_batch_multiplier.max(MIN_FIRST_BATCH_MULTIPLIER),
            supplementary_batch_multiplier: config
                .supplementary_batch_multiplier
                .max(MIN_SUPPLEMENTARY_BATCH_MULTIPLIER),
            lookup_concurrency: config.lookup_concurrency.max(1),
            ..config
        };
        Self {
            word_of_day,
            definitions,
            candidates,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Acquire the word of the day and up to `target_count` defined random words.
    ///
    /// Never fails: the word of the day degrades to a sentinel record and
    /// lookup failures only shrink the batch.
    pub async fn acquire_session(&self, target_count: usize) -> Session {
        let first_size = target_count.saturating_mul(self.config.first_batch_multiplier);

        let (word_of_day, first_batch) = tokio::join!(self.fetch_word_of_day(), async {
            self.candidates.draw(first_size)
        });

        let random_words = self.collect_definitions(first_batch, target_count).await;

        info!(
            "Session acquired: word of the day {:?}, {}/{} random words",
            word_of_day.word,
            random_words.len(),
            target_count
        );

        Session {
            word_of_day,
            random_words,
        }
    }

    /// Fetch the word of the day, substituting the sentinel on any failure
    async fn fetch_word_of_day(&self) -> WordDefinition {
        let result = match tokio::time::timeout(self.config.request_timeout, self.word_of_day.word_of_day()).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.config.request_timeout)),
        };

        match result {
            Ok(mut word) => {
                word.is_word_of_day = true;
                debug!("Word of the day: {}", word.word);
                word
            }
            Err(e) => {
                warn!("Error fetching Word of the Day: {}", e);
                WordDefinition::word_of_day_unavailable()
            }
        }
    }

    /// Run the accept loop over the first batch and, when short, one supplementary batch
    async fn collect_definitions(&self, first_batch: Vec<String>, target: usize) -> Vec<WordDefinition> {
        let mut accepted = Vec::with_capacity(target);
        let mut accepted_candidates = HashSet::new();
        let mut phase = if target == 0 { Phase::Done } else { Phase::FirstBatch };
        let mut first_batch = Some(first_batch);

        loop {
            let batch = match phase {
                Phase::FirstBatch => first_batch.take().unwrap_or_default(),
                Phase::SupplementaryBatch => {
                    let size = target.saturating_mul(self.config.supplementary_batch_multiplier);
                    debug!(
                        "Only {}/{} definitions after first batch, drawing {} more candidates",
                        accepted.len(),
                        target,
                        size
                    );
                    self.candidates.draw(size)
                }
                Phase::Done => break,
            };

            self.accept_from(batch, target, &mut accepted, &mut accepted_candidates)
                .await;
            phase = phase.next(accepted.len(), target);
        }

        accepted
    }

    /// Look up candidates in order, appending usable definitions until `target` is reached.
    ///
    /// A candidate already accepted earlier in the session is not looked up again.
    async fn accept_from(
        &self,
        batch: Vec<String>,
        target: usize,
        accepted: &mut Vec<WordDefinition>,
        accepted_candidates: &mut HashSet<String>,
    ) {
        if accepted.len() >= target {
            return;
        }

        let batch: Vec<String> = batch
            .into_iter()
            .filter(|word| !accepted_candidates.contains(&word.to_lowercase()))
            .collect();

        let mut lookups = stream::iter(batch)
            .map(|word| async move {
                let definition = self.lookup(&word).await;
                (word, definition)
            })
            .buffered(self.config.lookup_concurrency);

        while let Some((candidate, result)) = lookups.next().await {
            let Some(definition) = result else {
                continue;
            };
            if !accepted_candidates.insert(candidate.to_lowercase()) {
                debug!("Skipping repeated candidate {:?}", candidate);
                continue;
            }
            accepted.push(definition);
            if accepted.len() >= target {
                break;
            }
        }
    }

    /// Single lookup with timeout. Failures are logged and yield None.
    async fn lookup(&self, word: &str) -> Option<WordDefinition> {
        let result = match tokio::time::timeout(self.config.request_timeout, self.definitions.lookup(word)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.config.request_timeout)),
        };

        match result {
            Ok(Some(definition)) if definition.has_usable_definition() => Some(definition),
            Ok(_) => {
                debug!("No definition found for {:?}", word);
                None
            }
            Err(e) => {
                warn!("Failed to fetch definition for {:?}: {}", word, e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
