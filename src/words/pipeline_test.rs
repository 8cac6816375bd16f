// Tests for WordAcquisitionPipeline
// Test cases:
// - Always-succeeding provider yields exactly N words in candidate order
// - First batch all "not found" -> N words from the supplementary batch, in its order
// - Target reached inside (or exactly at the end of) the first batch -> no supplementary draw
// - At most one supplementary batch, even when everything fails
// - Lookup errors, timeouts and the "No definition found." sentinel are skipped
// - Word of the day failure and timeout produce the sentinel
// - Concurrent lookups keep candidate order
// - A candidate accepted in the first batch is not looked up again in the supplementary batch
// - Distinct candidates resolving to the same headword are both accepted
// - Batch multipliers below 3x / 2x are raised to those minimums

use super::*;
use crate::words::types::NOT_FOUND_DEFINITION;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Word-of-day mock with optional delay
struct MockWordOfDay {
    result: Result<WordDefinition, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockWordOfDay {
    fn ok(word: &str) -> Self {
        let mut definition = WordDefinition::new(word, "Featured.", "noun");
        definition.is_word_of_day = true;
        Self {
            result: Ok(definition),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            result: Err(ProviderError::HttpStatus(500)),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::ok("slow")
        }
    }
}

#[async_trait]
impl WordOfDaySource for MockWordOfDay {
    async fn word_of_day(&self) -> Result<WordDefinition, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}

/// Dictionary mock: words in `known` resolve, words in `failing` error, the rest are not found
#[derive(Default)]
struct MockDictionary {
    known: HashSet<String>,
    failing: HashSet<String>,
    sentinel: HashSet<String>,
    delays: HashMap<String, Duration>,
    looked_up: Mutex<Vec<String>>,
}

impl MockDictionary {
    fn knowing(words: &[&str]) -> Self {
        Self {
            known: words.iter().map(|w| w.to_string()).collect(),
            ..Default::default()
        }
    }

    fn looked_up(&self) -> Vec<String> {
        self.looked_up.lock().clone()
    }
}

#[async_trait]
impl DefinitionSource for MockDictionary {
    async fn lookup(&self, word: &str) -> Result<Option<WordDefinition>, ProviderError> {
        self.looked_up.lock().push(word.to_string());
        if let Some(delay) = self.delays.get(word) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(word) {
            return Err(ProviderError::NetworkError("connection reset".to_string()));
        }
        if self.sentinel.contains(word) {
            return Ok(Some(WordDefinition::new(word, NOT_FOUND_DEFINITION, "noun")));
        }
        if self.known.contains(word) {
            return Ok(Some(WordDefinition::new(word, format!("definition({})", word), "noun")));
        }
        Ok(None)
    }
}

/// Candidate source returning scripted batches and recording requested sizes
struct ScriptedCandidates {
    batches: Mutex<VecDeque<Vec<String>>>,
    requested: Mutex<Vec<usize>>,
}

impl ScriptedCandidates {
    fn new(batches: Vec<Vec<&str>>) -> Self {
        Self {
            batches: Mutex::new(
                batches
                    .into_iter()
                    .map(|b| b.into_iter().map(String::from).collect())
                    .collect(),
            ),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<usize> {
        self.requested.lock().clone()
    }
}

impl CandidateSource for ScriptedCandidates {
    fn draw(&self, count: usize) -> Vec<String> {
        self.requested.lock().push(count);
        let mut batch = self.batches.lock().pop_front().unwrap_or_default();
        batch.truncate(count);
        batch
    }
}

fn words(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

fn create_pipeline(
    word_of_day: Arc<MockWordOfDay>,
    dictionary: Arc<MockDictionary>,
    candidates: Arc<ScriptedCandidates>,
) -> WordAcquisitionPipeline {
    WordAcquisitionPipeline::new(word_of_day, dictionary, candidates, PipelineConfig::default())
}

fn word_texts(session: &Session) -> Vec<String> {
    session.random_words.iter().map(|w| w.word.clone()).collect()
}

#[tokio::test]
async fn test_always_succeeding_provider_returns_target_in_candidate_order() {
    let first = words("first", 30);
    let first_refs: Vec<&str> = first.iter().map(String::as_str).collect();
    let dictionary = Arc::new(MockDictionary::knowing(&first_refs));
    let candidates = Arc::new(ScriptedCandidates::new(vec![first_refs.clone()]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::ok("halcyon")), dictionary.clone(), candidates.clone());

    let session = pipeline.acquire_session(10).await;

    assert_eq!(word_texts(&session), first[..10].to_vec());
    assert_eq!(candidates.requested(), vec![30]);
    // Lookups stop as soon as the target is reached
    assert_eq!(dictionary.looked_up().len(), 10);
    assert_eq!(session.word_of_day.word, "halcyon");
    assert!(session.word_of_day.is_word_of_day);
}

#[tokio::test]
async fn test_first_batch_all_not_found_fills_from_supplementary_batch() {
    let first = words("bad", 30);
    let second = words("good", 20);
    let second_refs: Vec<&str> = second.iter().map(String::as_str).collect();
    let first_refs: Vec<&str> = first.iter().map(String::as_str).collect();

    let dictionary = Arc::new(MockDictionary::knowing(&second_refs));
    let candidates = Arc::new(ScriptedCandidates::new(vec![first_refs, second_refs.clone()]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::ok("halcyon")), dictionary, candidates.clone());

    let session = pipeline.acquire_session(10).await;

    assert_eq!(word_texts(&session), second[..10].to_vec());
    assert_eq!(candidates.requested(), vec![30, 20]);
}

#[tokio::test]
async fn test_supplementary_batch_appends_after_partial_first_batch() {
    let dictionary = Arc::new(MockDictionary::knowing(&["cat", "owl", "elk", "fox"]));
    let candidates = Arc::new(ScriptedCandidates::new(vec![
        vec!["cat", "nope1", "owl", "nope2", "nope3", "nope4"],
        vec!["nope5", "elk", "fox", "gnu"],
    ]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::ok("halcyon")), dictionary, candidates.clone());

    let session = pipeline.acquire_session(3).await;

    assert_eq!(word_texts(&session), vec!["cat", "owl", "elk"]);
    assert_eq!(candidates.requested(), vec![9, 6]);
}

#[tokio::test]
async fn test_cat_dog_scenario_needs_no_supplementary_batch() {
    let dictionary = Arc::new(MockDictionary::knowing(&["cat", "dog"]));
    let candidates = Arc::new(ScriptedCandidates::new(vec![vec!["cat", "dog", "xyzinvalid"]]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::ok("halcyon")), dictionary.clone(), candidates.clone());

    let session = pipeline.acquire_session(2).await;

    assert_eq!(
        session.random_words,
        vec![
            WordDefinition::new("cat", "definition(cat)", "noun"),
            WordDefinition::new("dog", "definition(dog)", "noun"),
        ]
    );
    assert_eq!(candidates.requested(), vec![6]);
    assert_eq!(dictionary.looked_up(), vec!["cat", "dog"]);
}

#[tokio::test]
async fn test_exhausted_exactly_at_target_needs_no_supplementary_batch() {
    let dictionary = Arc::new(MockDictionary::knowing(&["cat", "dog"]));
    let candidates = Arc::new(ScriptedCandidates::new(vec![vec!["xyzinvalid", "cat", "dog"]]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::ok("halcyon")), dictionary, candidates.clone());

    let session = pipeline.acquire_session(2).await;

    assert_eq!(word_texts(&session), vec!["cat", "dog"]);
    assert_eq!(candidates.requested().len(), 1);
}

#[tokio::test]
async fn test_at_most_one_supplementary_batch() {
    let dictionary = Arc::new(MockDictionary::default());
    let candidates = Arc::new(ScriptedCandidates::new(vec![
        vec!["a", "b", "c"],
        vec!["d", "e"],
        vec!["never", "drawn"],
    ]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::ok("halcyon")), dictionary.clone(), candidates.clone());

    let session = pipeline.acquire_session(1).await;

    assert!(session.random_words.is_empty());
    assert_eq!(candidates.requested().len(), 2);
    assert_eq!(dictionary.looked_up(), vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_lookup_errors_and_sentinel_definitions_are_skipped() {
    let mut dictionary = MockDictionary::knowing(&["cat", "dog", "owl"]);
    dictionary.failing.insert("cat".to_string());
    dictionary.sentinel.insert("emu".to_string());
    let dictionary = Arc::new(dictionary);
    let candidates = Arc::new(ScriptedCandidates::new(vec![vec!["cat", "emu", "dog", "owl"]]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::ok("halcyon")), dictionary, candidates);

    let session = pipeline.acquire_session(2).await;

    assert_eq!(word_texts(&session), vec!["dog", "owl"]);
}

#[tokio::test]
async fn test_accepted_candidate_is_not_looked_up_again() {
    let dictionary = Arc::new(MockDictionary::knowing(&["cat", "dog"]));
    let candidates = Arc::new(ScriptedCandidates::new(vec![vec!["cat"], vec!["CAT", "dog"]]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::ok("halcyon")), dictionary.clone(), candidates);

    let session = pipeline.acquire_session(2).await;

    assert_eq!(word_texts(&session), vec!["cat", "dog"]);
    assert_eq!(dictionary.looked_up(), vec!["cat", "dog"]);
}

#[tokio::test]
async fn test_candidates_sharing_a_headword_are_both_accepted() {
    struct SpellingDictionary;

    #[async_trait]
    impl DefinitionSource for SpellingDictionary {
        async fn lookup(&self, word: &str) -> Result<Option<WordDefinition>, ProviderError> {
            // Both spellings resolve to the same dictionary entry
            Ok(Some(WordDefinition::new("color", format!("entry for {}", word), "noun")))
        }
    }

    let pipeline = WordAcquisitionPipeline::new(
        Arc::new(MockWordOfDay::ok("halcyon")),
        Arc::new(SpellingDictionary),
        Arc::new(ScriptedCandidates::new(vec![vec!["colour", "color", "hue"]])),
        PipelineConfig::default(),
    );

    let session = pipeline.acquire_session(2).await;

    assert_eq!(session.random_words.len(), 2);
    assert_eq!(session.random_words[0].definition, "entry for colour");
    assert_eq!(session.random_words[1].definition, "entry for color");
}

#[tokio::test]
async fn test_zero_multipliers_are_raised_to_minimum_batch_sizes() {
    let dictionary = Arc::new(MockDictionary::default());
    let candidates = Arc::new(ScriptedCandidates::new(vec![vec!["a"], vec!["b"]]));
    let pipeline = WordAcquisitionPipeline::new(
        Arc::new(MockWordOfDay::ok("halcyon")),
        dictionary,
        candidates.clone(),
        PipelineConfig {
            first_batch_multiplier: 0,
            supplementary_batch_multiplier: 0,
            ..PipelineConfig::default()
        },
    );

    assert_eq!(pipeline.config().first_batch_multiplier, 3);
    assert_eq!(pipeline.config().supplementary_batch_multiplier, 2);

    pipeline.acquire_session(4).await;

    assert_eq!(candidates.requested(), vec![12, 8]);
}

#[tokio::test]
async fn test_word_of_day_failure_yields_sentinel() {
    let dictionary = Arc::new(MockDictionary::knowing(&["cat"]));
    let candidates = Arc::new(ScriptedCandidates::new(vec![vec!["cat"]]));
    let pipeline = create_pipeline(Arc::new(MockWordOfDay::failing()), dictionary, candidates);

    let session = pipeline.acquire_session(1).await;

    assert_eq!(session.word_of_day, WordDefinition::word_of_day_unavailable());
    assert_eq!(word_texts(&session), vec!["cat"]);
}

#[tokio::test]
async fn test_word_of_day_timeout_yields_sentinel() {
    let word_of_day = Arc::new(MockWordOfDay::slow(Duration::from_secs(30)));
    let pipeline = WordAcquisitionPipeline::new(
        word_of_day.clone(),
        Arc::new(MockDictionary::default()),
        Arc::new(ScriptedCandidates::new(vec![])),
        PipelineConfig {
            request_timeout: Duration::from_millis(50),
            ..PipelineConfig::default()
        },
    );

    let session = pipeline.acquire_session(1).await;

    assert_eq!(session.word_of_day, WordDefinition::word_of_day_unavailable());
    assert_eq!(word_of_day.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_lookup_timeout_is_skipped() {
    let mut dictionary = MockDictionary::knowing(&["slow", "cat"]);
    dictionary.delays.insert("slow".to_string(), Duration::from_secs(30));
    let pipeline = WordAcquisitionPipeline::new(
        Arc::new(MockWordOfDay::ok("halcyon")),
        Arc::new(dictionary),
        Arc::new(ScriptedCandidates::new(vec![vec!["slow", "cat"]])),
        PipelineConfig {
            request_timeout: Duration::from_millis(50),
            ..PipelineConfig::default()
        },
    );

    let session = pipeline.acquire_session(1).await;

    assert_eq!(word_texts(&session), vec!["cat"]);
}

#[tokio::test]
async fn test_concurrent_lookups_keep_candidate_order() {
    let mut dictionary = MockDictionary::knowing(&["a", "b", "c", "d"]);
    // Earlier candidates finish last
    dictionary.delays.insert("a".to_string(), Duration::from_millis(80));
    dictionary.delays.insert("b".to_string(), Duration::from_millis(40));
    dictionary.delays.insert("c".to_string(), Duration::from_millis(10));
    let pipeline = WordAcquisitionPipeline::new(
        Arc::new(MockWordOfDay::ok("halcyon")),
        Arc::new(dictionary),
        Arc::new(ScriptedCandidates::new(vec![vec!["a", "b", "c", "d"]])),
        PipelineConfig {
            lookup_concurrency: 4,
            ..PipelineConfig::default()
        },
    );

    let session = pipeline.acquire_session(4).await;

    assert_eq!(word_texts(&session), vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn test_zero_target_skips_lookups() {
    let dictionary = Arc::new(MockDictionary::knowing(&["cat"]));
    let candidates = Arc::new(ScriptedCandidates::new(vec![vec!["cat"]]));
    let word_of_day = Arc::new(MockWordOfDay::ok("halcyon"));
    let pipeline = create_pipeline(word_of_day.clone(), dictionary.clone(), candidates);

    let session = pipeline.acquire_session(0).await;

    assert!(session.random_words.is_empty());
    assert!(dictionary.looked_up().is_empty());
    assert_eq!(word_of_day.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_word_of_day_flag_is_forced() {
    struct UnflaggedWordOfDay;

    #[async_trait]
    impl WordOfDaySource for UnflaggedWordOfDay {
        async fn word_of_day(&self) -> Result<WordDefinition, ProviderError> {
            Ok(WordDefinition::new("zephyr", "A gentle breeze.", "noun"))
        }
    }

    let pipeline = WordAcquisitionPipeline::new(
        Arc::new(UnflaggedWordOfDay),
        Arc::new(MockDictionary::default()),
        Arc::new(ScriptedCandidates::new(vec![])),
        PipelineConfig::default(),
    );

    let session = pipeline.acquire_session(0).await;
    assert!(session.word_of_day.is_word_of_day);
}

#[test]
fn test_phase_transitions() {
    assert_eq!(Phase::FirstBatch.next(10, 10), Phase::Done);
    assert_eq!(Phase::FirstBatch.next(3, 10), Phase::SupplementaryBatch);
    assert_eq!(Phase::SupplementaryBatch.next(3, 10), Phase::Done);
    assert_eq!(Phase::Done.next(0, 10), Phase::Done);
}

#[test]
fn test_pipeline_config_from_app_config() {
    let app = AppConfig {
        lookup_concurrency: 3,
        request_timeout_ms: 1500,
        ..AppConfig::default()
    };
    let config = PipelineConfig::from(&app);
    assert_eq!(config.lookup_concurrency, 3);
    assert_eq!(config.request_timeout, Duration::from_millis(1500));
    assert_eq!(config.first_batch_multiplier, 3);
    assert_eq!(config.supplementary_batch_multiplier, 2);
}
