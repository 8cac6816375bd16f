//! Word acquisition: the word of the day plus a batch of defined random words.
//!
//! - `types`: word records and the session result
//! - `candidates`: bundled word list with Fisher-Yates sampling
//! - `providers`: HTTP clients for the word-of-day and dictionary services
//! - `pipeline`: the two-phase accept loop tying them together

mod candidates;
mod pipeline;
pub mod providers;
mod types;

pub use candidates::{CandidateError, CandidateSource, WordList};
pub use pipeline::{PipelineConfig, WordAcquisitionPipeline};
pub use providers::{DefinitionSource, FreeDictionaryClient, ProviderError, WordOfDaySource, WordnikClient};
pub use types::{Session, WordDefinition, NOT_FOUND_DEFINITION};
