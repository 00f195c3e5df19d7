//! Keyword extraction
//!
//! Three independent candidate generators run over the same document and a
//! merge step folds them into one ranked, deduplicated list. Each generator
//! implements the [`KeywordSource`] capability trait, so sources can be
//! added or removed without touching the merge logic.

pub mod aggregate;
pub mod cooccurrence;
pub mod syntactic;
pub mod term_weight;

use crate::types::KeywordMethod;
use crate::vectorize::Document;

pub use aggregate::KeywordAggregator;
pub use cooccurrence::CooccurrenceSource;
pub use syntactic::{SyntacticSource, SyntacticTagger};
pub use term_weight::TermWeightSource;

/// A candidate term or phrase proposed by one extraction method
#[derive(Debug, Clone)]
pub struct KeywordCandidate {
    /// Surface form
    pub text: String,
    /// Folded form used for cross-method dedup
    pub stem: String,
    /// Method-local score (unnormalized; the aggregator rescales per list)
    pub score: f64,
}

/// A keyword candidate generator.
///
/// Implementations return an independently ranked candidate list; scores
/// are only comparable within one source's list.
pub trait KeywordSource {
    /// The method tag recorded in merged keywords
    fn method(&self) -> KeywordMethod;

    /// Generate ranked candidates for the document
    fn candidates(&self, document: &Document) -> Vec<KeywordCandidate>;
}
