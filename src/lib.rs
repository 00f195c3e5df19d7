//! Extractive analysis for study notes.
//!
//! Takes a pre-tokenized sentence sequence and produces a ranked summary,
//! a merged keyword list, a topic hierarchy, and rule-generated study
//! questions, all derived from one shared set of composite importance
//! scores. No model downloads, no network access: ranking is TF-IDF
//! vectors plus PageRank over the sentence-similarity graph, clustering is
//! seeded k-means, and question generation is template-based.
//!
//! # Example
//!
//! ```
//! use studyrank::{AnalysisPipeline, PipelineConfig, Sentence};
//!
//! # fn main() -> studyrank::Result<()> {
//! let tokenize = |text: &str| {
//!     text.split_whitespace()
//!         .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()).to_string())
//!         .filter(|t| !t.is_empty())
//!         .collect::<Vec<_>>()
//! };
//!
//! let texts = [
//!     "Photosynthesis is the process by which plants convert light into energy.",
//!     "Chlorophyll absorbs sunlight in the chloroplasts of plant cells.",
//!     "The light reactions split water molecules and release oxygen.",
//! ];
//! let sentences: Vec<Sentence> = texts
//!     .iter()
//!     .enumerate()
//!     .map(|(i, t)| Sentence::new(i, *t, tokenize(t)))
//!     .collect();
//!
//! let pipeline = AnalysisPipeline::new(PipelineConfig::new().with_cluster_seed(42))?;
//! let result = pipeline.run(sentences)?;
//!
//! assert!(!result.summary.is_empty());
//! assert!(!result.keywords.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod cluster;
pub mod config;
pub mod error;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pipeline;
pub mod qa;
pub mod rank;
pub mod summarize;
pub mod types;
pub mod vectorize;

pub use config::{PipelineConfig, PositionBoost, SignalWeights};
pub use error::{AnalysisError, Result};
pub use keywords::{KeywordSource, SyntacticTagger};
pub use pipeline::AnalysisPipeline;
pub use types::{
    DocumentStats, Keyword, KeywordMethod, PipelineResult, QAPair, QaCategory,
    ScoredSentence, Sentence, Topic, TopicTree,
};
