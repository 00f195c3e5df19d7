//! Pipeline configuration.
//!
//! An immutable [`PipelineConfig`] record is validated once at pipeline
//! construction and threaded by reference into every stage — there is no
//! process-wide mutable settings object.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Relative weights for the three importance signals.
///
/// Weights are normalized by their sum at combination time, so they only
/// need to be non-negative with a positive total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SignalWeights {
    /// Graph-rank (TextRank) signal
    pub graph: f64,
    /// Term-weight-sum (TF-IDF) signal
    pub term_weight: f64,
    /// Positional signal
    pub position: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            graph: 0.4,
            term_weight: 0.4,
            position: 0.2,
        }
    }
}

impl SignalWeights {
    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.graph + self.term_weight + self.position
    }
}

/// Positional-boost parameters.
///
/// Topic sentences cluster at section boundaries, so the first and last
/// fractions of the document get a boosted base score. These defaults are
/// empirically chosen starting points, not exact requirements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionBoost {
    /// Number of leading sentences that receive the lead boost
    pub lead_window: usize,
    /// Base score of the first leading sentence (decays by `lead_decay` each step)
    pub lead_score: f64,
    /// Per-sentence decay within the lead window
    pub lead_decay: f64,
    /// Number of trailing sentences that receive the tail boost
    pub tail_window: usize,
    /// Base score inside the tail window
    pub tail_score: f64,
    /// Base score for everything in between
    pub base_score: f64,
}

impl Default for PositionBoost {
    fn default() -> Self {
        Self {
            lead_window: 3,
            lead_score: 1.0,
            lead_decay: 0.1,
            tail_window: 2,
            tail_score: 0.8,
            base_score: 0.5,
        }
    }
}

/// Configuration for one pipeline invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fraction of sentences to include in the summary (0, 1]
    pub summary_ratio: f64,
    /// Lower bound on summary size (documents shorter than this return everything)
    pub min_sentences: usize,
    /// Upper bound on summary size
    pub max_sentences: usize,
    /// Size of the key-points selection (capped at the summary size)
    pub key_points: usize,
    /// Maximum entries in the merged keyword list
    pub top_n_keywords: usize,
    /// Maximum number of topic clusters
    pub max_topics: usize,
    /// Target number of generated Q&A pairs
    pub num_questions: usize,
    /// Relative weights of the three importance signals
    pub signal_weights: SignalWeights,
    /// Positional-boost parameters
    pub position: PositionBoost,
    /// Minimum cosine similarity for a graph edge
    pub similarity_threshold: f64,
    /// PageRank damping factor
    pub damping: f64,
    /// PageRank convergence threshold (L1 delta)
    pub epsilon: f64,
    /// PageRank iteration cap
    pub max_iterations: usize,
    /// Largest n-gram span in term vectors (1 = unigrams only)
    pub ngram_max: usize,
    /// Seed for k-means initialization; `None` means entropy-seeded
    /// (results are then not reproducible across runs)
    #[serde(default)]
    pub cluster_seed: Option<u64>,
    /// k-means iteration cap
    pub cluster_max_iterations: usize,
    /// k-means centroid-movement convergence threshold
    pub cluster_epsilon: f64,
    /// Language code for the built-in stopword list (e.g. "en", "de")
    pub language: String,
    /// Additional stopwords extending the built-in list
    #[serde(default)]
    pub stopwords: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            summary_ratio: 0.3,
            min_sentences: 3,
            max_sentences: 15,
            key_points: 10,
            top_n_keywords: 15,
            max_topics: 5,
            num_questions: 12,
            signal_weights: SignalWeights::default(),
            position: PositionBoost::default(),
            similarity_threshold: 0.1,
            damping: 0.85,
            epsilon: 1e-4,
            max_iterations: 100,
            ngram_max: 2,
            cluster_seed: None,
            cluster_max_iterations: 50,
            cluster_epsilon: 1e-4,
            language: "en".to_string(),
            stopwords: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summary ratio
    pub fn with_summary_ratio(mut self, ratio: f64) -> Self {
        self.summary_ratio = ratio;
        self
    }

    /// Set the summary size bounds
    pub fn with_summary_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_sentences = min;
        self.max_sentences = max;
        self
    }

    /// Set the key-points selection size
    pub fn with_key_points(mut self, n: usize) -> Self {
        self.key_points = n;
        self
    }

    /// Set the keyword list cap
    pub fn with_top_n_keywords(mut self, n: usize) -> Self {
        self.top_n_keywords = n;
        self
    }

    /// Set the maximum number of topics
    pub fn with_max_topics(mut self, n: usize) -> Self {
        self.max_topics = n;
        self
    }

    /// Set the target question count
    pub fn with_num_questions(mut self, n: usize) -> Self {
        self.num_questions = n;
        self
    }

    /// Set the signal weights
    pub fn with_signal_weights(mut self, graph: f64, term_weight: f64, position: f64) -> Self {
        self.signal_weights = SignalWeights {
            graph,
            term_weight,
            position,
        };
        self
    }

    /// Set the minimum edge similarity
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the k-means seed for reproducible clustering
    pub fn with_cluster_seed(mut self, seed: u64) -> Self {
        self.cluster_seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0 < self.summary_ratio && self.summary_ratio <= 1.0) {
            return Err(AnalysisError::invalid_config(format!(
                "summary_ratio must be in (0, 1], got {}",
                self.summary_ratio
            )));
        }

        if self.min_sentences > self.max_sentences {
            return Err(AnalysisError::invalid_config(format!(
                "min_sentences ({}) exceeds max_sentences ({})",
                self.min_sentences, self.max_sentences
            )));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(AnalysisError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.epsilon <= 0.0 {
            return Err(AnalysisError::invalid_config("epsilon must be > 0"));
        }

        if self.max_iterations == 0 {
            return Err(AnalysisError::invalid_config("max_iterations must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(AnalysisError::invalid_config(format!(
                "similarity_threshold must be between 0 and 1, got {}",
                self.similarity_threshold
            )));
        }

        let weights = &self.signal_weights;
        if weights.graph < 0.0 || weights.term_weight < 0.0 || weights.position < 0.0 {
            return Err(AnalysisError::invalid_config(
                "signal weights must be non-negative",
            ));
        }
        if weights.total() <= 0.0 {
            return Err(AnalysisError::invalid_config(
                "signal weights must not all be zero",
            ));
        }

        if self.ngram_max == 0 {
            return Err(AnalysisError::invalid_config("ngram_max must be >= 1"));
        }

        if self.cluster_max_iterations == 0 {
            return Err(AnalysisError::invalid_config(
                "cluster_max_iterations must be > 0",
            ));
        }

        Ok(())
    }
}
