//! Core types for studyrank
//!
//! This module defines the data structures that flow through the pipeline:
//! input sentences, scored selections, keywords, topics, Q&A pairs, and the
//! final [`PipelineResult`] handed back to export/presentation collaborators.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document.
///
/// Created once during ingestion (outside the core) and consumed read-only
/// by every stage. `index` is the stable original position used for
/// re-ordering summaries and breaking score ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// Stable index: original position within the document
    pub index: usize,
    /// Normalized text (cleaned, whitespace-collapsed)
    pub text: String,
    /// Raw text as it appeared in the source
    pub raw: String,
    /// Normalized token list, in order
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(index: usize, text: impl Into<String>, tokens: Vec<String>) -> Self {
        let text = text.into();
        Self {
            index,
            raw: text.clone(),
            text,
            tokens,
        }
    }

    /// Create a sentence with distinct raw and normalized forms
    pub fn with_raw(
        index: usize,
        text: impl Into<String>,
        raw: impl Into<String>,
        tokens: Vec<String>,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            raw: raw.into(),
            tokens,
        }
    }

    /// Number of tokens in the sentence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ============================================================================
// Keyword
// ============================================================================

/// The extraction method that produced (or contributed to) a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMethod {
    /// Aggregate TF-IDF term weight across the document
    TermWeight,
    /// Co-occurrence degree/frequency phrase scoring
    Cooccurrence,
    /// Noun-phrase candidates from a syntactic tagger collaborator
    Syntactic,
}

impl KeywordMethod {
    /// User-facing name used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TermWeight => "term_weight",
            Self::Cooccurrence => "cooccurrence",
            Self::Syntactic => "syntactic",
        }
    }
}

/// A merged keyword or keyphrase with its per-method provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    /// Surface form of the highest-scoring occurrence
    pub text: String,
    /// Folded form (lowercase, plural/morphology folded) used for dedup
    pub stem: String,
    /// Combined score in [0, 1]
    pub score: f64,
    /// Normalized score contributed by each method
    pub method_scores: Vec<(KeywordMethod, f64)>,
}

impl Keyword {
    /// The set of methods that produced this keyword
    pub fn methods(&self) -> Vec<KeywordMethod> {
        self.method_scores.iter().map(|(m, _)| *m).collect()
    }

    /// Whether the keyword spans multiple words
    pub fn is_phrase(&self) -> bool {
        self.text.contains(' ')
    }
}

// ============================================================================
// Topic hierarchy
// ============================================================================

/// One topic cluster in the two-level hierarchy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Cluster id (0-based, stable within one result)
    pub id: usize,
    /// Label: best-matching global keyword, or the centroid's top term
    pub label: Keyword,
    /// Member sentence indices, ordered by composite score descending.
    /// Never empty in a final result.
    pub sentence_indices: Vec<usize>,
}

/// The topic → sentence hierarchy produced by the clusterer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicTree {
    /// Topics in cluster-id order
    pub topics: Vec<Topic>,
}

impl TopicTree {
    /// Total number of topics
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the tree has no topics
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

// ============================================================================
// Q&A
// ============================================================================

/// Which template produced a Q&A pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QaCategory {
    /// "X is/are Y" → "What is x?"
    Definition,
    /// "X causes/leads to Y" → "What does X cause?"
    Causal,
    /// List-marker sentences → "What are the types of X?"
    Enumeration,
    /// Keyword fallback → "What is {keyword}?"
    Keyword,
}

impl QaCategory {
    /// User-facing name used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Causal => "causal",
            Self::Enumeration => "enumeration",
            Self::Keyword => "keyword",
        }
    }
}

/// A generated question/answer pair.
///
/// The answer is always a verbatim source sentence; question text is unique
/// (case/whitespace-normalized) within one result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QAPair {
    /// Question text
    pub question: String,
    /// Answer text (verbatim source sentence)
    pub answer: String,
    /// Which template fired
    pub category: QaCategory,
    /// Index of the source sentence
    pub sentence_index: usize,
}

// ============================================================================
// Selections & result
// ============================================================================

/// A selected sentence with its composite score, in original document order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Original sentence index
    pub index: usize,
    /// Sentence text
    pub text: String,
    /// Composite importance score in [0, 1]
    pub score: f64,
}

/// Basic counts reported alongside the analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of input sentences
    pub num_sentences: usize,
    /// Total token count across all sentences
    pub num_tokens: usize,
    /// Distinct terms in the vocabulary (including n-grams)
    pub num_terms: usize,
    /// Keywords in the merged list
    pub num_keywords: usize,
    /// Topics in the hierarchy
    pub num_topics: usize,
    /// Generated Q&A pairs
    pub num_questions: usize,
}

/// The sole object returned to external collaborators.
///
/// Exporters serialize it; presentation layers render it. Neither mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Summary sentences in original order
    pub summary: Vec<ScoredSentence>,
    /// Shorter key-points selection, also in original order
    pub key_points: Vec<ScoredSentence>,
    /// Merged, deduplicated keyword list
    pub keywords: Vec<Keyword>,
    /// Two-level topic hierarchy
    pub topics: TopicTree,
    /// Generated question/answer pairs
    pub qa_pairs: Vec<QAPair>,
    /// Composite importance score per sentence, indexed by sentence index
    pub composite_scores: Vec<f64>,
    /// Basic counts
    pub stats: DocumentStats,
}
