//! Term weighting
//!
//! The [`TermWeighter`] turns the input sentence sequence into a
//! [`Document`]: one inverse-document-frequency-weighted sparse vector per
//! sentence plus the shared [`Vocabulary`]. Sentences are treated as
//! mini-documents for frequency statistics. Everything downstream consumes
//! these vectors.

pub mod vector;
pub mod vocab;

use crate::config::PipelineConfig;
use crate::error::{AnalysisError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;
use vector::SparseVector;
use vocab::Vocabulary;

/// One document's worth of sentences, vectors, and vocabulary.
///
/// Owned exclusively by a single pipeline invocation and immutable after
/// construction.
#[derive(Debug)]
pub struct Document {
    /// Input sentences, in original order
    pub sentences: Vec<Sentence>,
    /// One term-weight vector per sentence, parallel to `sentences`
    pub vectors: Vec<SparseVector>,
    /// Shared term table with document-frequency statistics
    pub vocabulary: Vocabulary,
}

impl Document {
    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total token count across all sentences
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(|s| s.len()).sum()
    }

    /// Per-sentence sum of term weights (the raw term-weight signal)
    pub fn term_weight_sums(&self) -> Vec<f64> {
        self.vectors.iter().map(|v| v.weight_sum()).collect()
    }
}

/// Builds TF-IDF weighted term vectors over a sentence sequence.
///
/// Supports an n-gram window (unigrams through `ngram_max`, default
/// bigrams) so that phrase-aware consumers see multi-word terms as single
/// vocabulary entries. Deterministic: identical input yields identical
/// vectors and term ids.
#[derive(Debug)]
pub struct TermWeighter {
    ngram_max: usize,
    stopwords: StopwordFilter,
}

impl TermWeighter {
    /// Create a weighter from the pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut stopwords = StopwordFilter::new(&config.language);
        stopwords.add_words(&config.stopwords);
        Self {
            ngram_max: config.ngram_max.max(1),
            stopwords,
        }
    }

    /// Create a weighter with an explicit n-gram span and stopword filter
    pub fn new(ngram_max: usize, stopwords: StopwordFilter) -> Self {
        Self {
            ngram_max: ngram_max.max(1),
            stopwords,
        }
    }

    /// Build the vectorized document.
    ///
    /// Stopword-only or empty sentences yield valid empty vectors. Fails
    /// only when the sentence count is zero.
    pub fn build(&self, sentences: Vec<Sentence>) -> Result<Document> {
        if sentences.is_empty() {
            return Err(AnalysisError::insufficient_text(
                "term_weighter",
                "cannot vectorize a document with 0 sentences",
            ));
        }

        let n = sentences.len();
        let mut vocabulary = Vocabulary::with_capacity(n * 8);

        // First pass: term counts per sentence, document frequency per term
        let mut sentence_counts: Vec<FxHashMap<u32, f64>> = Vec::with_capacity(n);
        for sentence in &sentences {
            let terms = self.sentence_terms(sentence);
            let mut counts: FxHashMap<u32, f64> = FxHashMap::default();
            let mut seen: FxHashSet<u32> = FxHashSet::default();

            for term in &terms {
                let id = vocabulary.intern(term);
                *counts.entry(id).or_insert(0.0) += 1.0;
                if seen.insert(id) {
                    vocabulary.bump_doc_freq(id);
                }
            }
            sentence_counts.push(counts);
        }

        // Second pass: weight = tf * idf
        let vectors: Vec<SparseVector> = sentence_counts
            .into_iter()
            .map(|counts| {
                counts
                    .into_iter()
                    .map(|(id, tf)| (id, tf * vocabulary.idf(id, n)))
                    .collect()
            })
            .collect();

        debug!(
            sentences = n,
            terms = vocabulary.len(),
            "built term vectors"
        );

        Ok(Document {
            sentences,
            vectors,
            vocabulary,
        })
    }

    /// Extract the weighted terms for one sentence: content unigrams plus
    /// n-grams over the stopword-filtered token stream.
    fn sentence_terms(&self, sentence: &Sentence) -> Vec<String> {
        let content: Vec<String> = sentence
            .tokens
            .iter()
            .filter(|t| is_content_token(t) && !self.stopwords.is_stopword(t))
            .map(|t| t.to_lowercase())
            .collect();

        let mut terms = content.clone();
        for span in 2..=self.ngram_max {
            for window in content.windows(span) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}

/// Whether a token carries content worth weighting (has at least one
/// alphanumeric character and is longer than one character).
fn is_content_token(token: &str) -> bool {
    token.chars().count() > 1 && token.chars().any(|c| c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(index: usize, text: &str) -> Sentence {
        let tokens = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()).to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Sentence::new(index, text, tokens)
    }

    fn weighter() -> TermWeighter {
        TermWeighter::from_config(&PipelineConfig::default())
    }

    #[test]
    fn test_zero_sentences_is_an_error() {
        let err = weighter().build(vec![]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientText { stage: "term_weighter", .. }
        ));
    }

    #[test]
    fn test_single_sentence_degenerate_but_valid() {
        let doc = weighter()
            .build(vec![sent(0, "Machine learning is powerful.")])
            .unwrap();
        assert_eq!(doc.len(), 1);
        assert!(!doc.vectors[0].is_empty());
        // Every term appears in the only sentence, so weights are uniform idf
        assert!(doc.vectors[0].weight_sum() > 0.0);
    }

    #[test]
    fn test_stopword_only_sentence_yields_empty_vector() {
        let doc = weighter()
            .build(vec![
                sent(0, "It is what it is."),
                sent(1, "Neural networks learn representations."),
            ])
            .unwrap();
        assert!(doc.vectors[0].is_empty());
        assert!(!doc.vectors[1].is_empty());
    }

    #[test]
    fn test_rare_terms_outweigh_common_ones() {
        let doc = weighter()
            .build(vec![
                sent(0, "gradient descent optimizes networks"),
                sent(1, "gradient descent converges slowly"),
                sent(2, "gradient descent updates weights"),
                sent(3, "photosynthesis converts light gradient"),
            ])
            .unwrap();

        let gradient = doc.vocabulary.id_of("gradient").unwrap();
        let photo = doc.vocabulary.id_of("photosynthesis").unwrap();
        // "photosynthesis" occurs in one sentence, "gradient" in all four
        assert!(doc.vectors[3].weight(photo) > doc.vectors[3].weight(gradient));
    }

    #[test]
    fn test_bigrams_are_in_vocabulary() {
        let doc = weighter()
            .build(vec![
                sent(0, "neural networks learn"),
                sent(1, "neural networks generalize"),
            ])
            .unwrap();
        assert!(doc.vocabulary.id_of("neural networks").is_some());
    }

    #[test]
    fn test_deterministic_vectors() {
        let build = || {
            weighter()
                .build(vec![
                    sent(0, "alpha beta gamma"),
                    sent(1, "beta gamma delta"),
                ])
                .unwrap()
        };
        let a = build();
        let b = build();

        assert_eq!(a.vocabulary.len(), b.vocabulary.len());
        for (va, vb) in a.vectors.iter().zip(b.vectors.iter()) {
            assert_eq!(va.len(), vb.len());
            for (id, w) in va.iter() {
                assert!((w - vb.weight(id)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_term_weight_sums_parallel_to_sentences() {
        let doc = weighter()
            .build(vec![sent(0, "gradient descent converges"), sent(1, "the of and")])
            .unwrap();
        let sums = doc.term_weight_sums();
        assert_eq!(sums.len(), 2);
        assert!(sums[0] > 0.0);
        assert_eq!(sums[1], 0.0);
    }
}
