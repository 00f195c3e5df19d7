//! Structural phrase source
//!
//! Noun-phrase-like candidates come from a linguistic tagger, which is an
//! external collaborator: the core only defines the [`SyntacticTagger`]
//! seam. When no tagger is supplied the aggregator simply runs without
//! this source.

use super::{KeywordCandidate, KeywordSource};
use crate::nlp::stem::fold_term;
use crate::types::{KeywordMethod, Sentence};
use crate::vectorize::Document;
use rustc_hash::FxHashMap;

/// Longest accepted noun phrase, in words
const MAX_PHRASE_WORDS: usize = 4;

/// A linguistic tagger collaborator producing noun-phrase candidates.
///
/// Implementations live outside the core (wrapping a POS tagger, a parser,
/// or precomputed annotations shipped with the document).
pub trait SyntacticTagger: Send + Sync {
    /// Noun-phrase-like spans for one sentence, as surface strings
    fn noun_phrases(&self, sentence: &Sentence) -> Vec<String>;
}

/// Keyword source wrapping a [`SyntacticTagger`].
///
/// Candidates are ranked by how often their folded form recurs across the
/// document; recurring noun phrases are strong topic markers.
pub struct SyntacticSource<'a> {
    tagger: &'a dyn SyntacticTagger,
    /// Candidates returned per invocation
    max_candidates: usize,
}

impl<'a> SyntacticSource<'a> {
    /// Create a source backed by the given tagger
    pub fn new(tagger: &'a dyn SyntacticTagger, max_candidates: usize) -> Self {
        Self {
            tagger,
            max_candidates,
        }
    }
}

impl KeywordSource for SyntacticSource<'_> {
    fn method(&self) -> KeywordMethod {
        KeywordMethod::Syntactic
    }

    fn candidates(&self, document: &Document) -> Vec<KeywordCandidate> {
        // Frequency by folded form, keeping the first surface form seen
        let mut counts: FxHashMap<String, (String, f64)> = FxHashMap::default();
        for sentence in &document.sentences {
            for phrase in self.tagger.noun_phrases(sentence) {
                let trimmed = phrase.trim();
                if trimmed.is_empty()
                    || trimmed.split_whitespace().count() > MAX_PHRASE_WORDS
                {
                    continue;
                }
                let stem = fold_term(trimmed);
                let entry = counts
                    .entry(stem)
                    .or_insert_with(|| (trimmed.to_string(), 0.0));
                entry.1 += 1.0;
            }
        }

        let mut candidates: Vec<KeywordCandidate> = counts
            .into_iter()
            .map(|(stem, (text, count))| KeywordCandidate {
                text,
                stem,
                score: count,
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.stem.cmp(&b.stem))
        });
        candidates.truncate(self.max_candidates);
        candidates
    }
}
