//! Term-weight keyword source
//!
//! Ranks vocabulary terms (including n-grams) by their aggregate TF-IDF
//! weight across all sentence vectors.

use super::{KeywordCandidate, KeywordSource};
use crate::nlp::stem::fold_term;
use crate::types::KeywordMethod;
use crate::vectorize::Document;
use rustc_hash::FxHashMap;

/// Top terms by document-wide term weight
#[derive(Debug, Clone)]
pub struct TermWeightSource {
    /// Candidates returned per invocation
    max_candidates: usize,
}

impl TermWeightSource {
    /// Create a source that yields at most `max_candidates` terms
    pub fn new(max_candidates: usize) -> Self {
        Self { max_candidates }
    }
}

impl KeywordSource for TermWeightSource {
    fn method(&self) -> KeywordMethod {
        KeywordMethod::TermWeight
    }

    fn candidates(&self, document: &Document) -> Vec<KeywordCandidate> {
        let mut totals: FxHashMap<u32, f64> = FxHashMap::default();
        for vector in &document.vectors {
            for (id, weight) in vector.iter() {
                *totals.entry(id).or_insert(0.0) += weight;
            }
        }

        let mut ranked: Vec<(u32, f64)> = totals.into_iter().collect();
        // Descending weight, ties by first-occurrence order (smaller id)
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(self.max_candidates);

        ranked
            .into_iter()
            .filter_map(|(id, score)| {
                document.vocabulary.term(id).map(|term| KeywordCandidate {
                    text: term.to_string(),
                    stem: fold_term(term),
                    score,
                })
            })
            .collect()
    }
}
