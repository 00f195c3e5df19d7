//! Keyword merge
//!
//! Normalizes each source's list to [0, 1], merges per-term contributions
//! weighted across methods, deduplicates by folded stem, and caps the
//! result at the configured size.

use super::{KeywordCandidate, KeywordSource};
use crate::types::{Keyword, KeywordMethod};
use crate::vectorize::Document;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Merges candidates from all active keyword sources
#[derive(Debug, Clone)]
pub struct KeywordAggregator {
    /// Cap on the merged list
    top_n: usize,
}

struct MergedEntry {
    text: String,
    best_method_score: f64,
    method_scores: Vec<(KeywordMethod, f64)>,
}

impl KeywordAggregator {
    /// Create an aggregator that keeps the top `top_n` keywords
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Run every source and merge the results.
    ///
    /// An empty result is a valid outcome (e.g. stopword-only documents),
    /// not an error.
    pub fn aggregate(
        &self,
        sources: &[&dyn KeywordSource],
        document: &Document,
    ) -> Vec<Keyword> {
        let num_sources = sources.len().max(1);
        let mut merged: FxHashMap<String, MergedEntry> = FxHashMap::default();

        for source in sources {
            let method = source.method();
            let candidates = source.candidates(document);
            debug!(
                method = method.as_str(),
                candidates = candidates.len(),
                "keyword source finished"
            );
            for candidate in normalize_list(candidates) {
                let entry = merged
                    .entry(candidate.stem.clone())
                    .or_insert_with(|| MergedEntry {
                        text: candidate.text.clone(),
                        best_method_score: candidate.score,
                        method_scores: Vec::new(),
                    });
                // Keep the surface form of the highest-scoring occurrence
                if candidate.score > entry.best_method_score {
                    entry.best_method_score = candidate.score;
                    entry.text = candidate.text.clone();
                }
                // One entry per method: candidates from the same source
                // that fold to the same stem keep only their best score
                match entry.method_scores.iter_mut().find(|(m, _)| *m == method) {
                    Some((_, existing)) => *existing = existing.max(candidate.score),
                    None => entry.method_scores.push((method, candidate.score)),
                }
            }
        }

        if merged.is_empty() {
            warn!("no keyword candidates from any source; returning empty list");
            return Vec::new();
        }

        let mut keywords: Vec<Keyword> = merged
            .into_iter()
            .map(|(stem, entry)| {
                // Mean over all active sources: terms found by several
                // methods accumulate, single-method terms are discounted.
                let combined = entry
                    .method_scores
                    .iter()
                    .map(|(_, s)| s)
                    .sum::<f64>()
                    / num_sources as f64;
                Keyword {
                    text: entry.text,
                    stem,
                    score: combined.clamp(0.0, 1.0),
                    method_scores: entry.method_scores,
                }
            })
            .collect();

        keywords.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.stem.cmp(&b.stem))
        });
        keywords.truncate(self.top_n);
        keywords
    }
}

/// Scale a candidate list so the best entry scores 1.0
fn normalize_list(mut candidates: Vec<KeywordCandidate>) -> Vec<KeywordCandidate> {
    let max = candidates
        .iter()
        .map(|c| c.score)
        .fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        for candidate in &mut candidates {
            candidate.score /= max;
        }
    }
    candidates
}
