//! Extractive summary selection
//!
//! Selects the top-composite-score sentences and re-emits them in original
//! document order, so summaries read as faithful excerpts rather than
//! score-sorted fragments. A shorter key-points selection follows the same
//! policy with its own bound.

use crate::config::PipelineConfig;
use crate::error::{AnalysisError, Result};
use crate::rank::signals::rank_order;
use crate::types::{ScoredSentence, Sentence};
use tracing::debug;

/// Composite-score sentence selector
#[derive(Debug, Clone)]
pub struct Summarizer {
    ratio: f64,
    min_sentences: usize,
    max_sentences: usize,
    key_points: usize,
}

impl Summarizer {
    /// Create a summarizer from the pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            ratio: config.summary_ratio,
            min_sentences: config.min_sentences,
            max_sentences: config.max_sentences,
            key_points: config.key_points,
        }
    }

    /// Number of sentences the summary will contain for a document of `n`
    pub fn summary_size(&self, n: usize) -> usize {
        let target = (self.ratio * n as f64).round() as usize;
        target.clamp(self.min_sentences, self.max_sentences).min(n)
    }

    /// Select the summary: top-k by composite score, re-ordered by original
    /// position. A document shorter than `min_sentences` returns all of it.
    pub fn summary(
        &self,
        sentences: &[Sentence],
        composite: &[f64],
    ) -> Result<Vec<ScoredSentence>> {
        if sentences.is_empty() {
            return Err(AnalysisError::insufficient_text(
                "summarizer",
                "cannot summarize 0 sentences",
            ));
        }

        let k = self.summary_size(sentences.len());
        debug!(
            total = sentences.len(),
            selected = k,
            "selected summary sentences"
        );
        Ok(select_top(sentences, composite, k))
    }

    /// Select the key-points subset (its own bound, capped at the summary size)
    pub fn key_points(
        &self,
        sentences: &[Sentence],
        composite: &[f64],
    ) -> Result<Vec<ScoredSentence>> {
        if sentences.is_empty() {
            return Err(AnalysisError::insufficient_text(
                "summarizer",
                "cannot extract key points from 0 sentences",
            ));
        }

        let k = self
            .key_points
            .min(self.summary_size(sentences.len()))
            .min(sentences.len());
        Ok(select_top(sentences, composite, k))
    }
}

/// Take the top `k` sentences by composite score (ties to earlier
/// positions), then restore original document order.
fn select_top(sentences: &[Sentence], composite: &[f64], k: usize) -> Vec<ScoredSentence> {
    let mut selected: Vec<usize> = rank_order(composite).into_iter().take(k).collect();
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|i| ScoredSentence {
            index: sentences[i].index,
            text: sentences[i].text.clone(),
            score: composite[i],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(n: usize) -> Vec<Sentence> {
        (0..n)
            .map(|i| {
                Sentence::new(
                    i,
                    format!("Sentence number {i}."),
                    vec!["sentence".into(), "number".into(), format!("{i}")],
                )
            })
            .collect()
    }

    fn summarizer(ratio: f64, min: usize, max: usize) -> Summarizer {
        Summarizer::from_config(
            &PipelineConfig::new()
                .with_summary_ratio(ratio)
                .with_summary_bounds(min, max),
        )
    }

    #[test]
    fn test_bounds_clamp() {
        // round(0.3 * 20) = 6, clamped to max 5
        let s = summarizer(0.3, 2, 5);
        assert_eq!(s.summary_size(20), 5);
        // round(0.3 * 10) = 3, inside bounds
        assert_eq!(s.summary_size(10), 3);
        // short document clamps up to min, then down to n
        assert_eq!(s.summary_size(1), 1);
    }

    #[test]
    fn test_summary_in_original_order() {
        let sents = sentences(10);
        // Highest scores scattered out of order
        let composite = [0.1, 0.9, 0.2, 0.8, 0.1, 0.1, 0.7, 0.1, 0.1, 0.6];
        let summary = summarizer(0.4, 2, 6).summary(&sents, &composite).unwrap();

        let indices: Vec<usize> = summary.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 3, 6, 9]);
        for pair in indices.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_short_document_returns_everything() {
        let sents = sentences(2);
        let composite = [0.5, 0.5];
        let summary = summarizer(0.3, 3, 15).summary(&sents, &composite).unwrap();
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let err = summarizer(0.3, 3, 15).summary(&[], &[]).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientText { .. }));
    }

    #[test]
    fn test_key_points_capped_at_summary_size() {
        let sents = sentences(20);
        let composite: Vec<f64> = (0..20).map(|i| i as f64 / 20.0).collect();
        let s = summarizer(0.3, 2, 5); // summary size 5
        let key_points = s.key_points(&sents, &composite).unwrap();
        assert_eq!(key_points.len(), 5); // default key_points 10, capped at 5
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let sents = sentences(4);
        let composite = [0.5, 0.5, 0.5, 0.5];
        let summary = summarizer(0.5, 1, 2).summary(&sents, &composite).unwrap();
        let indices: Vec<usize> = summary.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
