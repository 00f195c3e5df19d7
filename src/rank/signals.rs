//! Signal combination
//!
//! The positional heuristic plus the weighted merge of the three importance
//! signals (graph rank, term-weight sum, position). Each signal is min-max
//! normalized before combination so no single signal dominates through its
//! natural scale.

use crate::config::{PositionBoost, SignalWeights};
use crate::types::Sentence;

/// Tokens below this count mark a sentence as low-content
const SHORT_SENTENCE: usize = 8;
/// Tokens above this count mark a sentence as rambling
const LONG_SENTENCE: usize = 60;
/// Punctuation/symbol character ratio above this marks noise
const SYMBOL_RATIO: f64 = 0.3;

/// Positional scores: boosted lead and tail windows, penalized low-content
/// sentences.
pub fn position_scores(sentences: &[Sentence], boost: &PositionBoost) -> Vec<f64> {
    let n = sentences.len();
    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let base = if i < boost.lead_window {
                (boost.lead_score - i as f64 * boost.lead_decay).max(boost.base_score)
            } else if i + boost.tail_window >= n {
                boost.tail_score
            } else {
                boost.base_score
            };
            (base * quality_multiplier(sentence)).min(1.0)
        })
        .collect()
}

/// Content-quality multiplier: penalize very short, very long, or
/// symbol-heavy sentences so boilerplate at section boundaries doesn't ride
/// the positional boost into the summary.
fn quality_multiplier(sentence: &Sentence) -> f64 {
    let mut multiplier = 1.0;

    let word_count = sentence.len();
    if word_count < SHORT_SENTENCE {
        multiplier *= 0.5;
    } else if word_count > LONG_SENTENCE {
        multiplier *= 0.7;
    }

    let text = &sentence.text;
    if !text.is_empty() {
        let symbols = text
            .chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count();
        if symbols as f64 / text.chars().count() as f64 > SYMBOL_RATIO {
            multiplier *= 0.6;
        }
    }

    multiplier
}

/// Min-max normalize scores to [0, 1]. A constant signal maps to all 1.0
/// so it neither helps nor hurts any sentence relative to another.
pub fn min_max_normalize(scores: &[f64]) -> Vec<f64> {
    let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if scores.is_empty() || (max - min).abs() < 1e-12 {
        return vec![1.0; scores.len()];
    }

    scores.iter().map(|s| (s - min) / (max - min)).collect()
}

/// Combine the three signals into one composite score per sentence.
///
/// Each input is independently min-max normalized, then merged by the
/// configured weights (normalized by their sum). Output lies in [0, 1].
pub fn combine(
    graph: &[f64],
    term_weight: &[f64],
    position: &[f64],
    weights: &SignalWeights,
) -> Vec<f64> {
    debug_assert_eq!(graph.len(), term_weight.len());
    debug_assert_eq!(graph.len(), position.len());

    let graph = min_max_normalize(graph);
    let term_weight = min_max_normalize(term_weight);
    let position = min_max_normalize(position);

    let total = weights.total();
    (0..graph.len())
        .map(|i| {
            (graph[i] * weights.graph
                + term_weight[i] * weights.term_weight
                + position[i] * weights.position)
                / total
        })
        .collect()
}

/// Sentence indices ordered by composite score descending, ties broken by
/// earlier original position.
pub fn rank_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(index: usize, words: usize) -> Sentence {
        let tokens: Vec<String> = (0..words).map(|w| format!("word{w}")).collect();
        Sentence::new(index, tokens.join(" "), tokens)
    }

    #[test]
    fn test_lead_and_tail_boost() {
        let sentences: Vec<Sentence> = (0..10).map(|i| sent(i, 12)).collect();
        let scores = position_scores(&sentences, &PositionBoost::default());

        // Lead decays 1.0, 0.9, 0.8; middle sits at base; tail back up
        assert!((scores[0] - 1.0).abs() < 1e-9);
        assert!((scores[1] - 0.9).abs() < 1e-9);
        assert!((scores[2] - 0.8).abs() < 1e-9);
        assert!((scores[5] - 0.5).abs() < 1e-9);
        assert!((scores[9] - 0.8).abs() < 1e-9);
        assert!(scores[0] > scores[5]);
    }

    #[test]
    fn test_short_sentence_penalized() {
        let sentences = vec![sent(0, 3), sent(1, 12)];
        let scores = position_scores(&sentences, &PositionBoost::default());
        // Both are in boosted windows, but the three-word sentence is halved
        assert!(scores[0] < scores[1]);
    }

    #[test]
    fn test_symbol_heavy_sentence_penalized() {
        let noisy = Sentence::new(
            0,
            "$$ == ## :: !! %% && (( ))",
            (0..9).map(|i| format!("t{i}")).collect(),
        );
        let clean = sent(1, 9);
        let scores = position_scores(&[noisy, clean], &PositionBoost::default());
        assert!(scores[0] < scores[1]);
    }

    #[test]
    fn test_min_max_normalize() {
        let normalized = min_max_normalize(&[2.0, 4.0, 6.0]);
        assert!((normalized[0] - 0.0).abs() < 1e-9);
        assert!((normalized[1] - 0.5).abs() < 1e-9);
        assert!((normalized[2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_signal_normalizes_to_ones() {
        let normalized = min_max_normalize(&[0.3, 0.3, 0.3]);
        assert_eq!(normalized, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_combined_scores_in_unit_range() {
        let composite = combine(
            &[0.1, 0.9, 0.5],
            &[10.0, 2.0, 7.0],
            &[1.0, 0.5, 0.8],
            &SignalWeights::default(),
        );
        for score in &composite {
            assert!((0.0..=1.0).contains(score));
        }
    }

    #[test]
    fn test_weights_shift_the_winner() {
        let graph = [1.0, 0.0];
        let term = [0.0, 1.0];
        let position = [0.5, 0.5];

        let graph_heavy = combine(&graph, &term, &position, &SignalWeights {
            graph: 1.0,
            term_weight: 0.0,
            position: 0.0,
        });
        assert!(graph_heavy[0] > graph_heavy[1]);

        let term_heavy = combine(&graph, &term, &position, &SignalWeights {
            graph: 0.0,
            term_weight: 1.0,
            position: 0.0,
        });
        assert!(term_heavy[1] > term_heavy[0]);
    }

    #[test]
    fn test_rank_order_breaks_ties_by_position() {
        let order = rank_order(&[0.5, 0.9, 0.5, 0.1]);
        assert_eq!(order, vec![1, 0, 2, 3]);
    }
}
