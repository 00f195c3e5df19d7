//! Sentence importance ranking
//!
//! Graph-based PageRank scoring plus the positional signal and the
//! weighted combination of all three importance signals.

pub mod pagerank;
pub mod signals;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct RankOutcome {
    /// Scores for each node (indexed by sentence index), summing to 1
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1)
    pub delta: f64,
    /// Whether the iteration converged before the cap
    pub converged: bool,
}

impl RankOutcome {
    /// Create a new outcome
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Score for a node (0.0 if out of range)
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}
