//! Weighted PageRank over the sentence-similarity graph
//!
//! Classic power iteration, with one adjustment: isolated sentences (no
//! edge survived the similarity threshold) are held at their uniform
//! prior score instead of participating in the update, so they never
//! drain toward the bare teleport term — short or fragmented documents
//! never zero out.

use super::RankOutcome;
use crate::config::PipelineConfig;
use crate::graph::csr::CsrGraph;
use tracing::debug;

/// Power-iteration PageRank
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 score delta
    pub epsilon: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            epsilon: 1e-4,
        }
    }
}

impl PageRank {
    /// Create a ranker from the pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            epsilon: config.epsilon,
        }
    }

    /// Run PageRank on a graph.
    ///
    /// Returns the outcome even if convergence wasn't achieved, with
    /// `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> RankOutcome {
        let n = graph.num_nodes;
        if n == 0 {
            return RankOutcome::new(vec![], 0, 0.0, true);
        }

        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let isolated = graph.isolated_nodes();
        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.epsilon {
            iterations += 1;

            new_scores.fill(teleport);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);
                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] +=
                            self.damping * node_score * weight / total_weight;
                    }
                }
            }

            // Isolated sentences keep their uniform prior
            for &node in &isolated {
                new_scores[node as usize] = scores[node as usize];
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Renormalize for numerical stability
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        let converged = delta <= self.epsilon;
        debug!(iterations, delta, converged, "pagerank finished");

        RankOutcome::new(scores, iterations, delta, converged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> CsrGraph {
        CsrGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)])
    }

    fn star() -> CsrGraph {
        // Hub 0 connected to three spokes
        CsrGraph::from_edges(4, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)])
    }

    #[test]
    fn test_symmetric_graph_equal_scores() {
        let result = PageRank::default().run(&triangle());
        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_hub_scores_highest() {
        let result = PageRank::default().run(&star());
        assert!(result.converged);
        for &spoke in &result.scores[1..] {
            assert!(result.scores[0] > spoke);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = PageRank::default().run(&star());
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_isolated_nodes_keep_prior() {
        // Two connected nodes, two isolated ones
        let graph = CsrGraph::from_edges(4, &[(0, 1, 1.0)]);
        let result = PageRank::default().run(&graph);

        // Isolated nodes hold the uniform prior exactly, never draining
        assert!((result.scores[2] - 0.25).abs() < 1e-9);
        assert!((result.scores[3] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_isolated_node_beside_a_star() {
        // Hub 0 with three spokes plus an isolated node 4
        let graph = CsrGraph::from_edges(5, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)]);
        let result = PageRank::default().run(&graph);

        // The isolated node keeps the 1/5 prior while the connected
        // component redistributes its own share
        assert!((result.scores[4] - 0.2).abs() < 1e-6);
        assert!(result.scores[0] > result.scores[4]);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fully_isolated_graph_is_uniform() {
        let graph = CsrGraph::from_edges(5, &[]);
        let result = PageRank::default().run(&graph);
        for score in &result.scores {
            assert!((score - 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_graph() {
        let result = PageRank::default().run(&CsrGraph::default());
        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_iteration_cap_returns_partial() {
        let ranker = PageRank {
            max_iterations: 1,
            epsilon: 0.0,
            ..Default::default()
        };
        let result = ranker.run(&triangle());
        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 3);
    }
}
