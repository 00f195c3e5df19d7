//! Similarity graph construction
//!
//! Scans the O(N²) sentence pairs, keeps edges whose cosine similarity
//! clears the configured threshold, and emits a [`CsrGraph`]. For small
//! documents the sequential scan is faster; large documents split the pair
//! scan across rayon workers.

use super::csr::CsrGraph;
use crate::vectorize::vector::SparseVector;
use rayon::prelude::*;
use tracing::debug;

/// Documents below this many sentences use the sequential pair scan
const PARALLEL_CUTOFF: usize = 128;

/// Builds a sparse similarity graph over sentence vectors
#[derive(Debug, Clone)]
pub struct SimilarityGraphBuilder {
    /// Minimum cosine similarity for an edge to survive
    threshold: f64,
}

impl SimilarityGraphBuilder {
    /// Create a builder with the given edge threshold
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Build the graph. Degenerate (empty) vectors produce isolated nodes.
    pub fn build(&self, vectors: &[SparseVector]) -> CsrGraph {
        let n = vectors.len();
        if n == 0 {
            return CsrGraph::default();
        }

        let edges = if n < PARALLEL_CUTOFF {
            self.scan_pairs_sequential(vectors)
        } else {
            self.scan_pairs_parallel(vectors)
        };

        debug!(
            nodes = n,
            edges = edges.len(),
            threshold = self.threshold,
            "built similarity graph"
        );

        CsrGraph::from_edges(n, &edges)
    }

    fn scan_pairs_sequential(&self, vectors: &[SparseVector]) -> Vec<(u32, u32, f64)> {
        let mut edges = Vec::new();
        for i in 0..vectors.len() {
            for j in (i + 1)..vectors.len() {
                let sim = vectors[i].cosine_similarity(&vectors[j]);
                if sim >= self.threshold && sim > 0.0 {
                    edges.push((i as u32, j as u32, sim));
                }
            }
        }
        edges
    }

    fn scan_pairs_parallel(&self, vectors: &[SparseVector]) -> Vec<(u32, u32, f64)> {
        // Parallelize over the outer index; each worker emits its row's
        // surviving edges, concatenated in row order so the result matches
        // the sequential scan exactly.
        (0..vectors.len())
            .into_par_iter()
            .map(|i| {
                let mut row = Vec::new();
                for j in (i + 1)..vectors.len() {
                    let sim = vectors[i].cosine_similarity(&vectors[j]);
                    if sim >= self.threshold && sim > 0.0 {
                        row.push((i as u32, j as u32, sim));
                    }
                }
                row
            })
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(pairs: &[(u32, f64)]) -> SparseVector {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_edges_above_threshold_survive() {
        let vectors = vec![
            vec_of(&[(0, 1.0), (1, 1.0)]),
            vec_of(&[(0, 1.0), (1, 1.0)]), // identical to 0
            vec_of(&[(2, 1.0)]),           // orthogonal
        ];

        let graph = SimilarityGraphBuilder::new(0.1).build(&vectors);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.degree(2), 0);
    }

    #[test]
    fn test_high_threshold_prunes_everything() {
        let vectors = vec![
            vec_of(&[(0, 1.0), (1, 0.2)]),
            vec_of(&[(0, 0.2), (1, 1.0)]),
        ];

        let graph = SimilarityGraphBuilder::new(0.99).build(&vectors);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.isolated_nodes().len(), 2);
    }

    #[test]
    fn test_degenerate_vectors_are_isolated() {
        let vectors = vec![
            vec_of(&[(0, 1.0)]),
            SparseVector::new(),
            vec_of(&[(0, 1.0)]),
        ];

        let graph = SimilarityGraphBuilder::new(0.1).build(&vectors);
        assert_eq!(graph.isolated_nodes(), vec![1]);
        assert_eq!(graph.degree(0), 1);
    }

    #[test]
    fn test_empty_input() {
        let graph = SimilarityGraphBuilder::new(0.1).build(&[]);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Enough structure to produce a nontrivial edge set
        let vectors: Vec<SparseVector> = (0..20)
            .map(|i| vec_of(&[(i % 5, 1.0), ((i + 1) % 5, 0.5)]))
            .collect();

        let builder = SimilarityGraphBuilder::new(0.1);
        let seq = builder.scan_pairs_sequential(&vectors);
        let par = builder.scan_pairs_parallel(&vectors);

        assert_eq!(seq.len(), par.len());
        for (a, b) in seq.iter().zip(par.iter()) {
            assert_eq!(a.0, b.0);
            assert_eq!(a.1, b.1);
            assert!((a.2 - b.2).abs() < 1e-12);
        }
    }
}
