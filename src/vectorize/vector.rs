//! Sparse term-weight vectors
//!
//! Sentences are represented as sparse id → weight maps with a cached L2
//! norm, which makes the O(N²) cosine pair scan during graph construction a
//! cheap sparse dot product.

use rustc_hash::FxHashMap;

/// A sparse term-weight vector over interned term ids
#[derive(Debug, Clone, Default)]
pub struct SparseVector {
    /// Non-zero dimensions: term id → weight
    weights: FxHashMap<u32, f64>,
    /// Cached L2 norm
    norm: f64,
}

impl SparseVector {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a weight map, caching the norm
    pub fn from_weights(weights: FxHashMap<u32, f64>) -> Self {
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        Self { weights, norm }
    }

    /// The cached L2 norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Weight for a term id (0.0 if absent)
    pub fn weight(&self, id: u32) -> f64 {
        self.weights.get(&id).copied().unwrap_or(0.0)
    }

    /// Sum of all weights
    pub fn weight_sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Iterate over non-zero dimensions
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.weights.iter().map(|(&id, &w)| (id, w))
    }

    /// The highest-weighted term id, ties broken by smaller id.
    ///
    /// Smaller id means earlier first occurrence, so the tie-break is
    /// deterministic and position-stable.
    pub fn top_term(&self) -> Option<u32> {
        self.weights
            .iter()
            .map(|(&id, &w)| (id, w))
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(b.0.cmp(&a.0))
            })
            .map(|(id, _)| id)
    }

    /// Number of non-zero dimensions
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the vector has no non-zero dimensions.
    ///
    /// Empty vectors are the "degenerate" case: stopword-only sentences
    /// produce them, and they are excluded from the usable-vector count when
    /// choosing k for clustering.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Cosine similarity with another vector (0.0 if either is degenerate)
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }

        // Iterate the smaller map
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };

        let mut dot = 0.0;
        for (id, w) in small {
            if let Some(other_w) = large.get(id) {
                dot += w * other_w;
            }
        }

        dot / (self.norm * other.norm)
    }
}

impl FromIterator<(u32, f64)> for SparseVector {
    fn from_iter<T: IntoIterator<Item = (u32, f64)>>(iter: T) -> Self {
        Self::from_weights(iter.into_iter().collect())
    }
}
