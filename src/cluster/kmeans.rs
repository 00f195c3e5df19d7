//! Seeded k-means over sparse sentence vectors
//!
//! Cosine-distance centroid clustering with explicit seeding, an iteration
//! cap, and empty-cluster repair. Only non-degenerate vectors participate
//! in fitting; degenerate (empty) vectors are attached to a cluster
//! afterwards by the caller.

use crate::vectorize::vector::SparseVector;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Result of a k-means fit
#[derive(Debug)]
pub struct KMeansFit {
    /// Cluster id per input vector index (usize::MAX for degenerate inputs)
    pub assignments: Vec<usize>,
    /// Final centroids, one per cluster
    pub centroids: Vec<SparseVector>,
    /// Iterations performed
    pub iterations: usize,
}

/// Iterative centroid clustering
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Number of clusters
    pub k: usize,
    /// Iteration cap
    pub max_iterations: usize,
    /// Centroid-movement convergence threshold (mean 1 - cosine)
    pub epsilon: f64,
    /// RNG seed for initialization
    pub seed: u64,
}

impl KMeans {
    /// Create a clusterer
    pub fn new(k: usize, max_iterations: usize, epsilon: f64, seed: u64) -> Self {
        Self {
            k,
            max_iterations,
            epsilon,
            seed,
        }
    }

    /// Fit clusters over the vectors.
    ///
    /// The caller guarantees `k` is at most the number of non-degenerate
    /// vectors; degenerate vectors receive `usize::MAX` assignments.
    pub fn fit(&self, vectors: &[SparseVector]) -> KMeansFit {
        let usable: Vec<usize> = (0..vectors.len())
            .filter(|&i| !vectors[i].is_empty())
            .collect();
        debug_assert!(self.k >= 1 && self.k <= usable.len());

        // Seeded initialization: k distinct usable vectors become centroids
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut shuffled = usable.clone();
        shuffled.shuffle(&mut rng);
        let mut centroids: Vec<SparseVector> = shuffled
            .iter()
            .take(self.k)
            .map(|&i| vectors[i].clone())
            .collect();

        let mut assignments = vec![usize::MAX; vectors.len()];
        let mut iterations = 0;

        while iterations < self.max_iterations {
            iterations += 1;

            // Assignment step
            for &i in &usable {
                assignments[i] = nearest_centroid(&vectors[i], &centroids);
            }

            // Empty-cluster repair: reseed with the member farthest from
            // its assigned centroid
            for cluster in 0..self.k {
                if usable.iter().all(|&i| assignments[i] != cluster) {
                    if let Some(&farthest) = usable.iter().min_by(|&&a, &&b| {
                        let sim_a =
                            vectors[a].cosine_similarity(&centroids[assignments[a]]);
                        let sim_b =
                            vectors[b].cosine_similarity(&centroids[assignments[b]]);
                        sim_a
                            .partial_cmp(&sim_b)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    }) {
                        assignments[farthest] = cluster;
                    }
                }
            }

            // Update step
            let mut movement = 0.0;
            for cluster in 0..self.k {
                let members: Vec<&SparseVector> = usable
                    .iter()
                    .filter(|&&i| assignments[i] == cluster)
                    .map(|&i| &vectors[i])
                    .collect();
                if members.is_empty() {
                    continue;
                }
                let new_centroid = mean_vector(&members);
                movement += 1.0 - new_centroid.cosine_similarity(&centroids[cluster]);
                centroids[cluster] = new_centroid;
            }

            if movement / (self.k as f64) < self.epsilon {
                break;
            }
        }

        debug!(k = self.k, iterations, "k-means converged");

        KMeansFit {
            assignments,
            centroids,
            iterations,
        }
    }
}

/// Index of the most similar centroid (ties to the lower cluster id)
fn nearest_centroid(vector: &SparseVector, centroids: &[SparseVector]) -> usize {
    let mut best = 0;
    let mut best_sim = f64::NEG_INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let sim = vector.cosine_similarity(centroid);
        if sim > best_sim {
            best_sim = sim;
            best = i;
        }
    }
    best
}

/// Component-wise mean of a set of sparse vectors
fn mean_vector(vectors: &[&SparseVector]) -> SparseVector {
    let mut sums: FxHashMap<u32, f64> = FxHashMap::default();
    for vector in vectors {
        for (id, weight) in vector.iter() {
            *sums.entry(id).or_insert(0.0) += weight;
        }
    }
    let n = vectors.len() as f64;
    sums.values_mut().for_each(|w| *w /= n);
    SparseVector::from_weights(sums)
}
