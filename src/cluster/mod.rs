//! Topic clustering
//!
//! Groups sentence vectors into a flat set of topic clusters with seeded
//! k-means, orders each cluster's members by composite importance, and
//! labels every cluster with its best-matching keyword. Degenerate inputs
//! (too few distinct vectors, stopword-only sentences) reduce the cluster
//! count instead of failing the pipeline.

pub mod kmeans;
pub mod labeling;

use crate::config::PipelineConfig;
use crate::types::{Keyword, Topic, TopicTree};
use crate::vectorize::Document;
use kmeans::KMeans;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Builds the topic hierarchy over a vectorized document
#[derive(Debug, Clone)]
pub struct TopicClusterer {
    max_topics: usize,
    max_iterations: usize,
    epsilon: f64,
    seed: Option<u64>,
}

impl TopicClusterer {
    /// Create a clusterer from the pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            max_topics: config.max_topics,
            max_iterations: config.cluster_max_iterations,
            epsilon: config.cluster_epsilon,
            seed: config.cluster_seed,
        }
    }

    /// Cluster the document into at most `max_topics` topics.
    ///
    /// Every sentence lands in exactly one topic and no topic is empty.
    /// `composite` is the per-sentence importance score used to order
    /// members; `keywords` (sorted by score) supply labels.
    pub fn cluster(
        &self,
        document: &Document,
        composite: &[f64],
        keywords: &[Keyword],
    ) -> TopicTree {
        let n = document.len();
        if n == 0 || self.max_topics == 0 {
            return TopicTree::default();
        }

        let distinct = distinct_vector_count(document);
        let k = self.max_topics.min(distinct).min(n);

        if k == 0 {
            // All vectors degenerate: one catch-all topic
            warn!("no usable sentence vectors; emitting a single topic");
            let members = order_by_score((0..n).collect(), composite);
            let label = labeling::label_topic(
                &members,
                &document.sentences,
                keywords,
                None,
                &document.vocabulary,
            );
            return TopicTree {
                topics: vec![Topic {
                    id: 0,
                    label,
                    sentence_indices: members,
                }],
            };
        }

        if k < self.max_topics.min(n) {
            warn!(
                requested = self.max_topics,
                distinct,
                k,
                "reduced cluster count for degenerate vectors"
            );
        }

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let fit = KMeans::new(k, self.max_iterations, self.epsilon, seed)
            .fit(&document.vectors);

        // Attach degenerate sentences to the largest cluster so the
        // partition stays total
        let mut assignments = fit.assignments;
        let largest = largest_cluster(&assignments, k);
        for assignment in &mut assignments {
            if *assignment == usize::MAX {
                *assignment = largest;
            }
        }

        let mut topics = Vec::with_capacity(k);
        for cluster in 0..k {
            let members: Vec<usize> = (0..n)
                .filter(|&i| assignments[i] == cluster)
                .collect();
            if members.is_empty() {
                continue;
            }
            let members = order_by_score(members, composite);
            let label = labeling::label_topic(
                &members,
                &document.sentences,
                keywords,
                fit.centroids.get(cluster),
                &document.vocabulary,
            );
            topics.push(Topic {
                id: topics.len(),
                label,
                sentence_indices: members,
            });
        }

        debug!(
            topics = topics.len(),
            iterations = fit.iterations,
            "clustered document"
        );
        TopicTree { topics }
    }
}

/// Number of distinct non-degenerate sentence vectors.
///
/// Identical vectors cannot seed separate centroids, so k is capped here.
fn distinct_vector_count(document: &Document) -> usize {
    let mut seen: FxHashSet<Vec<(u32, u64)>> = FxHashSet::default();
    for vector in &document.vectors {
        if vector.is_empty() {
            continue;
        }
        let mut key: Vec<(u32, u64)> =
            vector.iter().map(|(id, w)| (id, w.to_bits())).collect();
        key.sort_unstable();
        seen.insert(key);
    }
    seen.len()
}

/// Cluster with the most members, ties to the lower id
fn largest_cluster(assignments: &[usize], k: usize) -> usize {
    let mut sizes = vec![0usize; k];
    for &a in assignments {
        if a < k {
            sizes[a] += 1;
        }
    }
    sizes
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Order members by composite score descending, ties by earlier index
fn order_by_score(mut members: Vec<usize>, composite: &[f64]) -> Vec<usize> {
    members.sort_by(|&a, &b| {
        composite[b]
            .partial_cmp(&composite[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;
    use crate::vectorize::TermWeighter;

    fn doc(texts: &[&str]) -> Document {
        let sentences = texts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Sentence::new(i, *t, t.split_whitespace().map(String::from).collect())
            })
            .collect();
        TermWeighter::from_config(&PipelineConfig::default())
            .build(sentences)
            .unwrap()
    }

    fn clusterer(max_topics: usize, seed: u64) -> TopicClusterer {
        TopicClusterer::from_config(
            &PipelineConfig::new()
                .with_max_topics(max_topics)
                .with_cluster_seed(seed),
        )
    }

    fn two_theme_doc() -> Document {
        doc(&[
            "photosynthesis converts light energy into chemical energy",
            "chlorophyll absorbs light during photosynthesis",
            "plants perform photosynthesis in chloroplasts",
            "mitochondria produce cellular energy through respiration",
            "cellular respiration consumes oxygen in mitochondria",
        ])
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let document = two_theme_doc();
        let composite = vec![0.9, 0.8, 0.7, 0.6, 0.5];
        let tree = clusterer(2, 42).cluster(&document, &composite, &[]);

        let mut seen = vec![false; document.len()];
        for topic in &tree.topics {
            assert!(!topic.sentence_indices.is_empty());
            for &i in &topic.sentence_indices {
                assert!(!seen[i], "sentence {i} in two topics");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "some sentence missing from topics");
    }

    #[test]
    fn test_members_ordered_by_composite() {
        let document = two_theme_doc();
        let composite = vec![0.1, 0.9, 0.5, 0.3, 0.7];
        let tree = clusterer(2, 42).cluster(&document, &composite, &[]);

        for topic in &tree.topics {
            for pair in topic.sentence_indices.windows(2) {
                assert!(composite[pair[0]] >= composite[pair[1]]);
            }
        }
    }

    #[test]
    fn test_topic_count_capped() {
        let document = two_theme_doc();
        let composite = vec![0.5; 5];
        let tree = clusterer(3, 1).cluster(&document, &composite, &[]);
        assert!(tree.len() <= 3);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let document = two_theme_doc();
        let composite = vec![0.5, 0.6, 0.7, 0.8, 0.9];
        let a = clusterer(2, 99).cluster(&document, &composite, &[]);
        let b = clusterer(2, 99).cluster(&document, &composite, &[]);

        assert_eq!(a.len(), b.len());
        for (ta, tb) in a.topics.iter().zip(b.topics.iter()) {
            assert_eq!(ta.sentence_indices, tb.sentence_indices);
            assert_eq!(ta.label.text, tb.label.text);
        }
    }

    #[test]
    fn test_stopword_only_document_degrades_to_one_topic() {
        let document = doc(&["it is the of", "a an the to"]);
        let composite = vec![0.5, 0.5];
        let tree = clusterer(3, 42).cluster(&document, &composite, &[]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.topics[0].sentence_indices.len(), 2);
    }

    #[test]
    fn test_degenerate_sentences_still_assigned() {
        let document = doc(&[
            "photosynthesis converts light energy",
            "it is the of and",
            "mitochondria produce cellular energy",
        ]);
        let composite = vec![0.9, 0.1, 0.8];
        let tree = clusterer(2, 42).cluster(&document, &composite, &[]);

        let total: usize = tree.topics.iter().map(|t| t.sentence_indices.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_labels_come_from_keywords_when_present() {
        let document = two_theme_doc();
        let composite = vec![0.5; 5];
        let keywords = vec![Keyword {
            text: "photosynthesis".to_string(),
            stem: "photosynthesis".to_string(),
            score: 1.0,
            method_scores: vec![],
        }];
        let tree = clusterer(2, 42).cluster(&document, &composite, &keywords);

        assert!(tree
            .topics
            .iter()
            .any(|t| t.label.text == "photosynthesis"));
    }

    #[test]
    fn test_zero_max_topics_yields_empty_tree() {
        let document = doc(&["the of and"]);
        let tree = TopicClusterer::from_config(
            &PipelineConfig::new().with_max_topics(0),
        )
        .cluster(&document, &[0.5], &[]);
        assert!(tree.is_empty());
    }
}
