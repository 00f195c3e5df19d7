//! Co-occurrence phrase source
//!
//! A RAKE-style phrase extractor: candidate phrases are maximal runs of
//! content words between stopwords/punctuation, and each phrase is scored
//! by the degree/frequency ratio of its constituent words within the
//! phrase co-occurrence window. Multi-word technical terms accumulate
//! degree from every phrase they share words with, so they naturally
//! outrank isolated unigrams.

use super::{KeywordCandidate, KeywordSource};
use crate::nlp::stem::fold_term;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::KeywordMethod;
use crate::vectorize::Document;
use rustc_hash::FxHashMap;

/// Longest candidate phrase, in words
const MAX_PHRASE_WORDS: usize = 4;

/// RAKE-style degree/frequency phrase scoring
#[derive(Debug, Clone)]
pub struct CooccurrenceSource {
    stopwords: StopwordFilter,
    /// Candidates returned per invocation
    max_candidates: usize,
}

impl CooccurrenceSource {
    /// Create a source with the given stopword filter
    pub fn new(stopwords: StopwordFilter, max_candidates: usize) -> Self {
        Self {
            stopwords,
            max_candidates,
        }
    }

    /// Split one sentence's tokens into stopword-delimited phrase runs
    fn phrase_runs(&self, tokens: &[String]) -> Vec<Vec<String>> {
        let mut runs = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for token in tokens {
            let is_break = !token.chars().any(|c| c.is_alphanumeric())
                || self.stopwords.is_stopword(token);
            if is_break || current.len() >= MAX_PHRASE_WORDS {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
                if is_break {
                    continue;
                }
            }
            current.push(token.to_lowercase());
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

impl KeywordSource for CooccurrenceSource {
    fn method(&self) -> KeywordMethod {
        KeywordMethod::Cooccurrence
    }

    fn candidates(&self, document: &Document) -> Vec<KeywordCandidate> {
        // Collect phrase runs across all sentences
        let mut phrases: Vec<Vec<String>> = Vec::new();
        for sentence in &document.sentences {
            phrases.extend(self.phrase_runs(&sentence.tokens));
        }

        if phrases.is_empty() {
            return Vec::new();
        }

        // Word frequency and degree within the phrase window
        let mut freq: FxHashMap<&str, f64> = FxHashMap::default();
        let mut degree: FxHashMap<&str, f64> = FxHashMap::default();
        for phrase in &phrases {
            let span = phrase.len() as f64;
            for word in phrase {
                *freq.entry(word.as_str()).or_insert(0.0) += 1.0;
                // A word's degree grows with every co-occurring word in its window
                *degree.entry(word.as_str()).or_insert(0.0) += span;
            }
        }

        // Phrase score = sum of constituent degree/frequency ratios
        let mut scored: FxHashMap<String, f64> = FxHashMap::default();
        for phrase in &phrases {
            let score: f64 = phrase
                .iter()
                .map(|w| degree[w.as_str()] / freq[w.as_str()])
                .sum();
            scored.entry(phrase.join(" ")).or_insert(score);
        }

        let mut candidates: Vec<KeywordCandidate> = scored
            .into_iter()
            .map(|(text, score)| KeywordCandidate {
                stem: fold_term(&text),
                text,
                score,
            })
            .collect();

        // Descending score, ties alphabetical for determinism
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.text.cmp(&b.text))
        });
        candidates.truncate(self.max_candidates);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
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

    fn source() -> CooccurrenceSource {
        CooccurrenceSource::new(StopwordFilter::new("en"), 20)
    }

    #[test]
    fn test_stopwords_split_phrases() {
        let runs = source().phrase_runs(&[
            "deep".into(),
            "learning".into(),
            "is".into(),
            "a".into(),
            "powerful".into(),
            "technique".into(),
        ]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec!["deep", "learning"]);
        assert_eq!(runs[1], vec!["powerful", "technique"]);
    }

    #[test]
    fn test_multiword_phrases_outrank_unigrams() {
        let document = doc(&[
            "gradient descent minimizes the loss function",
            "gradient descent updates the model weights",
            "training requires patience",
        ]);

        let candidates = source().candidates(&document);
        let best = &candidates[0];
        assert!(best.text.contains(' '), "expected a phrase, got {:?}", best.text);
    }

    #[test]
    fn test_repeated_phrase_scores_high() {
        // Fixed stopword list so the run boundaries are under the test's
        // control rather than the built-in list's
        let stopwords = StopwordFilter::from_list(&["from", "need", "much"]);
        let document = doc(&[
            "neural networks learn from data",
            "neural networks need much data",
        ]);

        let candidates = CooccurrenceSource::new(stopwords, 20).candidates(&document);
        let nn = candidates
            .iter()
            .find(|c| c.text == "neural networks")
            .expect("phrase extracted");
        // Runs: [neural networks learn], [data], [neural networks], [data].
        // neural/networks: freq 2, degree 5; learn: freq 1, degree 3.
        // Phrase "neural networks" scores 5/2 + 5/2 = 5.
        assert!((nn.score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_phrase_length_cap() {
        let tokens: Vec<String> = (0..8).map(|i| format!("word{i}")).collect();
        let runs = source().phrase_runs(&tokens);
        assert!(runs.iter().all(|r| r.len() <= MAX_PHRASE_WORDS));
        assert_eq!(runs.iter().map(|r| r.len()).sum::<usize>(), 8);
    }

    #[test]
    fn test_stopword_only_document_yields_nothing() {
        let document = doc(&["it is the of and", "a an the of to"]);
        assert!(source().candidates(&document).is_empty());
    }
}
