//! Term vocabulary with interning and document-frequency statistics.
//!
//! Interning stores each unique term once and hands out dense `u32` ids, so
//! sparse vectors and centroids compare ids instead of allocating strings.
//! Ids are assigned in first-occurrence order, which keeps every downstream
//! artifact deterministic for identical input.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Interned term table plus per-term document frequency.
///
/// "Document" here means one sentence: the weighter treats each sentence as
/// a mini-document when computing rarity.
#[derive(Debug, Default)]
pub struct Vocabulary {
    /// Maps terms to their interned ids
    term_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps ids back to terms
    id_to_term: Vec<Arc<str>>,
    /// Number of sentences each term occurs in, indexed by id
    doc_freq: Vec<u32>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            term_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_term: Vec::with_capacity(capacity),
            doc_freq: Vec::with_capacity(capacity),
        }
    }

    /// Intern a term, returning its id
    pub fn intern(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.term_to_id.get(term) {
            return id;
        }

        let id = self.id_to_term.len() as u32;
        let arc: Arc<str> = term.into();
        self.term_to_id.insert(arc.clone(), id);
        self.id_to_term.push(arc);
        self.doc_freq.push(0);
        id
    }

    /// Look up a term's id without interning
    pub fn id_of(&self, term: &str) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    /// Get the term for an id
    pub fn term(&self, id: u32) -> Option<&str> {
        self.id_to_term.get(id as usize).map(|s| s.as_ref())
    }

    /// Record that a term occurred in one more sentence
    pub fn bump_doc_freq(&mut self, id: u32) {
        if let Some(df) = self.doc_freq.get_mut(id as usize) {
            *df += 1;
        }
    }

    /// Document frequency for a term id
    pub fn doc_freq(&self, id: u32) -> u32 {
        self.doc_freq.get(id as usize).copied().unwrap_or(0)
    }

    /// Smoothed inverse document frequency for a term id.
    ///
    /// `ln((1 + n) / (1 + df)) + 1` — the smoothed form, so a term present
    /// in every sentence still carries weight 1 rather than zero and a
    /// single-sentence document produces valid (degenerate) vectors.
    pub fn idf(&self, id: u32, num_sentences: usize) -> f64 {
        let df = self.doc_freq(id) as f64;
        ((1.0 + num_sentences as f64) / (1.0 + df)).ln() + 1.0
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.id_to_term.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_term.is_empty()
    }
}
