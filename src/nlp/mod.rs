//! Language helpers
//!
//! This module provides stopword filtering and light morphological folding
//! used by term weighting, phrase extraction, and keyword deduplication.

pub mod stem;
pub mod stopwords;
