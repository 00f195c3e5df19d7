//! Sentence-similarity graph
//!
//! This module builds the sparse undirected graph the ranker iterates over:
//! nodes are sentence indices, edges are cosine similarities above a
//! threshold.

pub mod builder;
pub mod csr;
