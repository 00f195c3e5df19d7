//! Topic label selection
//!
//! A topic is labeled by the best global keyword that actually occurs in
//! its member sentences; when none matches, the centroid's top term is
//! promoted to a label instead.

use crate::nlp::stem::fold_term;
use crate::types::{Keyword, Sentence};
use crate::vectorize::vector::SparseVector;
use crate::vectorize::vocab::Vocabulary;

/// Pick the label for one cluster.
///
/// `keywords` must be sorted by combined score descending, which the
/// aggregator guarantees.
pub fn label_topic(
    member_indices: &[usize],
    sentences: &[Sentence],
    keywords: &[Keyword],
    centroid: Option<&SparseVector>,
    vocabulary: &Vocabulary,
) -> Keyword {
    let folded: Vec<String> = member_indices
        .iter()
        .map(|&i| fold_term(&sentences[i].text))
        .collect();

    for keyword in keywords {
        if folded.iter().any(|text| text.contains(&keyword.stem)) {
            return keyword.clone();
        }
    }

    // No keyword occurs in this cluster: fall back to the centroid's
    // heaviest term
    if let Some(term) = centroid
        .and_then(SparseVector::top_term)
        .and_then(|id| vocabulary.term(id))
    {
        return plain_keyword(term);
    }

    // Degenerate cluster with no usable centroid: take the first content
    // token of the top-ranked member
    let token = member_indices
        .first()
        .and_then(|&i| {
            sentences[i]
                .tokens
                .iter()
                .find(|t| t.len() > 1 && t.chars().any(char::is_alphanumeric))
        })
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| "general".to_string());
    plain_keyword(&token)
}

/// A label-only keyword with no method provenance
fn plain_keyword(text: &str) -> Keyword {
    Keyword {
        text: text.to_string(),
        stem: fold_term(text),
        score: 0.0,
        method_scores: Vec::new(),
    }
}
