//! Rule-based question generation
//!
//! Generates study questions whose answers are verbatim sentences from the
//! document. Pattern templates (definition, causal, enumeration) run first
//! over sentences in importance order; a keyword fallback fills any
//! remaining slots. Questions are deduplicated under case/whitespace
//! normalization.

pub mod templates;

use crate::config::PipelineConfig;
use crate::nlp::stem::fold_term;
use crate::rank::signals::rank_order;
use crate::types::{Keyword, QAPair, QaCategory};
use crate::vectorize::Document;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Generates Q&A pairs from ranked sentences and keywords
#[derive(Debug, Clone)]
pub struct QAGenerator {
    /// Target number of pairs
    num_questions: usize,
}

impl QAGenerator {
    /// Create a generator from the pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            num_questions: config.num_questions,
        }
    }

    /// Create a generator with an explicit target
    pub fn new(num_questions: usize) -> Self {
        Self { num_questions }
    }

    /// Generate up to `num_questions` pairs.
    ///
    /// Template passes run in fixed order and, within a pass, visit
    /// sentences by composite score descending, so the best material is
    /// questioned first. Fewer pairs than the target is a normal outcome
    /// for short or pattern-poor documents.
    pub fn generate(
        &self,
        document: &Document,
        composite: &[f64],
        keywords: &[Keyword],
    ) -> Vec<QAPair> {
        if self.num_questions == 0 || document.is_empty() {
            return Vec::new();
        }

        let order = rank_order(composite);
        let mut pairs: Vec<QAPair> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        let passes: [(QaCategory, fn(&str) -> Option<String>); 3] = [
            (QaCategory::Definition, templates::definition_question),
            (QaCategory::Causal, templates::causal_question),
            (QaCategory::Enumeration, templates::enumeration_question),
        ];

        'outer: for (category, template) in passes {
            for &i in &order {
                if pairs.len() >= self.num_questions {
                    break 'outer;
                }
                let sentence = &document.sentences[i];
                if let Some(question) = template(&sentence.text) {
                    push_unique(
                        &mut pairs,
                        &mut seen,
                        question,
                        sentence.text.clone(),
                        category,
                        sentence.index,
                    );
                }
            }
        }

        // Keyword fallback: ask about top keywords, answered by the
        // best-ranked sentence containing them
        if pairs.len() < self.num_questions && !keywords.is_empty() {
            let folded: Vec<String> = document
                .sentences
                .iter()
                .map(|s| fold_term(&s.text))
                .collect();

            for keyword in keywords {
                if pairs.len() >= self.num_questions {
                    break;
                }
                if let Some(&i) =
                    order.iter().find(|&&i| folded[i].contains(&keyword.stem))
                {
                    push_unique(
                        &mut pairs,
                        &mut seen,
                        templates::keyword_question(&keyword.text),
                        document.sentences[i].text.clone(),
                        QaCategory::Keyword,
                        document.sentences[i].index,
                    );
                }
            }
        }

        debug!(
            generated = pairs.len(),
            target = self.num_questions,
            "generated question/answer pairs"
        );
        pairs
    }
}

/// Append a pair unless its normalized question was already emitted
fn push_unique(
    pairs: &mut Vec<QAPair>,
    seen: &mut FxHashSet<String>,
    question: String,
    answer: String,
    category: QaCategory,
    sentence_index: usize,
) {
    if seen.insert(normalize_question(&question)) {
        pairs.push(QAPair {
            question,
            answer,
            category,
            sentence_index,
        });
    }
}

/// Dedup key: casefolded, trailing punctuation stripped, whitespace collapsed
fn normalize_question(question: &str) -> String {
    question
        .trim()
        .trim_end_matches(['?', '.', '!'])
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
