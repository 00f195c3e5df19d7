//! Pipeline orchestration
//!
//! [`AnalysisPipeline`] wires the stages together: vectorize, build the
//! similarity graph and rank it, extract keywords (the graph and keyword
//! branches run on separate rayon workers), combine the importance
//! signals, then derive the summary, topics, and Q&A pairs from the shared
//! composite scores. The configuration is validated once at construction.

use crate::cluster::TopicClusterer;
use crate::config::PipelineConfig;
use crate::error::{AnalysisError, Result};
use crate::graph::builder::SimilarityGraphBuilder;
use crate::keywords::{
    CooccurrenceSource, KeywordAggregator, KeywordSource, SyntacticSource,
    SyntacticTagger, TermWeightSource,
};
use crate::nlp::stopwords::StopwordFilter;
use crate::qa::QAGenerator;
use crate::rank::pagerank::PageRank;
use crate::rank::signals;
use crate::summarize::Summarizer;
use crate::types::{DocumentStats, Keyword, PipelineResult, Sentence};
use crate::vectorize::{Document, TermWeighter};
use tracing::{info, warn};

/// The full analysis pipeline.
///
/// Stateless across invocations: each [`run`](Self::run) owns its document
/// and produces an independent [`PipelineResult`].
pub struct AnalysisPipeline<'a> {
    config: PipelineConfig,
    tagger: Option<&'a dyn SyntacticTagger>,
}

impl<'a> AnalysisPipeline<'a> {
    /// Create a pipeline, validating the configuration up front
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tagger: None,
        })
    }

    /// Attach a syntactic tagger collaborator, enabling the noun-phrase
    /// keyword source
    pub fn with_tagger(mut self, tagger: &'a dyn SyntacticTagger) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// The validated configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Analyze a pre-tokenized document.
    ///
    /// Fails only on empty input; every downstream degeneracy (sparse
    /// graphs, no keyword candidates, too few distinct vectors) reduces
    /// the corresponding section of the result instead.
    pub fn run(&self, sentences: Vec<Sentence>) -> Result<PipelineResult> {
        if sentences.is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }

        info!(sentences = sentences.len(), "starting analysis");

        let document = TermWeighter::from_config(&self.config).build(sentences)?;

        // The graph/rank branch and the keyword branch are independent
        // until signal combination
        let (rank, keywords) = rayon::join(
            || {
                let graph = SimilarityGraphBuilder::new(self.config.similarity_threshold)
                    .build(&document.vectors);
                PageRank::from_config(&self.config).run(&graph)
            },
            || self.extract_keywords(&document),
        );

        if !rank.converged {
            warn!(
                iterations = rank.iterations,
                delta = rank.delta,
                "pagerank hit the iteration cap"
            );
        }

        let position = signals::position_scores(&document.sentences, &self.config.position);
        let term_weight = document.term_weight_sums();
        let composite = signals::combine(
            &rank.scores,
            &term_weight,
            &position,
            &self.config.signal_weights,
        );

        let summarizer = Summarizer::from_config(&self.config);
        let summary = summarizer.summary(&document.sentences, &composite)?;
        let key_points = summarizer.key_points(&document.sentences, &composite)?;

        let topics = TopicClusterer::from_config(&self.config)
            .cluster(&document, &composite, &keywords);

        let qa_pairs = QAGenerator::from_config(&self.config)
            .generate(&document, &composite, &keywords);

        let stats = DocumentStats {
            num_sentences: document.len(),
            num_tokens: document.num_tokens(),
            num_terms: document.vocabulary.len(),
            num_keywords: keywords.len(),
            num_topics: topics.len(),
            num_questions: qa_pairs.len(),
        };

        info!(
            summary = summary.len(),
            keywords = stats.num_keywords,
            topics = stats.num_topics,
            questions = stats.num_questions,
            "analysis finished"
        );

        Ok(PipelineResult {
            summary,
            key_points,
            keywords,
            topics,
            qa_pairs,
            composite_scores: composite,
            stats,
        })
    }

    /// Run every active keyword source and merge the candidates
    fn extract_keywords(&self, document: &Document) -> Vec<Keyword> {
        // Sources over-generate; the aggregator trims to top_n after merging
        let per_source = self.config.top_n_keywords.max(1) * 2;

        let mut stopwords = StopwordFilter::new(&self.config.language);
        stopwords.add_words(&self.config.stopwords);

        let term = TermWeightSource::new(per_source);
        let cooc = CooccurrenceSource::new(stopwords, per_source);
        let syntactic = self
            .tagger
            .map(|tagger| SyntacticSource::new(tagger, per_source));

        let mut sources: Vec<&dyn KeywordSource> = vec![&term, &cooc];
        if let Some(source) = &syntactic {
            sources.push(source);
        }

        KeywordAggregator::new(self.config.top_n_keywords).aggregate(&sources, document)
    }
}
