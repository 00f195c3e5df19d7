//! Error types for the analysis pipeline.
//!
//! Only truly empty input or an invalid configuration is fatal. Everything
//! else (fewer topics than requested, no keyword candidates, documents
//! shorter than the summary bounds) degrades stage-locally to a reduced
//! result and is reported through `tracing::warn!` instead of an error.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can surface from a pipeline invocation
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The document contained zero sentences. No partial result exists.
    #[error("document contains no sentences")]
    EmptyDocument,

    /// A stage received zero sentences where at least one is required.
    #[error("insufficient text for {stage}: {reason}")]
    InsufficientText {
        /// The stage that rejected the input
        stage: &'static str,
        /// Human-readable explanation
        reason: String,
    },

    /// The configuration record failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AnalysisError {
    /// Convenience constructor for configuration errors
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Convenience constructor for insufficient-text errors
    pub fn insufficient_text(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::InsufficientText {
            stage,
            reason: reason.into(),
        }
    }
}
