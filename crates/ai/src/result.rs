use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Result of an AI inference.
///
/// This is an insight for display, not a change to inventory state. Higher
/// layers may render or persist it as they see fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResult {
    /// Primary score for the inference (job-specific meaning).
    pub score: f64,

    /// Confidence in \[0, 1\] (recommended convention; not enforced).
    pub confidence: f64,

    /// Optional human-readable explanation.
    pub explanation: Option<String>,

    /// Free-form metadata (job kind, parameters, structured findings).
    pub metadata: JsonValue,
}

impl AiResult {
    pub fn new(score: f64, confidence: f64) -> Self {
        Self {
            score,
            confidence,
            explanation: None,
            metadata: JsonValue::Null,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error("invalid job input: {0}")]
    InvalidInput(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),

    /// The model answered, but not in the expected shape.
    #[error("unexpected model response: {0}")]
    UnexpectedResponse(String),

    /// The model endpoint could not be reached or returned an error status.
    #[error("model transport error: {0}")]
    Transport(String),

    #[error("internal error: {0}")]
    Internal(String),
}
