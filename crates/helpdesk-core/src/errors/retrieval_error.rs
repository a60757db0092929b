//! Retrieval errors.

use super::error_code::{self, HelpdeskErrorCode};

/// Errors raised by the similarity index and prediction path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("no templates found for intent: {intent}")]
    NotFound { intent: String },
}

impl RetrievalError {
    pub fn not_ready() -> Self {
        Self::InvalidState {
            reason: "model has not been trained".to_string(),
        }
    }
}

impl HelpdeskErrorCode for RetrievalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => error_code::INVALID_STATE,
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::NotFound { .. } => error_code::NOT_FOUND,
        }
    }
}
