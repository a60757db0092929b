//! Corpus loading and access errors.

use super::error_code::{self, HelpdeskErrorCode};

/// Errors that can occur while loading, validating, or reading the corpus.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus is empty")]
    Empty,

    #[error("record {row} is missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("record index {index} out of range for corpus of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read corpus {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse corpus {path}: {message}")]
    Parse { path: String, message: String },
}

impl HelpdeskErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => error_code::INDEX_ERROR,
            // No usable corpus means no index can be fitted.
            Self::Empty | Self::MissingField { .. } => error_code::INVALID_STATE,
            Self::Io { .. } | Self::Parse { .. } => error_code::CORPUS_ERROR,
        }
    }
}
