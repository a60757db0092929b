//! Error handling for helpdesk.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod corpus_error;
pub mod error_code;
pub mod retrieval_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use error_code::HelpdeskErrorCode;
pub use retrieval_error::RetrievalError;

/// Top-level error aggregating every subsystem via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum HelpdeskError {
    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HelpdeskErrorCode for HelpdeskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Retrieval(e) => e.error_code(),
            Self::Corpus(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type HelpdeskResult<T> = Result<T, HelpdeskError>;
