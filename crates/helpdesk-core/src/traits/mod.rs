//! Seams between the engine and its collaborators.

pub mod corpus_source;
pub mod matcher;

pub use corpus_source::ICorpusSource;
pub use matcher::ITemplateMatcher;
