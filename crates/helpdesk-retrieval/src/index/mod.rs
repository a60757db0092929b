//! Similarity index: one-time fit over the corpus, top-1 cosine lookup.

pub mod fitted;
pub mod matrix;

pub use fitted::FittedIndex;
pub use matrix::DocumentMatrix;

use std::sync::OnceLock;

use helpdesk_core::config::VectorizerConfig;
use helpdesk_core::errors::{HelpdeskResult, RetrievalError};
use helpdesk_core::models::MatchResult;
use helpdesk_core::traits::ITemplateMatcher;
use tracing::info;

use crate::corpus::CorpusStore;

/// Index with an explicit ready state.
///
/// Starts unfitted; [`SimilarityIndex::fit`] runs exactly once and every later
/// lookup reads the same [`FittedIndex`]. Lookups before fit fail with
/// `InvalidState`. No API mutates the index after fit.
#[derive(Debug, Default)]
pub struct SimilarityIndex {
    fitted: OnceLock<FittedIndex>,
    config: VectorizerConfig,
}

impl SimilarityIndex {
    pub fn new(config: VectorizerConfig) -> Self {
        Self {
            fitted: OnceLock::new(),
            config,
        }
    }

    /// Fit over `corpus`. Later calls return the already fitted index untouched.
    pub fn fit(&self, corpus: &CorpusStore) -> HelpdeskResult<&FittedIndex> {
        if let Some(fitted) = self.fitted.get() {
            return Ok(fitted);
        }
        let fitted = FittedIndex::fit(corpus, &self.config)?;
        info!(
            documents = fitted.document_count(),
            vocabulary = fitted.vocabulary_len(),
            "similarity index ready"
        );
        // A concurrent fit may have won the race; both saw the same corpus.
        Ok(self.fitted.get_or_init(|| fitted))
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.get().is_some()
    }

    pub fn fitted(&self) -> HelpdeskResult<&FittedIndex> {
        self.fitted
            .get()
            .ok_or_else(|| RetrievalError::not_ready().into())
    }
}

impl ITemplateMatcher for SimilarityIndex {
    fn best_match(&self, query: &str) -> HelpdeskResult<MatchResult> {
        Ok(self.fitted()?.best_match(query))
    }

    fn document_count(&self) -> usize {
        self.fitted.get().map_or(0, FittedIndex::document_count)
    }

    fn name(&self) -> &str {
        "tfidf-cosine"
    }
}
