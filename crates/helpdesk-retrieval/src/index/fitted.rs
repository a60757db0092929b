//! Fitted vectorizer plus document matrix; top-1 cosine lookup.

use helpdesk_core::config::VectorizerConfig;
use helpdesk_core::errors::HelpdeskResult;
use helpdesk_core::models::MatchResult;
use helpdesk_core::traits::ITemplateMatcher;
use tracing::trace;

use super::matrix::{argmax_first, DocumentMatrix};
use crate::corpus::CorpusStore;
use crate::vectorizer::{FittedVectorizer, SparseVector, TfidfVectorizer};

/// Fitted vectorizer plus the document matrix it produced.
#[derive(Debug, Clone)]
pub struct FittedIndex {
    vectorizer: FittedVectorizer,
    matrix: DocumentMatrix,
}

impl FittedIndex {
    /// Fit over `flags + " " + instruction` of every record in corpus order.
    pub fn fit(corpus: &CorpusStore, config: &VectorizerConfig) -> HelpdeskResult<Self> {
        let documents = corpus.document_texts();
        let (vectorizer, rows) = TfidfVectorizer::new(config)?.fit_transform(&documents)?;
        let matrix = DocumentMatrix::new(rows, vectorizer.vocabulary_len());
        Ok(Self { vectorizer, matrix })
    }

    /// Query vector in the fitted space, L2-normalized.
    pub fn vectorize(&self, query: &str) -> SparseVector {
        self.vectorizer.transform(query)
    }

    /// Highest-cosine row for `query`; lowest index wins ties.
    /// A query with no known terms scores 0.0 against everything and maps to index 0.
    pub fn best_match(&self, query: &str) -> MatchResult {
        let query_vector = self.vectorize(query);
        if query_vector.is_zero() {
            trace!("query has no vocabulary terms");
            return MatchResult::zero();
        }
        let scores = self.matrix.scores(&query_vector);
        match argmax_first(&scores) {
            Some((index, score)) => MatchResult {
                index,
                score: score.clamp(0.0, 1.0),
            },
            None => MatchResult::zero(),
        }
    }

    pub fn document_count(&self) -> usize {
        self.matrix.row_count()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }

    pub fn vectorizer(&self) -> &FittedVectorizer {
        &self.vectorizer
    }

    pub fn matrix(&self) -> &DocumentMatrix {
        &self.matrix
    }
}

impl ITemplateMatcher for FittedIndex {
    fn best_match(&self, query: &str) -> HelpdeskResult<MatchResult> {
        Ok(FittedIndex::best_match(self, query))
    }

    fn document_count(&self) -> usize {
        FittedIndex::document_count(self)
    }

    fn name(&self) -> &str {
        "tfidf-cosine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::models::TemplateRecord;

    fn corpus() -> CorpusStore {
        CorpusStore::new(vec![
            TemplateRecord::new(
                "password reset",
                "How to reset password",
                "account",
                "password_reset",
                "Click Forgot Password",
            ),
            TemplateRecord::new(
                "business hours",
                "Working hours question",
                "general",
                "hours_inquiry",
                "Open Mon-Fri 9-5",
            ),
        ])
        .unwrap()
    }

    fn index() -> FittedIndex {
        FittedIndex::fit(&corpus(), &VectorizerConfig::default()).unwrap()
    }

    #[test]
    fn matches_password_query() {
        let m = index().best_match("I forgot my password");
        assert_eq!(m.index, 0);
        assert!(m.score > 0.0 && m.score <= 1.0);
    }

    #[test]
    fn matches_hours_query() {
        assert_eq!(index().best_match("what are your opening hours").index, 1);
    }

    #[test]
    fn stop_word_query_is_degenerate() {
        assert_eq!(index().best_match("the a an"), MatchResult::zero());
    }

    #[test]
    fn document_text_matches_itself() {
        let index = index();
        let m = index.best_match("business hours Working hours question");
        assert_eq!(m.index, 1);
        assert!((m.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn matrix_is_row_aligned() {
        let index = index();
        assert_eq!(index.document_count(), 2);
        assert_eq!(index.matrix().columns(), index.vocabulary_len());
    }
}
