//! TF-IDF vectorizer fitted once over the corpus documents.
//!
//! Term frequency is the raw count, IDF is smoothed
//! (`ln((1 + N) / (1 + df)) + 1`) and every vector is L2-normalized.
//! Vocabulary is capped at `max_features` terms by corpus-wide count; ties go
//! to the lexicographically smaller term, and feature indices are assigned in
//! lexicographic term order.

use std::collections::HashMap;

use helpdesk_core::config::VectorizerConfig;
use helpdesk_core::constants::{STOP_WORDS_VERSION, TOKENIZER_VERSION};
use helpdesk_core::errors::RetrievalError;
use rayon::prelude::*;
use tracing::debug;

use super::sparse::SparseVector;
use super::tokenizer::Tokenizer;

/// Unfitted vectorizer: tokenizer rules plus the vocabulary cap.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    max_features: usize,
}

/// Vocabulary and IDF weights learned from the corpus. Immutable.
#[derive(Debug, Clone)]
pub struct FittedVectorizer {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    tokenizer_version: u32,
    stop_words_version: u32,
}

impl TfidfVectorizer {
    pub fn new(config: &VectorizerConfig) -> Result<Self, RetrievalError> {
        Ok(Self {
            tokenizer: Tokenizer::new(config)?,
            max_features: config.effective_max_features(),
        })
    }

    /// Learn vocabulary and IDF from `documents` and return their normalized vectors,
    /// one per document in input order.
    pub fn fit_transform(
        &self,
        documents: &[String],
    ) -> Result<(FittedVectorizer, Vec<SparseVector>), RetrievalError> {
        if documents.is_empty() {
            return Err(RetrievalError::InvalidState {
                reason: "cannot fit vectorizer on an empty corpus".to_string(),
            });
        }

        let doc_counts: Vec<HashMap<String, usize>> = documents
            .par_iter()
            .map(|doc| term_counts(self.tokenizer.analyze(doc)))
            .collect();

        // Corpus-wide term frequency and document frequency.
        let mut total: HashMap<&str, usize> = HashMap::new();
        let mut df: HashMap<&str, usize> = HashMap::new();
        for counts in &doc_counts {
            for (term, &count) in counts {
                *total.entry(term.as_str()).or_insert(0) += count;
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if total.is_empty() {
            return Err(RetrievalError::InvalidState {
                reason: "empty vocabulary: documents contain only stop words".to_string(),
            });
        }

        let mut ranked: Vec<(&str, usize)> = total.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let candidates = ranked.len();
        ranked.truncate(self.max_features);

        let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        if kept.is_empty() {
            return Err(RetrievalError::InvalidState {
                reason: format!("empty vocabulary: max_features = {}", self.max_features),
            });
        }
        kept.sort_unstable();

        let n_docs = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(kept.len());
        let mut idf = Vec::with_capacity(kept.len());
        for (index, term) in kept.iter().enumerate() {
            let doc_freq = df.get(term).copied().unwrap_or(0) as f64;
            idf.push(((1.0 + n_docs) / (1.0 + doc_freq)).ln() + 1.0);
            vocabulary.insert((*term).to_string(), index);
        }

        debug!(
            documents = documents.len(),
            candidates,
            vocabulary = vocabulary.len(),
            tokenizer_version = TOKENIZER_VERSION,
            stop_words_version = STOP_WORDS_VERSION,
            "fitted tf-idf vocabulary"
        );

        let fitted = FittedVectorizer {
            tokenizer: self.tokenizer.clone(),
            vocabulary,
            idf,
            tokenizer_version: TOKENIZER_VERSION,
            stop_words_version: STOP_WORDS_VERSION,
        };
        let vectors = doc_counts
            .par_iter()
            .map(|counts| fitted.weigh(counts))
            .collect();

        Ok((fitted, vectors))
    }
}

impl FittedVectorizer {
    /// Project `text` into the fitted space. Unknown terms are dropped.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&term_counts(self.tokenizer.analyze(text)))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Tokenizer rule version the vocabulary was built with.
    pub fn tokenizer_version(&self) -> u32 {
        self.tokenizer_version
    }

    /// Stop-word list version the vocabulary was built with.
    pub fn stop_words_version(&self) -> u32 {
        self.stop_words_version
    }

    /// Feature index of `term`, if it made it into the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    /// Vocabulary terms in feature-index order.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<(&str, usize)> = self
            .vocabulary
            .iter()
            .map(|(t, &i)| (t.as_str(), i))
            .collect();
        terms.sort_by_key(|&(_, i)| i);
        terms.into_iter().map(|(t, _)| t).collect()
    }

    fn weigh(&self, counts: &HashMap<String, usize>) -> SparseVector {
        let pairs = counts
            .iter()
            .filter_map(|(term, &count)| {
                let index = *self.vocabulary.get(term)?;
                Some((index, count as f64 * self.idf[index]))
            })
            .collect();
        let mut vector = SparseVector::from_pairs(pairs);
        vector.l2_normalize();
        vector
    }
}

fn term_counts(terms: Vec<String>) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<String> {
        vec![
            "password reset How to reset password".to_string(),
            "business hours Working hours question".to_string(),
        ]
    }

    fn fit(max_features: Option<usize>) -> (FittedVectorizer, Vec<SparseVector>) {
        let config = VectorizerConfig {
            max_features,
            ..Default::default()
        };
        TfidfVectorizer::new(&config)
            .unwrap()
            .fit_transform(&docs())
            .unwrap()
    }

    #[test]
    fn vocabulary_is_lexicographic() {
        let (fitted, _) = fit(None);
        let terms = fitted.terms();
        let mut sorted = terms.clone();
        sorted.sort_unstable();
        assert_eq!(terms, sorted);
        assert!(terms.contains(&"password reset"));
        assert!(terms.contains(&"working hours"));
        assert!(!terms.contains(&"how"));
    }

    #[test]
    fn smoothed_idf() {
        let (fitted, _) = fit(None);
        // Term in one of two documents: ln(3 / 2) + 1.
        let expected = (3.0f64 / 2.0).ln() + 1.0;
        assert!((fitted.idf("password").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn max_features_keeps_most_frequent_with_lexicographic_ties() {
        // Counts: password 2, reset 2, hours 2; everything else 1.
        let (fitted, _) = fit(Some(2));
        assert_eq!(fitted.terms(), vec!["hours", "password"]);
    }

    #[test]
    fn document_vectors_are_unit_length() {
        let (_, vectors) = fit(None);
        assert_eq!(vectors.len(), 2);
        for v in &vectors {
            assert!((v.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn transform_drops_unknown_terms() {
        let (fitted, _) = fit(None);
        assert!(fitted.transform("completely unrelated gibberish").is_zero());
        let q = fitted.transform("I forgot my password");
        assert_eq!(q.nnz(), 1);
        assert_eq!(q.entries()[0].0, fitted.term_index("password").unwrap());
    }

    #[test]
    fn empty_corpus_is_invalid_state() {
        let v = TfidfVectorizer::new(&VectorizerConfig::default()).unwrap();
        assert!(matches!(
            v.fit_transform(&[]),
            Err(RetrievalError::InvalidState { .. })
        ));
    }

    #[test]
    fn zero_max_features_is_invalid_state() {
        let config = VectorizerConfig {
            max_features: Some(0),
            ..Default::default()
        };
        let v = TfidfVectorizer::new(&config).unwrap();
        assert!(matches!(
            v.fit_transform(&docs()),
            Err(RetrievalError::InvalidState { .. })
        ));
    }

    #[test]
    fn fitted_vectorizer_records_pinned_versions() {
        let (fitted, _) = fit(None);
        assert_eq!(fitted.tokenizer_version(), TOKENIZER_VERSION);
        assert_eq!(fitted.stop_words_version(), STOP_WORDS_VERSION);
    }

    #[test]
    fn stop_word_only_corpus_is_invalid_state() {
        let v = TfidfVectorizer::new(&VectorizerConfig::default()).unwrap();
        assert!(matches!(
            v.fit_transform(&["the a an".to_string()]),
            Err(RetrievalError::InvalidState { .. })
        ));
    }
}
