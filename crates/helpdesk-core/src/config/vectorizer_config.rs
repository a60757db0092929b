//! TF-IDF vectorizer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FEATURES, DEFAULT_NGRAM_MAX, DEFAULT_NGRAM_MIN};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Vocabulary cap by corpus term frequency. Default: 5000.
    pub max_features: Option<usize>,
    /// Smallest n-gram length. Default: 1.
    pub ngram_min: Option<usize>,
    /// Largest n-gram length. Default: 2.
    pub ngram_max: Option<usize>,
    /// Remove English stop words. Default: true.
    pub stop_words: Option<bool>,
}

impl VectorizerConfig {
    pub fn effective_max_features(&self) -> usize {
        self.max_features.unwrap_or(DEFAULT_MAX_FEATURES)
    }

    /// Inclusive n-gram range.
    pub fn effective_ngram_range(&self) -> (usize, usize) {
        (
            self.ngram_min.unwrap_or(DEFAULT_NGRAM_MIN),
            self.ngram_max.unwrap_or(DEFAULT_NGRAM_MAX),
        )
    }

    pub fn effective_stop_words(&self) -> bool {
        self.stop_words.unwrap_or(true)
    }
}
