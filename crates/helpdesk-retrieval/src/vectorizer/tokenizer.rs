//! Word n-gram analyzer: lowercase, regex tokens, stop-word removal, n-grams.

use std::sync::LazyLock;

use helpdesk_core::config::VectorizerConfig;
use helpdesk_core::constants::TOKEN_PATTERN;
use helpdesk_core::errors::RetrievalError;
use regex::Regex;

use super::stop_words::is_stop_word;

static TOKEN_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(TOKEN_PATTERN).ok());

/// Turns raw text into the n-gram terms the vectorizer counts.
///
/// Stop words are removed before n-grams are formed, so a bigram may join two
/// words that were separated by a stop word in the original text.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    remove_stop_words: bool,
    ngram_min: usize,
    ngram_max: usize,
}

impl Tokenizer {
    pub fn new(config: &VectorizerConfig) -> Result<Self, RetrievalError> {
        let pattern = TOKEN_REGEX
            .as_ref()
            .cloned()
            .ok_or_else(|| RetrievalError::InvalidState {
                reason: format!("token pattern {TOKEN_PATTERN} failed to compile"),
            })?;
        let (ngram_min, ngram_max) = config.effective_ngram_range();
        if ngram_min == 0 || ngram_min > ngram_max {
            return Err(RetrievalError::InvalidArgument {
                reason: format!("invalid n-gram range ({ngram_min}, {ngram_max})"),
            });
        }
        Ok(Self {
            pattern,
            remove_stop_words: config.effective_stop_words(),
            ngram_min,
            ngram_max,
        })
    }

    /// Lowercased word tokens with stop words removed.
    pub fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|w| !(self.remove_stop_words && is_stop_word(w)))
            .map(str::to_string)
            .collect()
    }

    /// All n-gram terms of `text`: every n in range, shortest first.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let words = self.words(text);
        let mut terms = Vec::new();
        for n in self.ngram_min..=self.ngram_max {
            if n > words.len() {
                break;
            }
            if n == 1 {
                terms.extend(words.iter().cloned());
            } else {
                terms.extend(words.windows(n).map(|w| w.join(" ")));
            }
        }
        terms
    }
}
