//! Corpus source configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CORPUS_PATH;

/// Where the template corpus comes from and what to do when it can't be read.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to a JSON array of template records. Default: `customer_service_data.json`.
    pub path: Option<String>,
    /// Use the built-in sample corpus when the file can't be loaded. Default: true.
    pub fallback_to_sample: Option<bool>,
    /// Write the sample corpus to `path` after falling back. Default: false.
    pub persist_sample: Option<bool>,
}

impl CorpusConfig {
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_CORPUS_PATH)
    }

    pub fn effective_fallback_to_sample(&self) -> bool {
        self.fallback_to_sample.unwrap_or(true)
    }

    pub fn effective_persist_sample(&self) -> bool {
        self.persist_sample.unwrap_or(false)
    }
}
