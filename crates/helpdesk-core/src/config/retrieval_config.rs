//! Lookup-time configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Matches below this confidence are logged as weak. Never filters results.
    /// Default: 0.0 (nothing is logged).
    pub min_confidence: Option<f64>,
}

impl RetrievalConfig {
    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(0.0)
    }
}
