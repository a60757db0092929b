use serde::{Deserialize, Serialize};

/// Result of `predict`, handed to the request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub intent: String,
    pub category: String,
    /// Canned response with the order number substituted, if one was given.
    pub response: String,
    /// Cosine similarity of the best match, in `[0, 1]`.
    pub confidence: f64,
    pub template_flags: String,
}

impl PredictionResult {
    /// Whether the confidence reaches a caller-chosen threshold.
    pub fn meets(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}
