use serde::{Deserialize, Serialize};

/// Top-1 lookup outcome: corpus ordinal and cosine similarity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub index: usize,
    pub score: f64,
}

impl MatchResult {
    /// The degenerate match returned for an all-zero query vector.
    pub const fn zero() -> Self {
        Self {
            index: 0,
            score: 0.0,
        }
    }
}
