use crate::errors::HelpdeskResult;
use crate::models::MatchResult;

/// Nearest-template lookup over a fitted corpus.
///
/// Implementations are read-only after fitting and safe to share across threads.
pub trait ITemplateMatcher: Send + Sync {
    /// Return the single best match for `query`.
    fn best_match(&self, query: &str) -> HelpdeskResult<MatchResult>;

    /// Number of documents the matcher was fitted on.
    fn document_count(&self) -> usize;

    /// Human-readable matcher name.
    fn name(&self) -> &str;
}
