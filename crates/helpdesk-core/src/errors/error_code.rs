//! HelpdeskErrorCode trait for boundary conversion.

/// Every error enum implements this to provide a structured error code string
/// the request boundary can map onto its own failure codes.
pub trait HelpdeskErrorCode {
    /// Returns the error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the request boundary.
pub const INVALID_STATE: &str = "INVALID_STATE";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INDEX_ERROR: &str = "INDEX_ERROR";
pub const CORPUS_ERROR: &str = "CORPUS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
