//! Data models shared between the retrieval engine and its callers.

pub mod health_report;
pub mod match_result;
pub mod prediction_result;
pub mod template_record;

pub use health_report::{HealthReport, HealthStatus};
pub use match_result::MatchResult;
pub use prediction_result::PredictionResult;
pub use template_record::TemplateRecord;
