//! # helpdesk-core
//!
//! Foundation crate for the helpdesk template matcher.
//! Defines the record and result types, traits, errors, config, tracing setup,
//! and the pinned constants every other crate relies on.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HelpdeskConfig;
pub use errors::{HelpdeskError, HelpdeskResult};
pub use models::{HealthReport, HealthStatus, MatchResult, PredictionResult, TemplateRecord};
