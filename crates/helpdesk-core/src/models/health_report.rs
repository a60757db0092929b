use serde::{Deserialize, Serialize};

use crate::constants::VERSION;

/// Health snapshot of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub model_loaded: bool,
    pub templates_count: usize,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthReport {
    pub fn new(model_loaded: bool, templates_count: usize) -> Self {
        let status = if model_loaded && templates_count > 0 {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        Self {
            status,
            model_loaded,
            templates_count,
            version: VERSION.to_string(),
        }
    }
}
