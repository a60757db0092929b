use crate::errors::HelpdeskResult;
use crate::models::TemplateRecord;

/// Supplies the template records the engine is built from.
pub trait ICorpusSource: Send + Sync {
    /// Load every usable record in corpus order.
    fn load(&self) -> HelpdeskResult<Vec<TemplateRecord>>;

    /// Human-readable description of where the records come from.
    fn describe(&self) -> String;
}
