//! Corpus sources: a JSON file of records, or the built-in sample.

use std::path::{Path, PathBuf};

use helpdesk_core::config::CorpusConfig;
use helpdesk_core::errors::{CorpusError, HelpdeskResult};
use helpdesk_core::models::TemplateRecord;
use helpdesk_core::traits::ICorpusSource;
use serde::Deserialize;
use tracing::{info, warn};

/// Row as it appears on disk; any field may be missing or null.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    flags: Option<String>,
    #[serde(default)]
    instruction: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    intent: Option<String>,
    #[serde(default)]
    response: Option<String>,
}

impl RawRecord {
    /// A complete record, or `None` if any field is missing, null or empty.
    /// Whitespace-only values are kept, as a CSV reader would keep them.
    fn into_record(self) -> Option<TemplateRecord> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        Some(TemplateRecord {
            flags: present(self.flags)?,
            instruction: present(self.instruction)?,
            category: present(self.category)?,
            intent: present(self.intent)?,
            response: present(self.response)?,
        })
    }
}

/// Reads a JSON array of template records. Incomplete rows are dropped.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ICorpusSource for JsonFileSource {
    fn load(&self) -> HelpdeskResult<Vec<TemplateRecord>> {
        let path = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path).map_err(|e| CorpusError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let rows: Vec<RawRecord> =
            serde_json::from_str(&content).map_err(|e| CorpusError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let total = rows.len();
        let records: Vec<TemplateRecord> =
            rows.into_iter().filter_map(RawRecord::into_record).collect();
        let dropped = total - records.len();
        if dropped > 0 {
            warn!(path = %path, dropped, "dropped incomplete template rows");
        }
        info!(path = %path, records = records.len(), "loaded template corpus");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

/// The built-in two-template sample used when no corpus file is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl ICorpusSource for SampleSource {
    fn load(&self) -> HelpdeskResult<Vec<TemplateRecord>> {
        Ok(sample_records())
    }

    fn describe(&self) -> String {
        "builtin:sample".to_string()
    }
}

pub fn sample_records() -> Vec<TemplateRecord> {
    vec![
        TemplateRecord::new(
            "password reset",
            "How to reset password",
            "account",
            "password_reset",
            "You can reset your password by clicking on the \"Forgot Password\" link.",
        ),
        TemplateRecord::new(
            "business hours",
            "Working hours question",
            "general",
            "hours_inquiry",
            "We are open Monday-Friday, 9am-5pm.",
        ),
    ]
}

/// Load records from the configured file, falling back to the sample if allowed.
///
/// A file that loads but yields zero usable rows counts as a failure.
pub fn load_corpus(config: &CorpusConfig) -> HelpdeskResult<Vec<TemplateRecord>> {
    let source = JsonFileSource::new(config.effective_path());
    let outcome = source.load().and_then(|records| {
        if records.is_empty() {
            Err(CorpusError::Empty.into())
        } else {
            Ok(records)
        }
    });

    match outcome {
        Ok(records) => Ok(records),
        Err(e) if config.effective_fallback_to_sample() => {
            warn!(source = %source.describe(), error = %e, "falling back to sample corpus");
            let records = SampleSource.load()?;
            if config.effective_persist_sample() {
                persist_sample(source.path(), &records);
            }
            Ok(records)
        }
        Err(e) => Err(e),
    }
}

/// Best effort: a failed write is logged, the in-memory sample is still served.
fn persist_sample(path: &Path, records: &[TemplateRecord]) {
    let written = serde_json::to_string_pretty(records)
        .map_err(|e| e.to_string())
        .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
    match written {
        Ok(()) => info!(path = %path.display(), "sample corpus saved"),
        Err(error) => warn!(path = %path.display(), %error, "could not save sample corpus"),
    }
}
