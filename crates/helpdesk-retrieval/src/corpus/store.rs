//! Immutable, ordered template corpus with read-only views.

use std::collections::HashSet;

use helpdesk_core::errors::CorpusError;
use helpdesk_core::models::TemplateRecord;

/// Ordered template records. Validated once at construction, never mutated.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    records: Vec<TemplateRecord>,
}

impl CorpusStore {
    /// Fails on an empty corpus or on any record with a blank required field.
    pub fn new(records: Vec<TemplateRecord>) -> Result<Self, CorpusError> {
        if records.is_empty() {
            return Err(CorpusError::Empty);
        }
        for (row, record) in records.iter().enumerate() {
            record.validate(row)?;
        }
        Ok(Self { records })
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn record_at(&self, index: usize) -> Result<&TemplateRecord, CorpusError> {
        self.records.get(index).ok_or(CorpusError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn records(&self) -> &[TemplateRecord] {
        &self.records
    }

    /// Distinct intents in first-occurrence order.
    pub fn unique_intents(&self) -> Vec<&str> {
        unique_in_order(self.records.iter().map(|r| r.intent.as_str()))
    }

    /// Distinct categories in first-occurrence order.
    pub fn unique_categories(&self) -> Vec<&str> {
        unique_in_order(self.records.iter().map(|r| r.category.as_str()))
    }

    /// Records whose intent equals `intent` exactly (case-sensitive), in corpus order.
    pub fn records_for_intent(&self, intent: &str) -> Vec<&TemplateRecord> {
        self.records.iter().filter(|r| r.intent == intent).collect()
    }

    /// `flags + " " + instruction` per record, in corpus order.
    pub fn document_texts(&self) -> Vec<String> {
        self.records.iter().map(TemplateRecord::document_text).collect()
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
