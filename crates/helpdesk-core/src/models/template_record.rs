use serde::{Deserialize, Serialize};

use crate::errors::CorpusError;

/// One canned support template. Identity is its position in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Short keyword flags describing the template.
    pub flags: String,
    /// Example customer instruction this template answers.
    pub instruction: String,
    pub category: String,
    pub intent: String,
    /// Canned response, may contain `{{Order Number}}`.
    pub response: String,
}

impl TemplateRecord {
    pub fn new(
        flags: impl Into<String>,
        instruction: impl Into<String>,
        category: impl Into<String>,
        intent: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            flags: flags.into(),
            instruction: instruction.into(),
            category: category.into(),
            intent: intent.into(),
            response: response.into(),
        }
    }

    /// The text the vectorizer is fitted on: `flags + " " + instruction`.
    pub fn document_text(&self) -> String {
        format!("{} {}", self.flags, self.instruction)
    }

    /// Check that every required field is non-empty.
    /// `row` is only used to label the error.
    pub fn validate(&self, row: usize) -> Result<(), CorpusError> {
        let fields: [(&'static str, &str); 5] = [
            ("flags", &self.flags),
            ("instruction", &self.instruction),
            ("category", &self.category),
            ("intent", &self.intent),
            ("response", &self.response),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(CorpusError::MissingField { row, field });
            }
        }
        Ok(())
    }
}
