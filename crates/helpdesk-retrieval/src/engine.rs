//! HelpdeskEngine: owns the corpus and the similarity index, serves predictions.
//!
//! Two-phase lifecycle: construct (validate corpus) → train (fit once).
//! Only after training do predictions succeed; the engine is then read-only and
//! can be shared across threads behind an `Arc` without locking.

use helpdesk_core::config::HelpdeskConfig;
use helpdesk_core::errors::{HelpdeskResult, RetrievalError};
use helpdesk_core::models::{HealthReport, MatchResult, PredictionResult, TemplateRecord};
use helpdesk_core::traits::{ICorpusSource, ITemplateMatcher};
use tracing::{debug, info, info_span, warn};

use crate::corpus::{load_corpus, CorpusStore};
use crate::index::SimilarityIndex;
use crate::response::substitute_placeholder;

pub struct HelpdeskEngine {
    corpus: CorpusStore,
    index: SimilarityIndex,
    config: HelpdeskConfig,
}

impl HelpdeskEngine {
    /// Validate `config` and `records`. The engine is not ready until [`train`](Self::train).
    ///
    /// An empty corpus or a record with a missing field is `InvalidState`:
    /// no index can ever be fitted from it.
    pub fn new(records: Vec<TemplateRecord>, config: HelpdeskConfig) -> HelpdeskResult<Self> {
        HelpdeskConfig::validate(&config)?;
        let corpus = CorpusStore::new(records).map_err(|e| RetrievalError::InvalidState {
            reason: format!("cannot fit index: {e}"),
        })?;
        let index = SimilarityIndex::new(config.vectorizer.clone());
        Ok(Self {
            corpus,
            index,
            config,
        })
    }

    /// `new` followed by `train`.
    pub fn build(records: Vec<TemplateRecord>, config: HelpdeskConfig) -> HelpdeskResult<Self> {
        let engine = Self::new(records, config)?;
        engine.train()?;
        Ok(engine)
    }

    /// Build from any corpus source.
    pub fn from_source(source: &dyn ICorpusSource, config: HelpdeskConfig) -> HelpdeskResult<Self> {
        let records = source.load()?;
        info!(source = %source.describe(), records = records.len(), "building engine");
        Self::build(records, config)
    }

    /// Build from the corpus configured in `config.corpus`, with sample fallback.
    pub fn from_config(config: HelpdeskConfig) -> HelpdeskResult<Self> {
        let records = load_corpus(&config.corpus)?;
        Self::build(records, config)
    }

    /// Fit the index. Runs once; later calls are no-ops.
    pub fn train(&self) -> HelpdeskResult<()> {
        let _span = info_span!("train", templates = self.corpus.size()).entered();
        self.index.fit(&self.corpus)?;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.index.is_fitted()
    }

    /// Top-1 match for `query` without response assembly.
    pub fn best_match(&self, query: &str) -> HelpdeskResult<MatchResult> {
        self.index.best_match(query)
    }

    /// Match `query` to a template and assemble its response.
    pub fn predict(
        &self,
        query: &str,
        order_number: Option<&str>,
    ) -> HelpdeskResult<PredictionResult> {
        if !self.is_ready() {
            return Err(RetrievalError::not_ready().into());
        }
        if query.trim().is_empty() {
            return Err(RetrievalError::InvalidArgument {
                reason: "query must not be empty".to_string(),
            }
            .into());
        }

        let matched = self.index.best_match(query)?;
        let record = self.corpus.record_at(matched.index)?;

        let min_confidence = self.config.retrieval.effective_min_confidence();
        if matched.score < min_confidence {
            warn!(
                score = matched.score,
                min_confidence,
                intent = %record.intent,
                "low-confidence match"
            );
        } else {
            debug!(score = matched.score, intent = %record.intent, "matched template");
        }

        Ok(PredictionResult {
            intent: record.intent.clone(),
            category: record.category.clone(),
            response: substitute_placeholder(&record.response, order_number),
            confidence: matched.score,
            template_flags: record.flags.clone(),
        })
    }

    /// Distinct intents in first-occurrence order.
    pub fn list_intents(&self) -> Vec<String> {
        self.corpus
            .unique_intents()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct categories in first-occurrence order.
    pub fn list_categories(&self) -> Vec<String> {
        self.corpus
            .unique_categories()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Every template for `intent`, in corpus order. `NotFound` if there are none.
    pub fn templates_for_intent(&self, intent: &str) -> HelpdeskResult<Vec<TemplateRecord>> {
        let templates: Vec<TemplateRecord> = self
            .corpus
            .records_for_intent(intent)
            .into_iter()
            .cloned()
            .collect();
        if templates.is_empty() {
            return Err(RetrievalError::NotFound {
                intent: intent.to_string(),
            }
            .into());
        }
        Ok(templates)
    }

    pub fn health(&self) -> HealthReport {
        HealthReport::new(self.is_ready(), self.corpus.size())
    }

    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }

    pub fn config(&self) -> &HelpdeskConfig {
        &self.config
    }
}
