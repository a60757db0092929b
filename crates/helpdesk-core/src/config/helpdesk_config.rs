//! Top-level helpdesk configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CorpusConfig, RetrievalConfig, VectorizerConfig};
use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX, MAX_NGRAM};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`HELPDESK_*`)
/// 2. Project config (`helpdesk.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HelpdeskConfig {
    pub corpus: CorpusConfig,
    pub vectorizer: VectorizerConfig,
    pub retrieval: RetrievalConfig,
}

impl HelpdeskConfig {
    /// Load configuration from `root/helpdesk.toml` and the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Same as [`HelpdeskConfig::load`] with an injectable environment lookup.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, env)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &HelpdeskConfig) -> Result<(), ConfigError> {
        if let Some(max_features) = config.vectorizer.max_features {
            if max_features == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "vectorizer.max_features".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        let (min_n, max_n) = config.vectorizer.effective_ngram_range();
        if min_n == 0 || min_n > max_n || max_n > MAX_NGRAM {
            return Err(ConfigError::ValidationFailed {
                field: "vectorizer.ngram_min/ngram_max".to_string(),
                message: format!("must satisfy 1 <= ngram_min <= ngram_max <= {MAX_NGRAM}"),
            });
        }
        if let Some(threshold) = config.retrieval.min_confidence {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "retrieval.min_confidence".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut HelpdeskConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: HelpdeskConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut HelpdeskConfig, other: &HelpdeskConfig) {
        // Corpus
        if other.corpus.path.is_some() {
            base.corpus.path = other.corpus.path.clone();
        }
        if other.corpus.fallback_to_sample.is_some() {
            base.corpus.fallback_to_sample = other.corpus.fallback_to_sample;
        }
        if other.corpus.persist_sample.is_some() {
            base.corpus.persist_sample = other.corpus.persist_sample;
        }

        // Vectorizer
        if other.vectorizer.max_features.is_some() {
            base.vectorizer.max_features = other.vectorizer.max_features;
        }
        if other.vectorizer.ngram_min.is_some() {
            base.vectorizer.ngram_min = other.vectorizer.ngram_min;
        }
        if other.vectorizer.ngram_max.is_some() {
            base.vectorizer.ngram_max = other.vectorizer.ngram_max;
        }
        if other.vectorizer.stop_words.is_some() {
            base.vectorizer.stop_words = other.vectorizer.stop_words;
        }

        // Retrieval
        if other.retrieval.min_confidence.is_some() {
            base.retrieval.min_confidence = other.retrieval.min_confidence;
        }
    }

    fn apply_env_overrides<F>(config: &mut HelpdeskConfig, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| env(&format!("{ENV_PREFIX}{name}"));

        if let Some(path) = var("CORPUS_PATH") {
            config.corpus.path = Some(path);
        }
        if let Some(v) = var("FALLBACK_TO_SAMPLE") {
            config.corpus.fallback_to_sample = Some(parse_env("FALLBACK_TO_SAMPLE", &v)?);
        }
        if let Some(v) = var("PERSIST_SAMPLE") {
            config.corpus.persist_sample = Some(parse_env("PERSIST_SAMPLE", &v)?);
        }
        if let Some(v) = var("MAX_FEATURES") {
            config.vectorizer.max_features = Some(parse_env("MAX_FEATURES", &v)?);
        }
        if let Some(v) = var("MIN_CONFIDENCE") {
            config.retrieval.min_confidence = Some(parse_env("MIN_CONFIDENCE", &v)?);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ValidationFailed {
            field: format!("{ENV_PREFIX}{name}"),
            message: format!("cannot parse '{value}'"),
        })
}
