//! Configuration system for helpdesk.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod corpus_config;
pub mod helpdesk_config;
pub mod retrieval_config;
pub mod vectorizer_config;

pub use corpus_config::CorpusConfig;
pub use helpdesk_config::HelpdeskConfig;
pub use retrieval_config::RetrievalConfig;
pub use vectorizer_config::VectorizerConfig;
