//! # helpdesk-retrieval
//!
//! The retrieval engine. Fits a TF-IDF vectorizer over a fixed corpus of canned
//! support templates once, then answers "most similar template" queries.
//!
//! ## Architecture
//!
//! ```text
//! HelpdeskEngine
//! ├── CorpusStore (ordered, immutable TemplateRecords)
//! │   └── Loader (JSON file → sample fallback)
//! ├── SimilarityIndex (ready flag, ITemplateMatcher)
//! │   └── FittedIndex
//! │       ├── FittedVectorizer (vocabulary + smoothed IDF)
//! │       │   └── Tokenizer (pinned regex, stop words, 1-2 grams)
//! │       └── DocumentMatrix (L2-normalized sparse rows)
//! └── Response assembly ({{Order Number}} substitution)
//! ```

pub mod corpus;
pub mod engine;
pub mod index;
pub mod response;
pub mod vectorizer;

pub use corpus::CorpusStore;
pub use engine::HelpdeskEngine;
pub use index::{FittedIndex, SimilarityIndex};
pub use response::substitute_placeholder;
pub use vectorizer::{FittedVectorizer, SparseVector, TfidfVectorizer, Tokenizer};
