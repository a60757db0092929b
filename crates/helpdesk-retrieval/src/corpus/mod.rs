//! Corpus store and the sources it is loaded from.

pub mod loader;
pub mod store;

pub use loader::{load_corpus, sample_records, JsonFileSource, SampleSource};
pub use store::CorpusStore;
