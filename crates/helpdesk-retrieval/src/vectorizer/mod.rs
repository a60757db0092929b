//! Text vectorization: pinned tokenizer, stop words, sparse vectors, TF-IDF fitting.

pub mod sparse;
pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;

pub use sparse::SparseVector;
pub use tfidf::{FittedVectorizer, TfidfVectorizer};
pub use tokenizer::Tokenizer;
