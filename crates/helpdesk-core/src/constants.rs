/// Helpdesk system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder token replaced by the caller-supplied order number.
pub const ORDER_NUMBER_PLACEHOLDER: &str = "{{Order Number}}";

/// Default vocabulary cap for the TF-IDF vectorizer.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Default n-gram range (inclusive): unigrams and bigrams.
pub const DEFAULT_NGRAM_MIN: usize = 1;
pub const DEFAULT_NGRAM_MAX: usize = 2;

/// Upper bound accepted for `ngram_max`.
pub const MAX_NGRAM: usize = 5;

/// Token pattern: runs of two or more word characters.
pub const TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Tokenizer rule version. Bump whenever `TOKEN_PATTERN` or normalization changes.
pub const TOKENIZER_VERSION: u32 = 1;

/// Stop-word list version. Bump whenever the English stop-word set changes.
pub const STOP_WORDS_VERSION: u32 = 1;

/// Default corpus file, relative to the working directory.
pub const DEFAULT_CORPUS_PATH: &str = "customer_service_data.json";

/// Default project config file name.
pub const CONFIG_FILE_NAME: &str = "helpdesk.toml";

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "HELPDESK_";
