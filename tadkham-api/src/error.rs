//! API error types

use tadkham_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The dictionary could not be read from its source
    #[error("failed to load dictionary from {source_name}: {reason}")]
    DictionaryLoad {
        /// File path or a description of the source
        source_name: String,
        /// Underlying failure
        reason: String,
    },

    /// The dictionary is not in ascending order
    #[error("dictionary is not sorted: entry {index} ({word:?}) sorts before its predecessor")]
    UnsortedDictionary {
        /// Index of the first out-of-order entry
        index: usize,
        /// The offending entry
        word: String,
    },

    /// Any other engine failure
    #[error("engine error: {0}")]
    Engine(String),

    /// An input could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// An input is not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::DictionaryLoad {
                source_name,
                reason,
            } => ApiError::DictionaryLoad {
                source_name,
                reason,
            },
            EngineError::UnsortedDictionary { index, word } => {
                ApiError::UnsortedDictionary { index, word }
            }
            EngineError::ConfigError(msg) => ApiError::Config(msg),
            EngineError::IoError(msg) => ApiError::Io(msg),
            EngineError::EncodingError(msg) => ApiError::Encoding(msg),
            other => ApiError::Engine(other.to_string()),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
