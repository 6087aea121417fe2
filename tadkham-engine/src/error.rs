//! Layered error types
//!
//! Core errors are deterministic; everything touching storage or encodings
//! is raised here, before segmentation starts.

use tadkham_core::CoreError;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// The dictionary could not be read from its source
    #[error("failed to load dictionary from {source_name}: {reason}")]
    DictionaryLoad {
        /// File path or a description of the source
        source_name: String,
        /// Underlying failure
        reason: String,
    },

    /// The dictionary violates the ascending-order precondition
    #[error("dictionary is not sorted: entry {index} ({word:?}) sorts before its predecessor")]
    UnsortedDictionary {
        /// Index of the first out-of-order entry
        index: usize,
        /// The offending entry
        word: String,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_load_display() {
        let err = EngineError::DictionaryLoad {
            source_name: "words.txt".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load dictionary from words.txt: No such file or directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError(msg) if msg == "gone"));
    }

    #[test]
    fn test_core_error_conversion() {
        let err: EngineError = CoreError::UnsortedDictionary { index: 3 }.into();
        assert!(err.to_string().contains("entry 3"));
    }
}
