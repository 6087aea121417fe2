//! Public API for tadkham word segmentation
//!
//! This crate provides a small, stable interface for splitting unspaced
//! text (Thai, Lao, Khmer, ...) into dictionary words. Engine types stay
//! behind plain DTOs.
//!
//! ```no_run
//! use tadkham_api::WordSegmenter;
//!
//! let segmenter = WordSegmenter::new("words.txt")?;
//! let output = segmenter.process_text("ตัดคำไหม")?;
//! for token in &output.tokens {
//!     println!("{} @ {}", token.text, token.char_offset);
//! }
//! # Ok::<(), tadkham_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use std::path::PathBuf;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder, DictionaryLocation};
pub use dto::{ExecutionMode, Input, Metadata, Output, ReaderSource, TokenDTO};
pub use error::ApiError;

/// Main entry point for word segmentation
///
/// Loading the dictionary is the only fallible step; once built, a
/// segmenter can be shared across threads and reused for any number of
/// documents.
#[derive(Debug, Clone)]
pub struct WordSegmenter {
    inner: Arc<tadkham_engine::Segmenter>,
    config: Config,
}

impl WordSegmenter {
    /// Load a sorted dictionary file with default settings
    pub fn new(dictionary_path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(Config::new(dictionary_path))
    }

    /// Use newline-separated dictionary text with default settings
    pub fn from_text(dictionary_text: impl Into<String>) -> Result<Self> {
        let config = Config::builder().dictionary_text(dictionary_text).build()?;
        Self::with_config(config)
    }

    /// Create a segmenter with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let dictionary =
            tadkham_engine::load_dictionary(config.dictionary.to_source(), config.load_options())?;

        let inner = tadkham_engine::SegmenterBuilder::new()
            .dictionary(dictionary)
            .config(config.engine_config())
            .build()?;

        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Segment one input and return tokens with metadata
    pub fn process(&self, input: Input) -> Result<Output> {
        Ok(self.inner.process(input.into())?.into())
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        Ok(self.inner.tokenize(text).into())
    }

    /// Split text into segment strings
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.inner.segment(text)
    }

    /// Segment independent documents, outputs in input order
    pub fn process_batch<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Output>> {
        let outputs = self.inner.segment_batch(documents)?;
        Ok(outputs.into_iter().map(Output::from).collect())
    }

    /// Number of dictionary entries
    pub fn dictionary_len(&self) -> usize {
        self.inner.dictionary().len()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Segment text against a dictionary file
pub fn segment_text(text: &str, dictionary_path: impl Into<PathBuf>) -> Result<Vec<String>> {
    let segmenter = WordSegmenter::new(dictionary_path)?;
    Ok(segmenter.segment(text))
}

/// Process text with a given segmenter
pub fn segment_with(segmenter: &WordSegmenter, text: &str) -> Result<Output> {
    segmenter.process(Input::from_text(text))
}
