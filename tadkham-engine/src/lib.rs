//! Application layer for dictionary-based word segmentation
//!
//! This crate loads dictionaries from storage, turns the core's character
//! ranges into tokens with byte and character offsets, and runs batches of
//! independent documents sequentially or in parallel.

#![warn(missing_docs)]

pub mod assembler;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;
pub mod wrap;

// Re-export key types
pub use assembler::{tokenize, Token};
pub use config::EngineConfig;
pub use dictionary::{check_sorted, load_dictionary, DictionarySource, LoadOptions};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::Input;
pub use processor::{Output, ProcessingMetadata, Segmenter, SegmenterBuilder};
pub use wrap::wrap_tokens;

// Re-export from core for convenience
pub use tadkham_core::{Dictionary, TextRange, TokenKind};
