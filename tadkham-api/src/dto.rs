//! Data Transfer Objects for API

use crate::error::Result;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(ReaderSource),
}

/// Boxed stream behind [`Input::Reader`]
pub struct ReaderSource(Box<dyn Read + Send>);

impl std::fmt::Debug for ReaderSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<reader>")
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(ReaderSource(Box::new(reader)))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        Ok(tadkham_engine::Input::from(self).to_text()?)
    }
}

impl From<Input> for tadkham_engine::Input {
    fn from(input: Input) -> Self {
        match input {
            Input::Text(text) => tadkham_engine::Input::Text(text),
            Input::File(path) => tadkham_engine::Input::File(path),
            Input::Bytes(bytes) => tadkham_engine::Input::Bytes(bytes),
            Input::Reader(ReaderSource(reader)) => tadkham_engine::Input::Reader(reader),
        }
    }
}

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// One document after another
    Sequential,
    /// Documents of a batch in parallel
    Parallel,
    /// Decide per batch from its size
    #[default]
    Adaptive,
}

impl From<ExecutionMode> for tadkham_engine::ExecutionMode {
    fn from(mode: ExecutionMode) -> Self {
        match mode {
            ExecutionMode::Sequential => tadkham_engine::ExecutionMode::Sequential,
            ExecutionMode::Parallel => tadkham_engine::ExecutionMode::Parallel,
            ExecutionMode::Adaptive => tadkham_engine::ExecutionMode::Adaptive,
        }
    }
}

/// One segment with its offsets
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDTO {
    /// Segment text
    pub text: String,
    /// Offset in characters
    pub char_offset: usize,
    /// Length in characters
    pub char_len: usize,
    /// Offset in bytes
    pub byte_offset: usize,
    /// Length in bytes
    pub byte_len: usize,
    /// `"word"` or `"unknown"`
    pub kind: String,
}

impl From<tadkham_engine::Token> for TokenDTO {
    fn from(token: tadkham_engine::Token) -> Self {
        Self {
            char_offset: token.char_range.start,
            char_len: token.char_range.len(),
            byte_offset: token.byte_range.start,
            byte_len: token.byte_range.len(),
            kind: token.kind.to_string(),
            text: token.text,
        }
    }
}

impl TokenDTO {
    /// Whether the segment is a dictionary entry
    pub fn is_word(&self) -> bool {
        self.kind == "word"
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Segments produced
    pub word_count: usize,
    /// Segments that are not dictionary entries
    pub unknown_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Execution mode used
    pub mode_used: String,
}

impl From<tadkham_engine::ProcessingMetadata> for Metadata {
    fn from(metadata: tadkham_engine::ProcessingMetadata) -> Self {
        Self {
            total_bytes: metadata.total_bytes,
            total_chars: metadata.total_chars,
            word_count: metadata.word_count,
            unknown_count: metadata.unknown_count,
            processing_time_ms: metadata.processing_time_ms,
            mode_used: metadata.execution_mode.to_string(),
        }
    }
}

/// Complete output with tokens and metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Segments in text order
    pub tokens: Vec<TokenDTO>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Segment texts in order
    pub fn segments(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<tadkham_engine::Output> for Output {
    fn from(output: tadkham_engine::Output) -> Self {
        Self {
            tokens: output.tokens.into_iter().map(TokenDTO::from).collect(),
            metadata: output.metadata.into(),
        }
    }
}
