//! Execution strategies for batches of independent documents
//!
//! A single document is always segmented on the calling thread: the
//! trellis pass is strictly left to right. Batches can fan out across
//! documents instead.

use crate::assembler::{tokenize, Token};
use crate::error::Result;
use std::time::{Duration, Instant};
use tadkham_core::{Dictionary, TokenKind};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One document after another on the calling thread
    Sequential,
    /// Documents spread over a rayon thread pool
    Parallel,
    /// Pick per batch with [`auto_select`]
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name used in metadata and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurements for one segmented document
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionMetrics {
    /// Mode the document was processed under
    pub mode_used: ExecutionMode,
    /// Wall time spent on this document
    pub processing_time: Duration,
    /// Input size in bytes
    pub bytes_processed: usize,
    /// Input size in characters
    pub chars_processed: usize,
    /// Segments on the best path
    pub word_count: usize,
    /// Segments that are not dictionary entries
    pub unknown_count: usize,
}

/// Tokens of one document plus its metrics
#[derive(Debug, Clone)]
pub struct ProcessingOutput {
    /// Segments in text order
    pub tokens: Vec<Token>,
    /// Measurements
    pub metadata: ExecutionMetrics,
}

/// Segment one document and time it
pub fn process_document(text: &str, dict: &Dictionary, mode: ExecutionMode) -> ProcessingOutput {
    let start = Instant::now();
    let tokens = tokenize(text, dict);
    let metadata = ExecutionMetrics {
        mode_used: mode,
        processing_time: start.elapsed(),
        bytes_processed: text.len(),
        chars_processed: tokens.last().map_or(0, |t| t.char_range.end),
        word_count: tokens.len(),
        unknown_count: tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Unknown)
            .count(),
    };
    ProcessingOutput { tokens, metadata }
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Segment every document, returning outputs in input order
    fn process_batch(&self, documents: &[&str], dict: &Dictionary)
        -> Result<Vec<ProcessingOutput>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Choose sequential or parallel execution for a batch
pub fn auto_select(doc_count: usize, total_bytes: usize, threshold: usize) -> ExecutionMode {
    if doc_count < 2 {
        // Nothing to fan out
        ExecutionMode::Sequential
    } else if total_bytes < threshold {
        // Small batches: thread startup dominates
        ExecutionMode::Sequential
    } else if cfg!(feature = "parallel") {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select_single_document_is_sequential() {
        assert_eq!(auto_select(1, 10_000_000, 1), ExecutionMode::Sequential);
        assert_eq!(auto_select(0, 0, 0), ExecutionMode::Sequential);
    }

    #[test]
    fn test_auto_select_small_batch_is_sequential() {
        assert_eq!(auto_select(50, 1_000, 100_000), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_auto_select_large_batch_is_parallel() {
        assert_eq!(auto_select(50, 200_000, 100_000), ExecutionMode::Parallel);
    }

    #[test]
    fn test_process_document_metrics() {
        let dict = Dictionary::from_words(["ab", "c"]);
        let output = process_document("abxc", &dict, ExecutionMode::Sequential);
        assert_eq!(output.tokens.len(), 3);
        assert_eq!(output.metadata.word_count, 3);
        assert_eq!(output.metadata.unknown_count, 1);
        assert_eq!(output.metadata.chars_processed, 4);
        assert_eq!(output.metadata.bytes_processed, 4);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ExecutionMode::Parallel.to_string(), "parallel");
    }
}
