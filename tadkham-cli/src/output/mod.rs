//! Output formatting module

use anyhow::Result;
use tadkham_api::TokenDTO;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Output the segments of one input line
    ///
    /// `line_number` is 1-based within `source`.
    fn format_line(&mut self, source: &str, line_number: usize, tokens: &[TokenDTO])
        -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
