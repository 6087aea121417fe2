//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tadkham_api::TokenDTO;
use tadkham_engine::wrap_tokens;

/// Plain text formatter
///
/// Writes one output line per input line with segments joined by the
/// delimiter. With wrapping enabled, segments are instead packed into lines
/// of bounded width and written without a delimiter.
pub struct TextFormatter<W: Write> {
    writer: W,
    delimiter: String,
    wrap: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, delimiter: impl Into<String>, wrap: usize) -> Self {
        Self {
            writer,
            delimiter: delimiter.into(),
            wrap,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, _source: &str, _line_number: usize, tokens: &[TokenDTO]) -> Result<()> {
        let segments: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        if self.wrap == 0 {
            writeln!(self.writer, "{}", segments.join(&self.delimiter))?;
            return Ok(());
        }

        let lines = wrap_tokens(&segments, self.wrap);
        if lines.is_empty() {
            writeln!(self.writer)?;
        }
        for line in lines {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
