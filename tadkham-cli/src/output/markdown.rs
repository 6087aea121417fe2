//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tadkham_api::TokenDTO;

/// Markdown formatter - outputs segmented lines as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    line_count: usize,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_count: 0,
            token_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_line(&mut self, _source: &str, _line_number: usize, tokens: &[TokenDTO]) -> Result<()> {
        // Blank input lines have nothing to list
        if tokens.is_empty() {
            return Ok(());
        }

        self.line_count += 1;
        self.token_count += tokens.len();
        let segments: Vec<String> = tokens
            .iter()
            .map(|t| {
                if t.is_word() {
                    t.text.clone()
                } else {
                    format!("*{}*", t.text)
                }
            })
            .collect();
        writeln!(self.writer, "{}. {}", self.line_count, segments.join(" · "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.token_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
