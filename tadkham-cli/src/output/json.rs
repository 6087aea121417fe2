//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tadkham_api::TokenDTO;

/// JSON formatter - outputs every line as an array entry
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct LineData {
    /// Input file the line came from
    pub source: String,
    /// 1-based line number
    pub line: usize,
    /// Segments with offsets relative to the line
    pub tokens: Vec<TokenDTO>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, source: &str, line_number: usize, tokens: &[TokenDTO]) -> Result<()> {
        self.lines.push(LineData {
            source: source.to_string(),
            line: line_number,
            tokens: tokens.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
