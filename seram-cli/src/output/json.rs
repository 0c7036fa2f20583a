//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use seram_core::Token;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one record per input line as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// Input the line came from
    pub source: String,
    /// One-based line number within the source
    pub line: usize,
    /// Tokens with their kinds
    pub tokens: Vec<Token>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            lines: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, source: &str, line: usize, tokens: &[Token]) -> Result<()> {
        self.lines.push(LineData {
            source: source.to_string(),
            line,
            tokens: tokens.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.lines)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
