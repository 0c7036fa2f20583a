//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use seram_core::Token;
use std::io::{self, Write};

/// Plain text formatter - outputs the tokens of each line separated by spaces
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, _source: &str, _line: usize, tokens: &[Token]) -> Result<()> {
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        writeln!(self.writer, "{}", texts.join(" "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
