//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use seram_core::Token;
use std::io::Write;

/// Markdown formatter - outputs each line's tokens as a numbered list item
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
    fn format_line(&mut self, _source: &str, _line: usize, tokens: &[Token]) -> Result<()> {
        self.line_count += 1;
        self.token_count += tokens.len();
        let rendered: Vec<String> = tokens.iter().map(|t| format!("`{}`", t.text)).collect();
        writeln!(self.writer, "{}. {}", self.line_count, rendered.join(" "))?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_lines_and_total() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter
                .format_line("-", 1, &[Token::word("dia"), Token::punctuation(".")])
                .unwrap();
            formatter.finish().unwrap();
        }
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.starts_with("1. `dia` `.`\n"));
        assert!(out.ends_with("---\n*Total tokens: 2*\n"));
    }
}
