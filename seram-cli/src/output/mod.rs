//! Output formatting module

use anyhow::Result;
use seram_core::Token;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the tokens of one input line
    fn format_line(&mut self, source: &str, line: usize, tokens: &[Token]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
