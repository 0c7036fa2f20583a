//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

use anyhow::Result;
use std::path::PathBuf;

pub use file_reader::FileReader;
pub use glob_resolver::{resolve_patterns, resolve_sources};

/// One text source named on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
    /// Text passed with `--text`
    Inline(String),
}

impl InputSource {
    /// Name used in output records and progress messages
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "-".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Inline(_) => "<text>".to_string(),
        }
    }

    /// Read the whole source
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Inline(text) => Ok(text.clone()),
        }
    }
}
