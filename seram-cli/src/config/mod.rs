//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Lexicon and character-class locations
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Tokenizer defaults
    #[serde(default)]
    pub tokenizer: TokenizerSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resource locations
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct ResourceConfig {
    /// Directory holding `geser_word.txt`, `vocal.txt` and `consonant.txt`
    pub data_dir: Option<PathBuf>,

    /// Lexicon file
    pub lexicon: Option<PathBuf>,

    /// Vowel table file
    pub vowels: Option<PathBuf>,

    /// Consonant table file
    pub consonants: Option<PathBuf>,
}

/// Tokenizer-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct TokenizerSection {
    /// Default language code
    #[serde(default = "default_language")]
    pub language: String,

    /// Segmentation policy; the language default when absent
    #[serde(default)]
    pub policy: Option<String>,

    /// Split suffixes by default
    #[serde(default)]
    pub use_suffix: bool,

    /// Split prefixes by default
    #[serde(default)]
    pub use_prefix: bool,
}

impl Default for TokenizerSection {
    fn default() -> Self {
        Self {
            language: default_language(),
            policy: None,
            use_suffix: false,
            use_prefix: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Pretty print JSON output
    #[serde(default = "default_pretty")]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            pretty_json: default_pretty(),
        }
    }
}

fn default_language() -> String {
    "geser".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_pretty() -> bool {
    true
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {e}", path.display()))
        })?;
        log::debug!("loaded CLI configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
