//! Language rule-sets
//!
//! Geser and Seram share one rule shape (segmentation settings, suffix and
//! prefix rules, paragog suffixes) stored as embedded TOML files.

pub mod config;
pub mod loader;
pub mod rules;

use std::fmt;
use std::str::FromStr;

use crate::error::TokenizerError;

pub use config::{AffixConfig, LanguageConfig, Metadata, Paragog, Segmentation};
pub use loader::{embedded_toml, get_rules, get_rules_by_code};
pub use rules::LanguageRules;

/// Languages with a built-in rule-set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Geser (Geser-Gorom)
    #[default]
    Geser,
    /// Seram
    Seram,
}

impl Language {
    /// Every built-in language
    pub fn all() -> &'static [Language] {
        &[Language::Geser, Language::Seram]
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Geser => "geser",
            Language::Seram => "seram",
        }
    }

    /// Short alias accepted on input
    pub fn short_code(&self) -> &'static str {
        match self {
            Language::Geser => "ges",
            Language::Seram => "srm",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Geser => "Geser",
            Language::Seram => "Seram",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = TokenizerError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_lowercase().as_str() {
            "geser" | "ges" => Ok(Language::Geser),
            "seram" | "srm" => Ok(Language::Seram),
            _ => Err(TokenizerError::UnsupportedLanguage(code.to_string())),
        }
    }
}
