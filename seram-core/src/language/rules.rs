//! Runtime form of a language rule-set
//!
//! Bridges the TOML configuration and the pipeline stages that consume it.

use std::path::Path;

use crate::domain::affix::AffixRule;
use crate::domain::segmenter::SegmentationPolicy;
use crate::error::{Result, TokenizerError};
use crate::language::config::{AffixConfig, LanguageConfig};

/// Validated, immutable rule-set for one language
#[derive(Debug, Clone)]
pub struct LanguageRules {
    code: String,
    name: String,
    policy: SegmentationPolicy,
    ellipsis: Vec<String>,
    delimiters: Vec<char>,
    suffixes: Vec<AffixRule>,
    prefixes: Vec<AffixRule>,
    paragog_suffixes: Vec<String>,
}

impl LanguageRules {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate().map_err(TokenizerError::Configuration)?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            policy: config.segmentation.policy,
            ellipsis: longest_first(config.segmentation.ellipsis.clone()),
            delimiters: config.segmentation.delimiters.clone(),
            suffixes: compile_affixes(&config.suffixes),
            prefixes: compile_affixes(&config.prefixes),
            paragog_suffixes: longest_first(config.paragog.suffixes.clone()),
        })
    }

    /// Parse and validate a TOML rule-set
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config = LanguageConfig::from_toml_str(toml_str).map_err(TokenizerError::Configuration)?;
        Self::from_config(&config)
    }

    /// Load an external TOML rule-set
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenizerError::resource(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            TokenizerError::Configuration(msg) => {
                TokenizerError::Configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default segmentation policy
    pub fn policy(&self) -> SegmentationPolicy {
        self.policy
    }

    /// Multi-character punctuation units, longest first
    pub fn ellipsis(&self) -> &[String] {
        &self.ellipsis
    }

    /// Punctuation dropped by the delimiter policy
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// Suffix rules, longest affix first
    pub fn suffixes(&self) -> &[AffixRule] {
        &self.suffixes
    }

    /// Prefix rules, longest affix first
    pub fn prefixes(&self) -> &[AffixRule] {
        &self.prefixes
    }

    /// Paragog suffixes, longest first
    pub fn paragog_suffixes(&self) -> &[String] {
        &self.paragog_suffixes
    }
}

fn compile_affixes(configs: &[AffixConfig]) -> Vec<AffixRule> {
    let mut rules: Vec<AffixRule> = configs
        .iter()
        .map(|c| AffixRule {
            affix: c.affix.clone(),
            marker: c.marker.clone(),
            gate: c.gate,
        })
        .collect();
    // A longer affix must be tried before any shorter affix it ends or starts with
    rules.sort_by_key(|r| std::cmp::Reverse(r.affix.chars().count()));
    rules
}

fn longest_first(mut items: Vec<String>) -> Vec<String> {
    items.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    items
}
