//! Configuration structures and validation
//!
//! This module defines the TOML schema for language rule-sets.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::affix::PhonologicalGate;
use crate::domain::segmenter::SegmentationPolicy;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub segmentation: Segmentation,
    #[serde(default)]
    pub suffixes: Vec<AffixConfig>,
    #[serde(default)]
    pub prefixes: Vec<AffixConfig>,
    #[serde(default)]
    pub paragog: Paragog,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Segmenter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segmentation {
    #[serde(default)]
    pub policy: SegmentationPolicy,
    #[serde(default = "default_ellipsis")]
    pub ellipsis: Vec<String>,
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<char>,
}

impl Default for Segmentation {
    fn default() -> Self {
        Self {
            policy: SegmentationPolicy::default(),
            ellipsis: default_ellipsis(),
            delimiters: default_delimiters(),
        }
    }
}

/// One prefix or suffix rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffixConfig {
    pub affix: String,
    pub marker: String,
    #[serde(default)]
    pub gate: Option<PhonologicalGate>,
}

/// Paragog merging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragog {
    #[serde(default = "default_paragog_suffixes")]
    pub suffixes: Vec<String>,
}

impl Default for Paragog {
    fn default() -> Self {
        Self {
            suffixes: default_paragog_suffixes(),
        }
    }
}

fn default_ellipsis() -> Vec<String> {
    vec!["...".to_string()]
}

fn default_delimiters() -> Vec<char> {
    ".,!?;:'\"(){}[]<>~`@#$%^&*/+=|\\".chars().collect()
}

fn default_paragog_suffixes() -> Vec<String> {
    vec!["a".to_string(), "ra".to_string()]
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("failed to parse language config: {e}"))
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }
        if self.metadata.name.trim().is_empty() {
            return Err("metadata.name must not be empty".to_string());
        }

        validate_affixes("suffixes", &self.suffixes)?;
        validate_affixes("prefixes", &self.prefixes)?;

        if self.segmentation.ellipsis.iter().any(|e| e.is_empty()) {
            return Err("segmentation.ellipsis entries must not be empty".to_string());
        }

        if self.paragog.suffixes.is_empty() {
            return Err("paragog.suffixes must not be empty".to_string());
        }
        if self
            .paragog
            .suffixes
            .iter()
            .any(|s| s.is_empty() || !s.chars().all(char::is_alphabetic))
        {
            return Err("paragog.suffixes entries must be non-empty alphabetic strings".to_string());
        }

        Ok(())
    }
}

fn validate_affixes(section: &str, rules: &[AffixConfig]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for rule in rules {
        if rule.affix.is_empty() {
            return Err(format!("{section}: affix must not be empty"));
        }
        if rule.marker.is_empty() {
            return Err(format!("{section}: marker for '{}' must not be empty", rule.affix));
        }
        if rule.affix.chars().any(|c| !c.is_lowercase()) {
            return Err(format!(
                "{section}: affix '{}' must be lower-case letters",
                rule.affix
            ));
        }
        if !seen.insert(rule.affix.as_str()) {
            return Err(format!("{section}: duplicate affix '{}'", rule.affix));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_config_deserialize() {
        let toml_str = r#"
            [metadata]
            code = "test"
            name = "Test"

            [segmentation]
            policy = "punctuation-as-delimiter"
            ellipsis = ["...", "…"]

            [[suffixes]]
            affix = "ra"
            marker = "_ra"
            gate = "vowel"

            [[prefixes]]
            affix = "na"
            marker = "na_"
        "#;

        let config = LanguageConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.metadata.code, "test");
        assert_eq!(
            config.segmentation.policy,
            SegmentationPolicy::PunctuationAsDelimiter
        );
        assert_eq!(config.segmentation.ellipsis.len(), 2);
        assert!(config.segmentation.delimiters.contains(&'.'));
        assert_eq!(config.suffixes[0].gate, Some(PhonologicalGate::Vowel));
        assert_eq!(config.prefixes[0].gate, None);
        assert_eq!(config.paragog.suffixes, vec!["a", "ra"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = LanguageConfig::from_toml_str(
            r#"
            [metadata]
            code = "min"
            name = "Minimal"
        "#,
        )
        .unwrap();
        assert_eq!(
            config.segmentation.policy,
            SegmentationPolicy::PunctuationAsToken
        );
        assert!(config.suffixes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_affix() {
        let config = LanguageConfig::from_toml_str(
            r#"
            [metadata]
            code = "dup"
            name = "Duplicate"

            [[prefixes]]
            affix = "na"
            marker = "na_"

            [[prefixes]]
            affix = "na"
            marker = "na2_"
        "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.contains("duplicate affix 'na'"));
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let config = LanguageConfig::from_toml_str(
            r#"
            [metadata]
            code = "bad"
            name = "Bad"

            [[suffixes]]
            affix = "ra"
            marker = ""
        "#,
        )
        .unwrap();
        assert!(config.validate().unwrap_err().contains("marker"));
    }

    #[test]
    fn test_unknown_gate_is_parse_error() {
        let result = LanguageConfig::from_toml_str(
            r#"
            [metadata]
            code = "bad"
            name = "Bad"

            [[suffixes]]
            affix = "ra"
            marker = "_ra"
            gate = "glide"
        "#,
        );
        assert!(result.is_err());
    }
}
