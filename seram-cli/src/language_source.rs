//! Language source management for CLI

use anyhow::{Context, Result};
use seram_core::language::get_rules;
use seram_core::{Language, LanguageRules};
use std::path::PathBuf;
use std::sync::Arc;

use crate::commands::common::LanguageArgs;
use crate::config::CliConfig;
use crate::error::CliError;

/// Source of language rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Built-in language
    BuiltIn(Language),
    /// External rule file
    External {
        /// Path to the rule file
        path: PathBuf,
    },
}

impl LanguageSource {
    /// Pick the source from flags, falling back to the configuration file
    pub fn resolve(args: &LanguageArgs, config: &CliConfig) -> Result<Self> {
        if let Some(path) = &args.language_config {
            return Ok(LanguageSource::External { path: path.clone() });
        }
        if let Some(language) = args.language {
            return Ok(LanguageSource::BuiltIn(language.into()));
        }

        let language = config
            .tokenizer
            .language
            .parse::<Language>()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(LanguageSource::BuiltIn(language))
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(language) => format!("Built-in: {language}"),
            LanguageSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the rule-set
    pub fn load_rules(&self) -> Result<Arc<LanguageRules>> {
        match self {
            LanguageSource::BuiltIn(language) => Ok(get_rules(*language)?),
            LanguageSource::External { path } => {
                let rules = LanguageRules::from_file(path).with_context(|| {
                    format!("Failed to load language config: {}", path.display())
                })?;
                Ok(Arc::new(rules))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::LanguageArg;

    #[test]
    fn test_flag_wins_over_config() {
        let args = LanguageArgs {
            language: Some(LanguageArg::Seram),
            language_config: None,
        };
        let source = LanguageSource::resolve(&args, &CliConfig::default()).unwrap();
        assert_eq!(source, LanguageSource::BuiltIn(Language::Seram));
        assert_eq!(source.display_name(), "Built-in: Seram");
    }

    #[test]
    fn test_config_language() {
        let mut config = CliConfig::default();
        config.tokenizer.language = "srm".to_string();
        let source = LanguageSource::resolve(&LanguageArgs::default(), &config).unwrap();
        assert_eq!(source, LanguageSource::BuiltIn(Language::Seram));

        config.tokenizer.language = "english".to_string();
        assert!(LanguageSource::resolve(&LanguageArgs::default(), &config).is_err());
    }

    #[test]
    fn test_external_missing_file() {
        let source = LanguageSource::External {
            path: PathBuf::from("/nonexistent/rules.toml"),
        };
        assert!(source.display_name().starts_with("External: "));
        assert!(source.load_rules().is_err());
    }

    #[test]
    fn test_builtin_rules() {
        let rules = LanguageSource::BuiltIn(Language::Geser).load_rules().unwrap();
        assert_eq!(rules.code(), "geser");
    }
}
