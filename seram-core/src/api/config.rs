//! Configuration API for tokenization

use std::str::FromStr;

use crate::domain::segmenter::SegmentationPolicy;
use crate::error::{Result, TokenizerError};
use crate::language::Language;

/// Per-call affix switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizeOptions {
    /// Split recognised suffixes (`-ra`, `-a`)
    pub use_suffix: bool,
    /// Split recognised prefixes (`na-`, `da-`)
    pub use_prefix: bool,
}

impl TokenizeOptions {
    /// Create options
    pub fn new(use_suffix: bool, use_prefix: bool) -> Self {
        Self {
            use_suffix,
            use_prefix,
        }
    }

    /// Both suffix and prefix splitting
    pub fn all() -> Self {
        Self::new(true, true)
    }

    /// Whether any affix stage runs
    pub fn affixes_enabled(&self) -> bool {
        self.use_suffix || self.use_prefix
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    pub(crate) language: Language,
    /// None = the language rule-set's policy
    pub(crate) policy: Option<SegmentationPolicy>,
    pub(crate) options: TokenizeOptions,
}

impl TokenizerConfig {
    /// Create a configuration builder
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Explicit policy override, if any
    pub fn policy(&self) -> Option<SegmentationPolicy> {
        self.policy
    }

    /// Default affix switches
    pub fn options(&self) -> TokenizeOptions {
        self.options
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    language: Option<String>,
    policy: Option<SegmentationPolicy>,
    use_suffix: bool,
    use_prefix: bool,
}

impl TokenizerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(TokenizerError::Configuration(
                "language code must not be empty".into(),
            ));
        }
        self.language = Some(code);
        Ok(self)
    }

    /// Override the segmentation policy
    pub fn policy(mut self, policy: SegmentationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Enable suffix splitting
    pub fn use_suffix(mut self, enabled: bool) -> Self {
        self.use_suffix = enabled;
        self
    }

    /// Enable prefix splitting
    pub fn use_prefix(mut self, enabled: bool) -> Self {
        self.use_prefix = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TokenizerConfig> {
        let mut config = TokenizerConfig::default();

        if let Some(code) = self.language {
            config.language = Language::from_str(&code)?;
        }

        config.policy = self.policy;
        config.options = TokenizeOptions::new(self.use_suffix, self.use_prefix);
        Ok(config)
    }
}
