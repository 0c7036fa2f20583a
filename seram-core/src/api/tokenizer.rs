//! Tokenizer orchestrator
//!
//! Runs detect reduplications, shield, segment and, when enabled, affix
//! analysis and splitting. The tokenizer holds only read-only state and can
//! be shared between threads.

use std::sync::Arc;
use std::time::Instant;

use crate::api::{Input, Output, ProcessingMetadata, ProcessingStats, TokenizeOptions, TokenizerConfig};
use crate::domain::affix::{AffixAnalyser, AffixCandidates, PrefixAnalyser, SuffixAnalyser};
use crate::domain::paragog::ParagogNormalizer;
use crate::domain::reduplication::{extract_reduplications, find_reduplications};
use crate::domain::segmenter::{SegmentationPolicy, Segmenter};
use crate::domain::shield::{protect_with_placeholders, PlaceholderMap, Shield};
use crate::domain::token::Token;
use crate::error::Result;
use crate::language::{get_rules, LanguageRules};
use crate::resources::Resources;

/// Geser/Seram tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,
    rules: Arc<LanguageRules>,
    resources: Resources,
    segmenter: Segmenter,
    suffixes: SuffixAnalyser,
    prefixes: PrefixAnalyser,
    paragogs: ParagogNormalizer,
}

impl Tokenizer {
    /// Create a tokenizer with the default configuration
    pub fn new(resources: Resources) -> Result<Self> {
        Self::with_config(TokenizerConfig::default(), resources)
    }

    /// Create a tokenizer for a language code
    pub fn for_language(code: impl Into<String>, resources: Resources) -> Result<Self> {
        let config = TokenizerConfig::builder().language(code)?.build()?;
        Self::with_config(config, resources)
    }

    /// Create a tokenizer with a custom configuration
    pub fn with_config(config: TokenizerConfig, resources: Resources) -> Result<Self> {
        let rules = get_rules(config.language)?;
        Self::with_rules(config, rules, resources)
    }

    /// Create a tokenizer from an explicit rule-set
    ///
    /// The configuration's language is ignored in favour of `rules`.
    pub fn with_rules(
        config: TokenizerConfig,
        rules: Arc<LanguageRules>,
        resources: Resources,
    ) -> Result<Self> {
        let policy = config.policy.unwrap_or_else(|| rules.policy());
        let segmenter = Segmenter::from_rules(&rules, policy)?;
        let suffixes = SuffixAnalyser::new(
            rules.suffixes(),
            resources.lexicon(),
            Arc::clone(resources.classes()),
        );
        let prefixes = PrefixAnalyser::new(
            rules.prefixes(),
            resources.lexicon(),
            Arc::clone(resources.classes()),
        );
        let paragogs = ParagogNormalizer::new(rules.paragog_suffixes())?;

        log::debug!(
            "tokenizer ready: language={}, policy={}, lexicon entries={}",
            rules.code(),
            policy,
            resources.lexicon().len()
        );

        Ok(Self {
            config,
            rules,
            resources,
            segmenter,
            suffixes,
            prefixes,
            paragogs,
        })
    }

    /// Tokenize with the configured affix switches
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize_with(text, self.config.options)
    }

    /// Tokenize with explicit affix switches
    pub fn tokenize_with(&self, text: &str, options: TokenizeOptions) -> Result<Vec<String>> {
        Ok(self
            .tokenize_tokens(text, options)?
            .into_iter()
            .map(|t| t.text)
            .collect())
    }

    /// Tokenize into typed tokens
    pub fn tokenize_tokens(&self, text: &str, options: TokenizeOptions) -> Result<Vec<Token>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let spans = find_reduplications(text);
        log::trace!("detected {} reduplications", spans.len());

        let shielded = Shield::protect(text, &spans);
        let tokens = self.segmenter.segment(&shielded);

        if !options.affixes_enabled() {
            return Ok(tokens);
        }

        let candidates = self.analyse_affixes(&tokens, options)?;
        if candidates.is_empty() {
            return Ok(tokens);
        }

        let mut output = Vec::with_capacity(tokens.len() + candidates.len());
        for token in tokens {
            match candidates.split(&token) {
                Some([first, second]) => {
                    output.push(first);
                    output.push(second);
                }
                None => output.push(token),
            }
        }
        Ok(output)
    }

    /// Read an input and tokenize it with the configured switches
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let text = input.into_text()?;
        let tokens = self.tokenize_tokens(&text, self.config.options)?;
        let stats = ProcessingStats::collect(&text, &tokens);

        Ok(Output {
            tokens,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                language: self.rules.code().to_string(),
                policy: self.segmenter.policy(),
                stats,
            },
        })
    }

    /// Reduplicated forms of `text`
    pub fn extract_reduplications(&self, text: &str) -> Vec<String> {
        extract_reduplications(text)
    }

    /// Placeholder-shielded form of `text` and the map that restores it
    pub fn shield_with_placeholders(&self, text: &str) -> (String, PlaceholderMap) {
        protect_with_placeholders(text, &find_reduplications(text))
    }

    /// Merge detached paragogs in every sentence
    pub fn normalize_paragogs<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Vec<String>> {
        self.paragogs.normalize(sentences)
    }

    /// Words absent from the lexicon
    pub fn find_unmatched_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>> {
        self.resources.lexicon().find_unmatched_words(words)
    }

    /// Get the current configuration
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Active rule-set
    pub fn rules(&self) -> &LanguageRules {
        &self.rules
    }

    /// Loaded resources
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Active segmentation policy
    pub fn policy(&self) -> SegmentationPolicy {
        self.segmenter.policy()
    }

    fn analyse_affixes(&self, tokens: &[Token], options: TokenizeOptions) -> Result<AffixCandidates> {
        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_alphabetic_word())
            .map(|t| t.text.as_str())
            .collect();

        let mut candidates = AffixCandidates::new();
        if words.is_empty() {
            log::trace!("no alphabetic words; skipping affix analysis");
            return Ok(candidates);
        }

        let stream = words.join(" ");
        if options.use_suffix {
            candidates.extend(self.suffixes.position(), self.suffixes.analyse(&stream)?);
        }
        if options.use_prefix {
            candidates.extend(self.prefixes.position(), self.prefixes.analyse(&stream)?);
        }

        log::trace!("{} affix candidates", candidates.len());
        Ok(candidates)
    }
}
