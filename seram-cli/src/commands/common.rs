//! Arguments shared by several commands

use clap::Args;
use seram_core::{Language, ResourcePaths, SegmentationPolicy};
use std::path::PathBuf;

use crate::config::ResourceConfig;

/// Built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LanguageArg {
    /// Geser rules
    #[value(alias = "ges")]
    Geser,
    /// Seram rules
    #[value(alias = "srm")]
    Seram,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Geser => Language::Geser,
            LanguageArg::Seram => Language::Seram,
        }
    }
}

/// Segmentation policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Punctuation marks become tokens
    #[value(alias = "punctuation-as-token")]
    Token,
    /// Punctuation is dropped and splits words
    #[value(alias = "punctuation-as-delimiter")]
    Delimiter,
}

impl From<PolicyArg> for SegmentationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Token => SegmentationPolicy::PunctuationAsToken,
            PolicyArg::Delimiter => SegmentationPolicy::PunctuationAsDelimiter,
        }
    }
}

/// Language selection
#[derive(Debug, Clone, Default, Args)]
pub struct LanguageArgs {
    /// Built-in language rules
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageArg>,

    /// External language rule file (TOML)
    #[arg(long, value_name = "FILE", conflicts_with = "language")]
    pub language_config: Option<PathBuf>,
}

/// Lexicon and character-class locations
#[derive(Debug, Clone, Default, Args)]
pub struct ResourceArgs {
    /// Directory holding geser_word.txt, vocal.txt and consonant.txt
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Lexicon file, one word-form per line
    #[arg(long, value_name = "FILE", env = "SERAM_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Vowel table, one character per line
    #[arg(long, value_name = "FILE", env = "SERAM_VOWELS")]
    pub vowels: Option<PathBuf>,

    /// Consonant table, one character per line
    #[arg(long, value_name = "FILE", env = "SERAM_CONSONANTS")]
    pub consonants: Option<PathBuf>,
}

impl ResourceArgs {
    /// Merge command-line values over the configuration file
    pub fn to_paths(&self, config: &ResourceConfig) -> ResourcePaths {
        let mut paths = match self.data_dir.as_ref().or(config.data_dir.as_ref()) {
            Some(dir) => ResourcePaths::from_dir(dir),
            None => ResourcePaths::default(),
        };

        let pick = |flag: &Option<PathBuf>, file: &Option<PathBuf>| flag.clone().or_else(|| file.clone());
        if let Some(path) = pick(&self.lexicon, &config.lexicon) {
            paths = paths.with_lexicon(path);
        }
        if let Some(path) = pick(&self.vowels, &config.vowels) {
            paths = paths.with_vowels(path);
        }
        if let Some(path) = pick(&self.consonants, &config.consonants) {
            paths = paths.with_consonants(path);
        }

        paths
    }
}

/// Text sources
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob, '-' for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text given directly on the command line
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,
}
