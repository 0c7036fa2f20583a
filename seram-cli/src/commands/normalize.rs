//! Normalize command implementation

use anyhow::Result;
use clap::Args;
use seram_core::{ParagogNormalizer, TokenizerError};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::commands::common::{InputArgs, LanguageArgs};
use crate::config::CliConfig;
use crate::input::{resolve_sources, InputSource};
use crate::language_source::LanguageSource;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl NormalizeArgs {
    /// Execute the normalize command
    ///
    /// Every non-blank line is one sentence. Sentences with fewer than two
    /// words are printed unchanged.
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let rules = LanguageSource::resolve(&self.language, &config)?.load_rules()?;
        let normalizer = ParagogNormalizer::new(rules.paragog_suffixes())?;

        let sources = match &self.input.text {
            Some(text) => vec![InputSource::Inline(text.clone())],
            None => resolve_sources(&self.input.input)?,
        };

        let mut out = io::stdout().lock();
        for source in &sources {
            for line in source.read()?.lines().filter(|l| !l.trim().is_empty()) {
                writeln!(out, "{}", normalize_line(&normalizer, line)?)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn normalize_line(normalizer: &ParagogNormalizer, line: &str) -> Result<String> {
    match normalizer.normalize(&[line]) {
        Ok(mut merged) => Ok(merged.pop().unwrap_or_default()),
        Err(TokenizerError::InvalidArgument(reason)) => {
            log::debug!("left unchanged: {reason}");
            Ok(line.to_string())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> ParagogNormalizer {
        ParagogNormalizer::new(&["a", "ra"]).unwrap()
    }

    #[test]
    fn test_merges_detached_suffix() {
        assert_eq!(normalize_line(&normalizer(), "lihat a").unwrap(), "lihata");
        assert_eq!(
            normalize_line(&normalizer(), "dia pergi ra ke pasar").unwrap(),
            "dia pergira ke pasar"
        );
    }

    #[test]
    fn test_single_word_unchanged() {
        assert_eq!(normalize_line(&normalizer(), "sara").unwrap(), "sara");
    }
}
