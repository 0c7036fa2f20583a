//! Unmatched command implementation

use anyhow::Result;
use clap::Args;
use seram_core::{words_from_json, Resources};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::commands::common::ResourceArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;

/// Arguments for the unmatched command
#[derive(Debug, Args)]
pub struct UnmatchedArgs {
    /// Words to look up
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// JSON file holding a list of words ('-' for stdin)
    #[arg(long, value_name = "FILE", conflicts_with = "words")]
    pub json: Option<String>,

    /// Print the result as a JSON array
    #[arg(long)]
    pub json_output: bool,

    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl UnmatchedArgs {
    /// Execute the unmatched command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let resources = Resources::load(&self.resources.to_paths(&config.resources));

        let words = self.collect_words()?;
        let unmatched = resources.lexicon().find_unmatched_words(&words)?;
        log::info!(
            "{} of {} words are not in the lexicon",
            unmatched.len(),
            words.len()
        );

        let mut out = io::stdout().lock();
        if self.json_output {
            serde_json::to_writer(&mut out, &unmatched)?;
            writeln!(out)?;
        } else {
            for word in &unmatched {
                writeln!(out, "{word}")?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn collect_words(&self) -> Result<Vec<String>> {
        let Some(source) = &self.json else {
            return Ok(self.words.clone());
        };

        let content = if source == "-" {
            FileReader::read_stdin()?
        } else {
            FileReader::read_text(Path::new(source))?
        };
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| CliError::InputError(format!("{source} is not valid JSON: {e}")))?;
        Ok(words_from_json(&value)?)
    }
}
