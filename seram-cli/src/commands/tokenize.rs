//! Tokenize command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use seram_core::{Resources, SegmentationPolicy, Token, TokenizeOptions, Tokenizer, TokenizerConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::commands::common::{InputArgs, LanguageArgs, PolicyArg, ResourceArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_sources, InputSource};
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Punctuation handling (default: the language's policy)
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Split productive suffixes
    #[arg(long)]
    pub suffix: bool,

    /// Split productive prefixes
    #[arg(long)]
    pub prefix: bool,

    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Tokenize input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel mode
    #[arg(short = 't', long, requires = "parallel")]
    pub threads: Option<usize>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tokens of each line separated by spaces
    Text,
    /// JSON array of lines with typed tokens
    Json,
    /// Markdown numbered list
    Markdown,
}

/// Tokens of one source, keyed by one-based line number
struct SourceTokens {
    name: String,
    lines: Vec<(usize, Vec<Token>)>,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    ///
    /// `quiet` suppresses the progress bar.
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let source = LanguageSource::resolve(&self.language, &config)?;
        log::info!("Language rules: {}", source.display_name());

        let tokenizer = self.build_tokenizer(&config, &source)?;
        let options = tokenizer.config().options();

        let sources = match &self.input.text {
            Some(text) => vec![InputSource::Inline(text.clone())],
            None => resolve_sources(&self.input.input)?,
        };
        log::info!("Tokenizing {} input source(s)", sources.len());

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(sources.len() as u64);

        let start = Instant::now();
        let tokenize_source = |source: &InputSource| -> Result<SourceTokens> {
            let name = source.name();
            let lines = tokenize_text(&tokenizer, &source.read()?, options)
                .map_err(|e| CliError::ProcessingError(format!("{name}: {e}")))?;
            progress.file_completed(&name);
            Ok(SourceTokens { name, lines })
        };

        let results: Vec<SourceTokens> = if self.parallel {
            let run = || sources.par_iter().map(&tokenize_source).collect::<Result<Vec<_>>>();
            match self.threads {
                Some(threads) => rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .context("Failed to build thread pool")?
                    .install(run)?,
                None => run()?,
            }
        } else {
            sources.iter().map(&tokenize_source).collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let mut formatter = self.formatter(&config)?;
        let mut token_count = 0;
        for result in &results {
            for (line, tokens) in &result.lines {
                token_count += tokens.len();
                formatter.format_line(&result.name, *line, tokens)?;
            }
        }
        formatter.finish()?;

        log::info!(
            "Produced {} tokens from {} source(s) in {:.2?}",
            token_count,
            results.len(),
            start.elapsed()
        );
        Ok(())
    }

    fn build_tokenizer(&self, config: &CliConfig, source: &LanguageSource) -> Result<Tokenizer> {
        let rules = source.load_rules()?;
        let resources = Resources::load(&self.resources.to_paths(&config.resources));
        if resources.is_degraded() {
            log::info!(
                "{} resource(s) degraded; affix analysis may differ",
                resources.diagnostics().len()
            );
        }

        let mut builder = TokenizerConfig::builder()
            .use_suffix(self.suffix || config.tokenizer.use_suffix)
            .use_prefix(self.prefix || config.tokenizer.use_prefix);
        if let Some(policy) = self.resolve_policy(config)? {
            builder = builder.policy(policy);
        }

        Ok(Tokenizer::with_rules(builder.build()?, rules, resources)?)
    }

    fn resolve_policy(&self, config: &CliConfig) -> Result<Option<SegmentationPolicy>> {
        if let Some(policy) = self.policy {
            return Ok(Some(policy.into()));
        }
        match &config.tokenizer.policy {
            Some(name) => {
                let policy = name
                    .parse::<SegmentationPolicy>()
                    .map_err(|e| CliError::ConfigError(e.to_string()))?;
                Ok(Some(policy))
            }
            None => Ok(None),
        }
    }

    fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer).pretty(config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

/// Tokenize every non-blank line of `text`
fn tokenize_text(
    tokenizer: &Tokenizer,
    text: &str,
    options: TokenizeOptions,
) -> Result<Vec<(usize, Vec<Token>)>> {
    let mut lines = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        lines.push((index + 1, tokenizer.tokenize_tokens(line, options)?));
    }
    Ok(lines)
}
