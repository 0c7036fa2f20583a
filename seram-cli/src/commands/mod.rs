//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};
use seram_core::{Language, SegmentationPolicy};

pub mod common;
pub mod generate_config;
pub mod normalize;
pub mod redup;
pub mod tokenize;
pub mod unmatched;
pub mod validate;

/// Reduplication-aware tokenizer for Geser and Seram text
#[derive(Debug, Parser)]
#[command(name = "seram")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors and hide progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Tokenize(args) => args.execute(self.quiet),
            Commands::Unmatched(args) => args.execute(),
            Commands::Redup(args) => args.execute(),
            Commands::Normalize(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize text, protecting reduplicated forms
    Tokenize(tokenize::TokenizeArgs),

    /// List words that are missing from the lexicon
    Unmatched(unmatched::UnmatchedArgs),

    /// Extract reduplicated forms
    Redup(redup::RedupArgs),

    /// Merge detached paragog suffixes into the preceding word
    Normalize(normalize::NormalizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a language rule file
    Validate(validate::ValidateArgs),

    /// Generate a language rule template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available language rules
    Languages,

    /// List available output formats
    Formats,

    /// List segmentation policies
    Policies,
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for language in Language::all() {
                    println!(
                        "  {:<8} {:<5} {}",
                        language.code(),
                        language.short_code(),
                        language.name()
                    );
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      Tokens of each line separated by spaces");
                println!("  json      JSON array of lines with typed tokens");
                println!("  markdown  Markdown numbered list");
            }
            ListCommands::Policies => {
                println!("Available segmentation policies:");
                for policy in SegmentationPolicy::all() {
                    println!("  {:<26} {}", policy.as_str(), policy.description());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tokenize() {
        let cli = Cli::try_parse_from([
            "seram", "-vv", "tokenize", "-i", "a.txt", "--suffix", "-l", "seram",
        ])
        .unwrap();

        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Commands::Tokenize(args) => {
                assert_eq!(args.input.input, vec!["a.txt"]);
                assert!(args.suffix);
                assert!(!args.prefix);
                assert_eq!(args.language.language, Some(common::LanguageArg::Seram));
            }
            other => panic!("expected tokenize, got {other:?}"),
        }
    }

    #[test]
    fn test_language_flags_conflict() {
        let result = Cli::try_parse_from([
            "seram",
            "tokenize",
            "--text",
            "kata",
            "-l",
            "geser",
            "--language-config",
            "rules.toml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_text_and_input_conflict() {
        let result =
            Cli::try_parse_from(["seram", "tokenize", "--text", "kata", "-i", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let cli = Cli::try_parse_from(["seram", "list", "languages", "-q", "-vvv"]).unwrap();
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_list_commands_variants() {
        for (name, expected) in [
            ("languages", "Languages"),
            ("formats", "Formats"),
            ("policies", "Policies"),
        ] {
            let cli = Cli::try_parse_from(["seram", "list", name]).unwrap();
            let debug_str = format!("{:?}", cli.command);
            assert!(debug_str.contains(expected));
        }
    }

    #[test]
    fn test_threads_requires_parallel() {
        let result = Cli::try_parse_from(["seram", "tokenize", "-i", "a.txt", "-t", "4"]);
        assert!(result.is_err());
        let cli =
            Cli::try_parse_from(["seram", "tokenize", "-i", "a.txt", "-p", "-t", "4"]).unwrap();
        assert!(matches!(cli.command, Commands::Tokenize(ref a) if a.threads == Some(4)));
    }
}
