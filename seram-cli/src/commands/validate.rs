//! Validate command implementation

use anyhow::Result;
use clap::Args;
use seram_core::LanguageRules;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language rule file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match LanguageRules::from_file(&self.language_config) {
            Ok(rules) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", rules.code());
                println!("  Language name: {}", rules.name());
                println!("  Default policy: {}", rules.policy());
                println!("  Suffix rules: {}", affix_list(rules.suffixes().iter().map(|r| &r.affix)));
                println!("  Prefix rules: {}", affix_list(rules.prefixes().iter().map(|r| &r.affix)));
                println!("  Paragog suffixes: {}", affix_list(rules.paragog_suffixes().iter()));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

fn affix_list<'a>(affixes: impl Iterator<Item = &'a String>) -> String {
    let items: Vec<&str> = affixes.map(String::as_str).collect();
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
