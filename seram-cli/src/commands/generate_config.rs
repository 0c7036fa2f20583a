//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the affix rules and delimiters for your language");
        println!("2. Validate your configuration:");
        println!(
            "   seram validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for tokenizing:");
        println!(
            "   seram tokenize -i input.txt --suffix --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language configuration for {}

[metadata]
code = "{}"
name = "Custom Language"

[segmentation]
# "punctuation-as-token" keeps punctuation marks as tokens,
# "punctuation-as-delimiter" drops them and splits words on them
policy = "punctuation-as-token"

# Multi-character punctuation kept as a single token
ellipsis = ["..."]

# Characters dropped by the delimiter policy
delimiters = [".", ",", "!", "?", ";", ":", "'", "\"", "(", ")", "[", "]", "{{", "}}"]

# Suffix rules; the longest affix is tried first.
# The gate checks the character left of the suffix against the
# vowel or consonant table.
[[suffixes]]
affix = "ra"
marker = "_ra"
gate = "vowel"

[[suffixes]]
affix = "a"
marker = "_a"
gate = "consonant"

# Prefix rules; a gate is optional and checks the character right
# of the prefix.
[[prefixes]]
affix = "na"
marker = "na_"

[[prefixes]]
affix = "da"
marker = "da_"

# Detached endings merged back onto the preceding word
[paragog]
suffixes = ["a", "ra"]
"#,
            self.language_code, self.language_code
        )
    }
}
