//! Redup command implementation

use anyhow::Result;
use clap::Args;
use seram_core::domain::protect_with_placeholders;
use seram_core::{find_reduplications, ReduplicationSpan};
use std::io::{self, Write};

use crate::commands::common::InputArgs;
use crate::input::{resolve_sources, InputSource};

/// Arguments for the redup command
#[derive(Debug, Args)]
pub struct RedupArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the placeholder-shielded text and its mapping instead
    #[arg(long)]
    pub shielded: bool,
}

impl RedupArgs {
    /// Execute the redup command
    pub fn execute(&self) -> Result<()> {
        let sources = match &self.input.text {
            Some(text) => vec![InputSource::Inline(text.clone())],
            None => resolve_sources(&self.input.input)?,
        };

        let mut out = io::stdout().lock();
        for source in &sources {
            let text = source.read()?;
            let spans = find_reduplications(&text);
            log::info!("{}: {} reduplication(s)", source.name(), spans.len());

            if self.shielded {
                write_shielded(&mut out, &text, &spans)?;
            } else {
                for span in &spans {
                    writeln!(out, "{}", span.text)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn write_shielded<W: Write>(out: &mut W, text: &str, spans: &[ReduplicationSpan]) -> Result<()> {
    let (shielded, map) = protect_with_placeholders(text, spans);
    writeln!(out, "{}", shielded.trim_end())?;
    for (placeholder, original) in map.iter() {
        writeln!(out, "{placeholder}\t{original}")?;
    }
    Ok(())
}
