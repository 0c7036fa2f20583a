//! Input pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use super::InputSource;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// Resolve command-line inputs, where `-` stands for stdin
///
/// No patterns at all also selects stdin.
pub fn resolve_sources(patterns: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, files): (Vec<&String>, Vec<&String>) = patterns.iter().partition(|p| *p == "-");

    let mut sources = Vec::new();
    if !stdin.is_empty() || patterns.is_empty() {
        sources.push(InputSource::Stdin);
    }
    if !files.is_empty() {
        let files: Vec<String> = files.into_iter().cloned().collect();
        sources.extend(resolve_patterns(&files)?.into_iter().map(InputSource::File));
    }

    Ok(sources)
}
