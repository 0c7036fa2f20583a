//! Reduplication detection
//!
//! A reduplication is a word run, a single hyphen, and the identical run
//! again (`ancang-ancang`). Halves that differ (`abi-abis`) do not qualify.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

/// A detected `X-X` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduplicationSpan {
    /// Byte range of the whole form in the scanned text
    pub range: Range<usize>,
    /// The matched text, hyphen included
    pub text: String,
}

impl ReduplicationSpan {
    /// The repeated half
    pub fn base(&self) -> &str {
        self.text
            .split_once('-')
            .map_or(self.text.as_str(), |(base, _)| base)
    }
}

fn word_runs() -> &'static Regex {
    static WORD_RUN: OnceLock<Regex> = OnceLock::new();
    WORD_RUN.get_or_init(|| Regex::new(r"\w+").expect("static pattern is valid"))
}

/// Find every reduplicated form in `text`, left to right
///
/// Matches never overlap: in `lari-lari-lari` only the first two runs form a
/// span and the trailing run is left alone.
pub fn find_reduplications(text: &str) -> Vec<ReduplicationSpan> {
    let runs: Vec<Range<usize>> = word_runs().find_iter(text).map(|m| m.range()).collect();
    let mut spans = Vec::new();

    let mut i = 0;
    while i + 1 < runs.len() {
        let (left, right) = (&runs[i], &runs[i + 1]);
        let joined_by_hyphen = right.start == left.end + 1 && text.as_bytes()[left.end] == b'-';

        if joined_by_hyphen && text[left.clone()] == text[right.clone()] {
            spans.push(ReduplicationSpan {
                range: left.start..right.end,
                text: text[left.start..right.end].to_string(),
            });
            i += 2;
        } else {
            i += 1;
        }
    }

    log::trace!("found {} reduplications", spans.len());
    spans
}

/// Texts of every reduplicated form in `text`, in source order
pub fn extract_reduplications(text: &str) -> Vec<String> {
    find_reduplications(text)
        .into_iter()
        .map(|span| span.text)
        .collect()
}
