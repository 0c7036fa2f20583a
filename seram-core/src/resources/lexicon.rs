//! Lexicon of known word-forms
//!
//! The lexicon is loaded once and never mutated afterwards, so it can be
//! shared across concurrent tokenizer calls behind an `Arc` without locking.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TokenizerError};

/// Immutable, case-sensitive set of known word-forms
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashSet<String>,
    /// Entries without an inner space, filtered once at construction
    single_words: HashSet<String>,
}

impl Lexicon {
    /// Create an empty lexicon (every word is unknown)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from word-forms; entries are trimmed and blanks skipped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: HashSet<String> = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                (!w.is_empty()).then(|| w.to_string())
            })
            .collect();

        let single_words = entries
            .iter()
            .filter(|w| !w.contains(' '))
            .cloned()
            .collect();

        Self {
            entries,
            single_words,
        }
    }

    /// Read one word-form per line from a reader
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = read_lines(reader)?;
        Ok(Self::from_words(lines))
    }

    /// Load a lexicon file, failing if it cannot be read
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TokenizerError::resource(path, e))?;
        Self::from_reader(BufReader::new(file)).map_err(|e| TokenizerError::resource(path, e))
    }

    /// Whether the exact word-form is a lexicon entry
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    /// Whether the word-form is a single-word (space-free) entry
    #[inline]
    pub fn contains_single_word(&self, word: &str) -> bool {
        self.single_words.contains(word)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries that contain no space
    pub fn single_word_entries(&self) -> impl Iterator<Item = &str> {
        self.single_words.iter().map(String::as_str)
    }

    /// Single-word entries starting with `prefix`
    pub fn entries_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.single_word_entries()
            .filter(move |w| w.starts_with(prefix))
    }

    /// Single-word entries ending with `suffix`
    pub fn entries_with_suffix<'a>(&'a self, suffix: &'a str) -> impl Iterator<Item = &'a str> {
        self.single_word_entries().filter(move |w| w.ends_with(suffix))
    }

    /// Return the words absent from the lexicon, in input order
    ///
    /// Matching is case-sensitive: `"Kata"` and `"kata"` are distinct.
    /// An empty word list is rejected as an invalid argument.
    pub fn find_unmatched_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>> {
        if words.is_empty() {
            return Err(TokenizerError::invalid_argument(
                "input 'words' cannot be an empty list",
            ));
        }

        Ok(words
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| !self.contains(w))
            .map(str::to_string)
            .collect())
    }
}

/// Read all lines, dropping a leading byte-order mark
pub(crate) fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i == 0 {
            lines.push(line.trim_start_matches('\u{feff}').to_string());
        } else {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Convert a JSON value into a word list
///
/// Only an array of strings is accepted; anything else is an invalid argument.
pub fn words_from_json(value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        TokenizerError::invalid_argument(format!(
            "input 'words' must be a list, got {}",
            json_type_name(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                TokenizerError::invalid_argument(format!(
                    "element {i} of 'words' must be a string, got {}",
                    json_type_name(item)
                ))
            })
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
