//! Vowel and consonant tables used by suffix analysis

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TokenizerError};
use crate::resources::lexicon::read_lines;

const DEFAULT_VOWELS: &str = include_str!("../../data/vowels.txt");
const DEFAULT_CONSONANTS: &str = include_str!("../../data/consonants.txt");

/// Immutable set of single characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterClassTable {
    chars: HashSet<char>,
}

impl CharacterClassTable {
    /// Build a table from characters
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Build a table from one-character lines
    ///
    /// Blank lines are ignored. Lines holding more than one character are
    /// skipped with a warning.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars = HashSet::new();
        for line in lines {
            let entry = line.as_ref().trim();
            let mut it = entry.chars();
            match (it.next(), it.next()) {
                (None, _) => {}
                (Some(ch), None) => {
                    chars.insert(ch);
                }
                (Some(_), Some(_)) => {
                    log::warn!("skipping character-class entry {entry:?}: not a single character");
                }
            }
        }
        Self { chars }
    }

    /// Read one character per line from a reader
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        Ok(Self::from_lines(read_lines(reader)?))
    }

    /// Load a table file, failing if it cannot be read
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TokenizerError::resource(path, e))?;
        Self::from_reader(BufReader::new(file)).map_err(|e| TokenizerError::resource(path, e))
    }

    /// Built-in vowel table
    pub fn default_vowels() -> Self {
        Self::from_lines(DEFAULT_VOWELS.lines())
    }

    /// Built-in consonant table
    pub fn default_consonants() -> Self {
        Self::from_lines(DEFAULT_CONSONANTS.lines())
    }

    /// Membership test
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of characters in the table
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Vowel and consonant classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClasses {
    vowels: CharacterClassTable,
    consonants: CharacterClassTable,
}

impl CharClasses {
    /// Combine two tables
    pub fn new(vowels: CharacterClassTable, consonants: CharacterClassTable) -> Self {
        Self { vowels, consonants }
    }

    /// Whether `ch` is a vowel
    #[inline]
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(ch)
    }

    /// Whether `ch` is a consonant
    #[inline]
    pub fn is_consonant(&self, ch: char) -> bool {
        self.consonants.contains(ch)
    }

    /// The vowel table
    pub fn vowels(&self) -> &CharacterClassTable {
        &self.vowels
    }

    /// The consonant table
    pub fn consonants(&self) -> &CharacterClassTable {
        &self.consonants
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::new(
            CharacterClassTable::default_vowels(),
            CharacterClassTable::default_consonants(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let classes = CharClasses::default();
        for v in ['a', 'e', 'i', 'o', 'u'] {
            assert!(classes.is_vowel(v), "{v} should be a vowel");
            assert!(!classes.is_consonant(v));
        }
        for c in ['b', 'r', 't', 'k', 'ŋ'] {
            assert!(classes.is_consonant(c), "{c} should be a consonant");
            assert!(!classes.is_vowel(c));
        }
        assert_eq!(classes.vowels().len(), 5);
    }

    #[test]
    fn test_from_lines_skips_multichar_and_blank() {
        let table = CharacterClassTable::from_lines(["a", "", "  i ", "ng", "u"]);
        assert_eq!(table.len(), 3);
        assert!(table.contains('i'));
        assert!(!table.contains('n'));
    }

    #[test]
    fn test_from_file_missing() {
        let err = CharacterClassTable::from_file("/nonexistent/vocal.txt").unwrap_err();
        assert!(matches!(err, TokenizerError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_empty_classes_reject_everything() {
        let classes = CharClasses::new(
            CharacterClassTable::default(),
            CharacterClassTable::default(),
        );
        assert!(!classes.is_vowel('a'));
        assert!(!classes.is_consonant('t'));
    }
}
