//! Affix analysis
//!
//! The suffix and prefix analysers flag words that carry a productive affix.
//! A word is excluded when it is itself a lexicon entry with that affix, and
//! a rule may additionally require a vowel or consonant next to the affix.
//! Confirmed words are split into a root token and a marker token.

mod prefix;
mod suffix;

pub use prefix::PrefixAnalyser;
pub use suffix::SuffixAnalyser;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::token::{Token, TokenKind};
use crate::error::{Result, TokenizerError};
use crate::resources::CharClasses;

/// Character class required next to an affix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonologicalGate {
    /// The neighbouring character must be a vowel
    Vowel,
    /// The neighbouring character must be a consonant
    Consonant,
}

impl PhonologicalGate {
    /// Configuration spelling of the gate
    pub fn as_str(&self) -> &'static str {
        match self {
            PhonologicalGate::Vowel => "vowel",
            PhonologicalGate::Consonant => "consonant",
        }
    }

    /// Whether `ch` passes the gate
    pub fn admits(&self, ch: char, classes: &CharClasses) -> bool {
        match self {
            PhonologicalGate::Vowel => classes.is_vowel(ch),
            PhonologicalGate::Consonant => classes.is_consonant(ch),
        }
    }
}

/// A compiled affix rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixRule {
    /// Lower-case affix, e.g. `ra`
    pub affix: String,
    /// Marker token emitted in place of the affix, e.g. `_ra`
    pub marker: String,
    /// Optional phonological gate
    pub gate: Option<PhonologicalGate>,
}

impl AffixRule {
    /// Affix length in characters
    pub fn len(&self) -> usize {
        self.affix.chars().count()
    }

    /// Whether the affix is empty
    pub fn is_empty(&self) -> bool {
        self.affix.is_empty()
    }
}

/// Side of the word an analyser inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixPosition {
    /// Start of the word
    Prefix,
    /// End of the word
    Suffix,
}

/// Common shape of the suffix and prefix analysers
pub trait AffixAnalyser: Send + Sync {
    /// Side of the word this analyser inspects
    fn position(&self) -> AffixPosition;

    /// Rule claiming a lower-case word, if the word is a candidate
    fn classify(&self, word: &str) -> Option<&AffixRule>;

    /// Classify a whitespace-joined word stream
    ///
    /// The stream is lower-cased before classification. Empty or blank input
    /// is an invalid argument.
    fn analyse(&self, words: &str) -> Result<HashMap<String, AffixRule>> {
        if words.trim().is_empty() {
            return Err(TokenizerError::invalid_argument(
                "input 'words' cannot be an empty string",
            ));
        }

        let lowered = words.to_lowercase();
        let mut found = HashMap::new();
        for word in lowered.split_whitespace() {
            if found.contains_key(word) {
                continue;
            }
            if let Some(rule) = self.classify(word) {
                found.insert(word.to_string(), rule.clone());
            }
        }
        Ok(found)
    }
}

/// Candidates found in one tokenizer call
#[derive(Debug, Clone, Default)]
pub struct AffixCandidates {
    suffixes: HashMap<String, AffixRule>,
    prefixes: HashMap<String, AffixRule>,
}

impl AffixCandidates {
    /// Create an empty candidate set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an analyser's findings
    pub fn extend(&mut self, position: AffixPosition, found: HashMap<String, AffixRule>) {
        match position {
            AffixPosition::Suffix => self.suffixes.extend(found),
            AffixPosition::Prefix => self.prefixes.extend(found),
        }
    }

    /// Suffix rule for a lower-case word
    pub fn suffix_for(&self, word: &str) -> Option<&AffixRule> {
        self.suffixes.get(word)
    }

    /// Prefix rule for a lower-case word
    pub fn prefix_for(&self, word: &str) -> Option<&AffixRule> {
        self.prefixes.get(word)
    }

    /// Total number of candidates
    pub fn len(&self) -> usize {
        self.suffixes.len() + self.prefixes.len()
    }

    /// Whether no candidate was found
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty() && self.prefixes.is_empty()
    }

    /// Split `token` if it is a candidate
    ///
    /// Candidates are keyed by their lower-case form and the token text is
    /// looked up as written, so a capitalised token such as `Sara` stays
    /// whole. Suffixes take precedence and a token is split at most once.
    pub fn split(&self, token: &Token) -> Option<[Token; 2]> {
        if !token.is_alphabetic_word() {
            return None;
        }
        let text = token.text.as_str();

        if let Some(rule) = self.suffix_for(text) {
            if let Some(root) = strip_suffix_nonempty(text, &rule.affix) {
                return Some([
                    Token::word(root),
                    Token::new(rule.marker.as_str(), TokenKind::Suffix),
                ]);
            }
        }

        if let Some(rule) = self.prefix_for(text) {
            if let Some(root) = strip_prefix_nonempty(text, &rule.affix) {
                return Some([
                    Token::new(rule.marker.as_str(), TokenKind::Prefix),
                    Token::word(root),
                ]);
            }
        }

        None
    }
}

/// Strip `affix` from the end of `text`, keeping a non-empty root
fn strip_suffix_nonempty<'a>(text: &'a str, affix: &str) -> Option<&'a str> {
    text.strip_suffix(affix).filter(|root| !root.is_empty())
}

/// Strip `affix` from the start of `text`, keeping a non-empty root
fn strip_prefix_nonempty<'a>(text: &'a str, affix: &str) -> Option<&'a str> {
    text.strip_prefix(affix).filter(|root| !root.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(affix: &str, marker: &str) -> AffixRule {
        AffixRule {
            affix: affix.to_string(),
            marker: marker.to_string(),
            gate: None,
        }
    }

    #[test]
    fn test_strip_helpers() {
        assert_eq!(strip_suffix_nonempty("sara", "ra"), Some("sa"));
        assert_eq!(strip_suffix_nonempty("saRA", "ra"), None);
        assert_eq!(strip_suffix_nonempty("ra", "ra"), None);
        assert_eq!(strip_suffix_nonempty("a", "ra"), None);
        assert_eq!(strip_prefix_nonempty("nadia", "na"), Some("dia"));
        assert_eq!(strip_prefix_nonempty("na", "na"), None);
        assert_eq!(strip_prefix_nonempty("ŋana", "na"), None);
    }

    #[test]
    fn test_gate_admits() {
        let classes = CharClasses::default();
        assert!(PhonologicalGate::Vowel.admits('a', &classes));
        assert!(!PhonologicalGate::Vowel.admits('t', &classes));
        assert!(PhonologicalGate::Consonant.admits('t', &classes));
        assert_eq!(PhonologicalGate::Consonant.as_str(), "consonant");
    }

    #[test]
    fn test_split_prefers_suffix() {
        let mut candidates = AffixCandidates::new();
        candidates.extend(
            AffixPosition::Suffix,
            HashMap::from([("nara".to_string(), rule("ra", "_ra"))]),
        );
        candidates.extend(
            AffixPosition::Prefix,
            HashMap::from([("nara".to_string(), rule("na", "na_"))]),
        );
        assert_eq!(candidates.len(), 2);

        let [root, marker] = candidates.split(&Token::word("nara")).unwrap();
        assert_eq!(root, Token::word("na"));
        assert_eq!(marker, Token::new("_ra", TokenKind::Suffix));
    }

    #[test]
    fn test_split_leaves_capitalised_tokens_whole() {
        let mut candidates = AffixCandidates::new();
        candidates.extend(
            AffixPosition::Suffix,
            HashMap::from([("sara".to_string(), rule("ra", "_ra"))]),
        );
        candidates.extend(
            AffixPosition::Prefix,
            HashMap::from([("nadia".to_string(), rule("na", "na_"))]),
        );
        assert!(candidates.split(&Token::word("Sara")).is_none());
        assert!(candidates.split(&Token::word("NADIA")).is_none());
        assert!(candidates.split(&Token::word("sara")).is_some());
        assert!(candidates.split(&Token::word("nadia")).is_some());
    }

    #[test]
    fn test_split_prefix_order() {
        let mut candidates = AffixCandidates::new();
        candidates.extend(
            AffixPosition::Prefix,
            HashMap::from([("dadu".to_string(), rule("da", "da_"))]),
        );
        let [marker, root] = candidates.split(&Token::word("dadu")).unwrap();
        assert_eq!(marker, Token::new("da_", TokenKind::Prefix));
        assert_eq!(root, Token::word("du"));
    }

    #[test]
    fn test_split_ignores_non_words() {
        let mut candidates = AffixCandidates::new();
        candidates.extend(
            AffixPosition::Suffix,
            HashMap::from([("sara".to_string(), rule("ra", "_ra"))]),
        );
        assert!(candidates
            .split(&Token::new("sara", TokenKind::Reduplication))
            .is_none());
        assert!(candidates.split(&Token::word("kata")).is_none());
    }
}
