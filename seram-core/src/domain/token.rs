//! Token model shared by the segmenter and the tokenizer output

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a token represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Run of word characters
    Word,
    /// Punctuation mark or multi-character unit such as an ellipsis
    Punctuation,
    /// Protected reduplicated form, e.g. `lari-lari`
    Reduplication,
    /// Prefix marker split off a root, e.g. `na_`
    Prefix,
    /// Suffix marker split off a root, e.g. `_ra`
    Suffix,
}

impl TokenKind {
    /// Lower-case name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Reduplication => "reduplication",
            TokenKind::Prefix => "prefix",
            TokenKind::Suffix => "suffix",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single output token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token text
    pub text: String,
    /// Token classification
    pub kind: TokenKind,
}

impl Token {
    /// Create a token
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Word token
    pub fn word(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Word)
    }

    /// Punctuation token
    pub fn punctuation(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Punctuation)
    }

    /// Whether this is a word made only of alphabetic characters
    pub fn is_alphabetic_word(&self) -> bool {
        self.kind == TokenKind::Word
            && !self.text.is_empty()
            && self.text.chars().all(char::is_alphabetic)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alphabetic_word() {
        assert!(Token::word("kata").is_alphabetic_word());
        assert!(Token::word("Ŋara").is_alphabetic_word());
        assert!(!Token::word("abc123").is_alphabetic_word());
        assert!(!Token::word("a_b").is_alphabetic_word());
        assert!(!Token::punctuation(".").is_alphabetic_word());
        assert!(!Token::new("lari-lari", TokenKind::Reduplication).is_alphabetic_word());
    }

    #[test]
    fn test_serialize_kind() {
        let json = serde_json::to_string(&Token::new("_ra", TokenKind::Suffix)).unwrap();
        assert_eq!(json, r#"{"text":"_ra","kind":"suffix"}"#);
    }
}
