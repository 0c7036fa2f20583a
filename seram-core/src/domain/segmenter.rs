//! Text segmentation
//!
//! Two policies share one segmenter. `PunctuationAsToken` emits every
//! punctuation mark as its own token. `PunctuationAsDelimiter` turns
//! punctuation into whitespace and keeps only the words. Protected
//! reduplications pass through both policies untouched.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::shield::{Segment, ShieldedText};
use crate::domain::token::{Token, TokenKind};
use crate::error::{Result, TokenizerError};
use crate::language::LanguageRules;

/// How punctuation is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentationPolicy {
    /// Word runs and single punctuation marks are both tokens
    #[default]
    PunctuationAsToken,
    /// Punctuation separates words and is dropped
    PunctuationAsDelimiter,
}

impl SegmentationPolicy {
    /// All policies
    pub fn all() -> &'static [SegmentationPolicy] {
        &[
            SegmentationPolicy::PunctuationAsToken,
            SegmentationPolicy::PunctuationAsDelimiter,
        ]
    }

    /// Configuration spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentationPolicy::PunctuationAsToken => "punctuation-as-token",
            SegmentationPolicy::PunctuationAsDelimiter => "punctuation-as-delimiter",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            SegmentationPolicy::PunctuationAsToken => "punctuation marks become separate tokens",
            SegmentationPolicy::PunctuationAsDelimiter => "punctuation is dropped and splits words",
        }
    }
}

impl fmt::Display for SegmentationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentationPolicy {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "punctuation-as-token" | "token" | "tokens" => Ok(SegmentationPolicy::PunctuationAsToken),
            "punctuation-as-delimiter" | "delimiter" | "delimiters" => {
                Ok(SegmentationPolicy::PunctuationAsDelimiter)
            }
            other => Err(TokenizerError::Configuration(format!(
                "unknown segmentation policy '{other}'"
            ))),
        }
    }
}

/// Splits shielded text into raw tokens
#[derive(Debug, Clone)]
pub struct Segmenter {
    policy: SegmentationPolicy,
    token_pattern: Regex,
    ellipsis: Vec<String>,
    delimiters: HashSet<char>,
}

impl Segmenter {
    /// Create a segmenter
    ///
    /// `ellipsis` lists multi-character punctuation units; they are tried
    /// before single characters, longest first.
    pub fn new(policy: SegmentationPolicy, ellipsis: &[String], delimiters: &[char]) -> Result<Self> {
        let mut units: Vec<&String> = ellipsis.iter().filter(|u| !u.is_empty()).collect();
        units.sort_by_key(|u| std::cmp::Reverse(u.chars().count()));

        let mut pattern = String::new();
        if !units.is_empty() {
            let alternatives: Vec<String> = units.iter().map(|u| regex::escape(u)).collect();
            pattern.push_str(&format!("(?P<unit>{})|", alternatives.join("|")));
        }
        pattern.push_str(r"(?P<word>\w+)|(?P<punct>[^\w\s])");

        let token_pattern = Regex::new(&pattern)
            .map_err(|e| TokenizerError::Configuration(format!("invalid segmentation pattern: {e}")))?;

        Ok(Self {
            policy,
            token_pattern,
            ellipsis: units.into_iter().cloned().collect(),
            delimiters: delimiters.iter().copied().collect(),
        })
    }

    /// Create a segmenter from a language rule-set
    pub fn from_rules(rules: &LanguageRules, policy: SegmentationPolicy) -> Result<Self> {
        Self::new(policy, rules.ellipsis(), rules.delimiters())
    }

    /// Active policy
    pub fn policy(&self) -> SegmentationPolicy {
        self.policy
    }

    /// Segment shielded text
    pub fn segment(&self, shielded: &ShieldedText<'_>) -> Vec<Token> {
        let tokens = match self.policy {
            SegmentationPolicy::PunctuationAsToken => self.segment_tokens(shielded),
            SegmentationPolicy::PunctuationAsDelimiter => self.segment_delimited(shielded),
        };
        log::trace!("segmented into {} tokens ({})", tokens.len(), self.policy);
        tokens
    }

    fn segment_tokens(&self, shielded: &ShieldedText<'_>) -> Vec<Token> {
        let mut tokens = Vec::new();

        for segment in shielded.segments() {
            match segment {
                Segment::Protected { text, .. } => {
                    tokens.push(Token::new(*text, TokenKind::Reduplication));
                }
                Segment::Plain { text, .. } => {
                    for caps in self.token_pattern.captures_iter(text) {
                        let (m, kind) = match caps.name("word") {
                            Some(m) => (m, TokenKind::Word),
                            None => match caps.name("unit").or_else(|| caps.name("punct")) {
                                Some(m) => (m, TokenKind::Punctuation),
                                None => continue,
                            },
                        };
                        tokens.push(Token::new(m.as_str(), kind));
                    }
                }
            }
        }

        tokens
    }

    fn segment_delimited(&self, shielded: &ShieldedText<'_>) -> Vec<Token> {
        let source = shielded.source();
        let mut tokens = Vec::new();
        let mut pending = Pending::default();

        for segment in shielded.segments() {
            match segment {
                Segment::Protected { text, .. } => pending.push_protected(text),
                Segment::Plain { text, offset } => {
                    let cleaned = self.blank_delimiters(source, text, *offset);
                    for ch in cleaned.chars() {
                        if ch.is_whitespace() {
                            pending.flush(&mut tokens);
                        } else {
                            pending.push_plain(ch);
                        }
                    }
                }
            }
        }
        pending.flush(&mut tokens);

        tokens
    }

    /// Replace delimiters, ellipsis units and loose hyphens with spaces
    fn blank_delimiters(&self, source: &str, text: &str, offset: usize) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        let mut pos = offset;

        while let Some(ch) = rest.chars().next() {
            if let Some(unit) = self.ellipsis.iter().find(|u| rest.starts_with(u.as_str())) {
                out.push(' ');
                rest = &rest[unit.len()..];
                pos += unit.len();
                continue;
            }

            let blank = if ch == '-' {
                // Inner hyphens of compounds survive; lone or edge hyphens do not
                let before = source[..pos].chars().next_back();
                let after = source[pos + 1..].chars().next();
                !(before.is_some_and(is_word_char) && after.is_some_and(is_word_char))
            } else {
                self.delimiters.contains(&ch)
            };

            out.push(if blank { ' ' } else { ch });
            rest = &rest[ch.len_utf8()..];
            pos += ch.len_utf8();
        }

        out
    }
}

/// Token being assembled by the delimiter policy
#[derive(Default)]
struct Pending {
    text: String,
    protected_segments: usize,
    has_plain: bool,
}

impl Pending {
    fn push_protected(&mut self, text: &str) {
        self.text.push_str(text);
        self.protected_segments += 1;
    }

    fn push_plain(&mut self, ch: char) {
        self.text.push(ch);
        self.has_plain = true;
    }

    fn flush(&mut self, tokens: &mut Vec<Token>) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let protected_segments = std::mem::take(&mut self.protected_segments);
        let has_plain = std::mem::take(&mut self.has_plain);

        // Only a lone protected segment keeps the reduplication kind
        let kind = if protected_segments == 1 && !has_plain {
            TokenKind::Reduplication
        } else if text.chars().any(is_word_char) {
            TokenKind::Word
        } else {
            TokenKind::Punctuation
        };
        tokens.push(Token::new(text, kind));
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shield::Shield;
    use crate::language::{get_rules, Language};

    fn segmenter(policy: SegmentationPolicy) -> Segmenter {
        let rules = get_rules(Language::Geser).unwrap();
        Segmenter::from_rules(&rules, policy).unwrap()
    }

    fn texts(policy: SegmentationPolicy, text: &str) -> Vec<String> {
        segmenter(policy)
            .segment(&Shield::shield(text))
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_token_policy_punctuation() {
        assert_eq!(
            texts(
                SegmentationPolicy::PunctuationAsToken,
                "Kata,dengan.tanda?!seru...kurung(tutup)."
            ),
            vec![
                "Kata", ",", "dengan", ".", "tanda", "?", "!", "seru", "...", "kurung", "(",
                "tutup", ")", "."
            ]
        );
    }

    #[test]
    fn test_token_policy_kinds() {
        let tokens = segmenter(SegmentationPolicy::PunctuationAsToken)
            .segment(&Shield::shield("lari-lari ... x - y"));
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Reduplication,
                TokenKind::Punctuation,
                TokenKind::Word,
                TokenKind::Punctuation,
                TokenKind::Word
            ]
        );
    }

    #[test]
    fn test_token_policy_keeps_reduplication_whole() {
        assert_eq!(
            texts(SegmentationPolicy::PunctuationAsToken, "Dia suka lari-lari di pagi hari."),
            vec!["Dia", "suka", "lari-lari", "di", "pagi", "hari", "."]
        );
    }

    #[test]
    fn test_token_policy_splits_plain_hyphen() {
        assert_eq!(
            texts(SegmentationPolicy::PunctuationAsToken, "abi-abis"),
            vec!["abi", "-", "abis"]
        );
    }

    #[test]
    fn test_delimiter_policy_drops_punctuation() {
        assert_eq!(
            texts(
                SegmentationPolicy::PunctuationAsDelimiter,
                "Kata,dengan.tanda?!seru...kurung(tutup)."
            ),
            vec!["Kata", "dengan", "tanda", "seru", "kurung", "tutup"]
        );
    }

    #[test]
    fn test_delimiter_policy_hyphens() {
        assert_eq!(
            texts(
                SegmentationPolicy::PunctuationAsDelimiter,
                "abi-abis - lari-lari, -awal akhir-"
            ),
            vec!["abi-abis", "lari-lari", "awal", "akhir"]
        );
    }

    #[test]
    fn test_delimiter_policy_reduplication_kind() {
        let tokens = segmenter(SegmentationPolicy::PunctuationAsDelimiter)
            .segment(&Shield::shield("(makan-makan)"));
        assert_eq!(tokens, vec![Token::new("makan-makan", TokenKind::Reduplication)]);
    }

    #[test]
    fn test_delimiter_policy_glued_reduplication_is_word() {
        let segmenter = segmenter(SegmentationPolicy::PunctuationAsDelimiter);
        assert_eq!(
            segmenter.segment(&Shield::shield("x-lari-lari")),
            vec![Token::new("x-lari-lari", TokenKind::Word)]
        );
        assert_eq!(
            segmenter.segment(&Shield::shield("kata-kata.")),
            vec![Token::new("kata-kata", TokenKind::Reduplication)]
        );
    }

    #[test]
    fn test_empty_input() {
        for policy in SegmentationPolicy::all() {
            assert!(texts(*policy, "").is_empty());
            assert!(texts(*policy, "   \n\t").is_empty());
        }
        assert!(texts(SegmentationPolicy::PunctuationAsDelimiter, "... , !").is_empty());
    }

    #[test]
    fn test_without_ellipsis_units() {
        let segmenter = Segmenter::new(SegmentationPolicy::PunctuationAsToken, &[], &['.']).unwrap();
        let tokens: Vec<_> = segmenter
            .segment(&Shield::shield("a..."))
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(tokens, vec!["a", ".", ".", "."]);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "delimiter".parse::<SegmentationPolicy>().unwrap(),
            SegmentationPolicy::PunctuationAsDelimiter
        );
        assert_eq!(
            "punctuation-as-token".parse::<SegmentationPolicy>().unwrap(),
            SegmentationPolicy::PunctuationAsToken
        );
        assert!("words".parse::<SegmentationPolicy>().is_err());
    }
}
