//! Paragog merging
//!
//! A root followed by a detached paragog (`lihat a`) is merged back into one
//! word (`lihata`). The pass runs once, left to right, and never re-scans a
//! merged word.

use regex::Regex;

use crate::error::{Result, TokenizerError};

/// Merges detached paragog suffixes into the preceding word
#[derive(Debug, Clone)]
pub struct ParagogNormalizer {
    pattern: Regex,
}

impl ParagogNormalizer {
    /// Create a normaliser for the given suffixes
    pub fn new<S: AsRef<str>>(suffixes: &[S]) -> Result<Self> {
        let mut alternatives: Vec<&str> = suffixes
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| !s.is_empty())
            .collect();
        if alternatives.is_empty() {
            return Err(TokenizerError::Configuration(
                "paragog normaliser needs at least one suffix".to_string(),
            ));
        }
        alternatives.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));

        let escaped: Vec<String> = alternatives.iter().map(|s| regex::escape(s)).collect();
        let pattern = Regex::new(&format!(r"(\w+)\s+({})", escaped.join("|")))
            .map_err(|e| TokenizerError::Configuration(format!("invalid paragog pattern: {e}")))?;

        Ok(Self { pattern })
    }

    /// Normalise every sentence
    ///
    /// Each sentence must hold at least two whitespace-separated words;
    /// otherwise nothing is processed and an invalid argument is returned.
    pub fn normalize<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Vec<String>> {
        for sentence in sentences {
            let sentence = sentence.as_ref();
            if sentence.split_whitespace().nth(1).is_none() {
                return Err(TokenizerError::invalid_argument(format!(
                    "each sentence must contain at least two words: '{sentence}'"
                )));
            }
        }

        Ok(sentences
            .iter()
            .map(|s| self.normalize_sentence(s.as_ref()))
            .collect())
    }

    /// Merge paragogs in one sentence
    pub fn normalize_sentence(&self, sentence: &str) -> String {
        let mut out = String::with_capacity(sentence.len());
        let mut copied = 0;
        let mut search = 0;

        while let Some(caps) = self.pattern.captures_at(sentence, search) {
            let (Some(whole), Some(word), Some(suffix)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                break;
            };

            // The suffix must stand alone: whitespace or end of sentence follows
            let standalone = sentence[whole.end()..]
                .chars()
                .next()
                .map_or(true, char::is_whitespace);

            if standalone {
                out.push_str(&sentence[copied..whole.start()]);
                out.push_str(word.as_str());
                out.push_str(suffix.as_str());
                copied = whole.end();
                search = whole.end();
            } else {
                let step = sentence[whole.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                search = whole.start() + step;
            }
        }

        out.push_str(&sentence[copied..]);
        out
    }
}

/// Merge paragogs using the given suffixes
pub fn normalize_paragogs<S: AsRef<str>, T: AsRef<str>>(sentences: &[S], suffixes: &[T]) -> Result<Vec<String>> {
    ParagogNormalizer::new(suffixes)?.normalize(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> ParagogNormalizer {
        ParagogNormalizer::new(&["a", "ra"]).unwrap()
    }

    #[test]
    fn test_merge_basic() {
        let n = normalizer();
        assert_eq!(n.normalize_sentence("lihat a"), "lihata");
        assert_eq!(n.normalize_sentence("dia pergi ra ke pasar"), "dia pergira ke pasar");
    }

    #[test]
    fn test_suffix_must_stand_alone() {
        let n = normalizer();
        assert_eq!(n.normalize_sentence("saya ambil rumah"), "saya ambil rumah");
        assert_eq!(n.normalize_sentence("ini apa"), "ini apa");
    }

    #[test]
    fn test_single_pass() {
        let n = normalizer();
        assert_eq!(n.normalize_sentence("x a a"), "xa a");
        assert_eq!(n.normalize_sentence("x a y ra"), "xa yra");
    }

    #[test]
    fn test_whitespace_runs() {
        let n = normalizer();
        assert_eq!(n.normalize_sentence("lihat \t a  lagi"), "lihata  lagi");
    }

    #[test]
    fn test_requires_two_words() {
        let err = normalize_paragogs(&["lihat a", "sendiri"], &["a", "ra"]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("sendiri"));
        assert!(normalize_paragogs(&["   "], &["a"]).is_err());
    }

    #[test]
    fn test_normalize_many() {
        let out = normalize_paragogs(&["lihat a", "pergi ra sekarang"], &["a", "ra"]).unwrap();
        assert_eq!(out, vec!["lihata", "pergira sekarang"]);
    }

    #[test]
    fn test_empty_suffix_list_rejected() {
        let empty: [&str; 0] = [];
        assert!(ParagogNormalizer::new(&empty).is_err());
    }
}
