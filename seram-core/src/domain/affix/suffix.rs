use std::collections::HashSet;
use std::sync::Arc;

use super::{AffixAnalyser, AffixPosition, AffixRule};
use crate::resources::{CharClasses, Lexicon};

/// Flags words ending in a productive suffix
///
/// Rules are tried longest affix first and the first affix that ends the
/// word claims it, so a word ending in `ra` is never an `a` candidate. The
/// gate is checked on the character right before the affix.
#[derive(Debug, Clone)]
pub struct SuffixAnalyser {
    rules: Vec<AffixRule>,
    /// Lexicon entries ending in each rule's affix
    lemmas: Vec<HashSet<String>>,
    classes: Arc<CharClasses>,
}

impl SuffixAnalyser {
    /// Create an analyser; `rules` must be ordered longest affix first
    pub fn new(rules: &[AffixRule], lexicon: &Lexicon, classes: Arc<CharClasses>) -> Self {
        let lemmas = rules
            .iter()
            .map(|rule| {
                lexicon
                    .entries_with_suffix(&rule.affix)
                    .map(str::to_string)
                    .collect()
            })
            .collect();

        Self {
            rules: rules.to_vec(),
            lemmas,
            classes,
        }
    }

    /// Configured rules
    pub fn rules(&self) -> &[AffixRule] {
        &self.rules
    }
}

impl AffixAnalyser for SuffixAnalyser {
    fn position(&self) -> AffixPosition {
        AffixPosition::Suffix
    }

    fn classify(&self, word: &str) -> Option<&AffixRule> {
        let (index, rule) = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| word.ends_with(rule.affix.as_str()))?;

        if self.lemmas[index].contains(word) {
            return None;
        }

        let before = word.chars().rev().nth(rule.len())?;
        match rule.gate {
            Some(gate) if !gate.admits(before, &self.classes) => None,
            _ => Some(rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{get_rules, Language};

    fn analyser(lexicon: &[&str]) -> SuffixAnalyser {
        let rules = get_rules(Language::Seram).unwrap();
        SuffixAnalyser::new(
            rules.suffixes(),
            &Lexicon::from_words(lexicon),
            Arc::new(CharClasses::default()),
        )
    }

    fn markers(analyser: &SuffixAnalyser, word: &str) -> Option<String> {
        analyser.classify(word).map(|r| r.marker.clone())
    }

    #[test]
    fn test_ra_gated_by_vowel() {
        let analyser = analyser(&["dana"]);
        assert_eq!(markers(&analyser, "sara"), Some("_ra".to_string()));
        assert_eq!(markers(&analyser, "putra"), None);
    }

    #[test]
    fn test_ra_word_is_never_a_candidate() {
        // "putra" fails the ra gate but must not fall through to the a rule
        let analyser = analyser(&[]);
        assert_eq!(markers(&analyser, "putra"), None);
    }

    #[test]
    fn test_a_gated_by_consonant() {
        let analyser = analyser(&[]);
        assert_eq!(markers(&analyser, "kata"), Some("_a".to_string()));
        assert_eq!(markers(&analyser, "bua"), None);
        assert_eq!(markers(&analyser, "a"), None);
    }

    #[test]
    fn test_lexicon_entries_excluded() {
        let analyser = analyser(&["dana", "kira"]);
        assert_eq!(markers(&analyser, "dana"), None);
        assert_eq!(markers(&analyser, "kira"), None);
        assert_eq!(markers(&analyser, "nama"), Some("_a".to_string()));
    }

    #[test]
    fn test_too_short_for_gate() {
        let analyser = analyser(&[]);
        assert_eq!(markers(&analyser, "ra"), None);
        assert_eq!(markers(&analyser, "ara"), Some("_ra".to_string()));
    }

    #[test]
    fn test_analyse_stream() {
        let analyser = analyser(&["dana"]);
        let found = analyser.analyse("Sara dana  putra kata sara").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found["sara"].marker, "_ra");
        assert_eq!(found["kata"].marker, "_a");
    }

    #[test]
    fn test_analyse_rejects_blank() {
        let analyser = analyser(&[]);
        assert!(analyser.analyse("").unwrap_err().is_invalid_argument());
        assert!(analyser.analyse("  \t").unwrap_err().is_invalid_argument());
    }
}
