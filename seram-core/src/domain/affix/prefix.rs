use std::collections::HashSet;
use std::sync::Arc;

use super::{AffixAnalyser, AffixPosition, AffixRule};
use crate::resources::{CharClasses, Lexicon};

/// Flags words starting with a productive prefix
///
/// The built-in rule-sets leave prefixes ungated; a gate in an external
/// rule-set is checked on the character right after the prefix.
#[derive(Debug, Clone)]
pub struct PrefixAnalyser {
    rules: Vec<AffixRule>,
    /// Lexicon entries starting with each rule's affix
    lemmas: Vec<HashSet<String>>,
    classes: Arc<CharClasses>,
}

impl PrefixAnalyser {
    /// Create an analyser; `rules` must be ordered longest affix first
    pub fn new(rules: &[AffixRule], lexicon: &Lexicon, classes: Arc<CharClasses>) -> Self {
        let lemmas = rules
            .iter()
            .map(|rule| {
                lexicon
                    .entries_with_prefix(&rule.affix)
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

impl AffixAnalyser for PrefixAnalyser {
    fn position(&self) -> AffixPosition {
        AffixPosition::Prefix
    }

    fn classify(&self, word: &str) -> Option<&AffixRule> {
        let (index, rule) = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| word.starts_with(rule.affix.as_str()))?;

        if self.lemmas[index].contains(word) {
            return None;
        }

        let after = word.chars().nth(rule.len())?;
        match rule.gate {
            Some(gate) if !gate.admits(after, &self.classes) => None,
            _ => Some(rule),
        }
    }
}
