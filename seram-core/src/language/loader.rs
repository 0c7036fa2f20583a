//! Language rule-set loader
//!
//! Manages the embedded rule-sets with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Result, TokenizerError};
use crate::language::rules::LanguageRules;
use crate::language::Language;

/// Embedded rule-sets keyed by language
static EMBEDDED: OnceLock<HashMap<Language, Arc<LanguageRules>>> = OnceLock::new();

/// Raw TOML of an embedded rule-set
pub fn embedded_toml(language: Language) -> &'static str {
    match language {
        Language::Geser => include_str!("../../configs/languages/geser.toml"),
        Language::Seram => include_str!("../../configs/languages/seram.toml"),
    }
}

/// Rules for a built-in language
pub fn get_rules(language: Language) -> Result<Arc<LanguageRules>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        for language in Language::all() {
            match LanguageRules::from_toml_str(embedded_toml(*language)) {
                Ok(rules) => {
                    map.insert(*language, Arc::new(rules));
                }
                Err(e) => {
                    log::error!("failed to load embedded {language} rules: {e}");
                }
            }
        }
        map
    });

    embedded
        .get(&language)
        .cloned()
        .ok_or_else(|| TokenizerError::UnsupportedLanguage(language.code().to_string()))
}

/// Rules for a language code such as `"geser"` or `"srm"`
pub fn get_rules_by_code(code: &str) -> Result<Arc<LanguageRules>> {
    get_rules(code.parse()?)
}
