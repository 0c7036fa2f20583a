//! Reduplication-aware tokenizer for Geser and Seram text
//!
//! The pipeline protects reduplicated forms (`lari-lari`), segments the text
//! under a selectable punctuation policy and, on request, splits productive
//! suffixes (`-ra`, `-a`) and prefixes (`na-`, `da-`) from their roots.
//! Affix decisions consult a lexicon and vowel/consonant tables that are
//! loaded once and shared read-only.
//!
//! # Architecture
//!
//! - **Domain layer**: reduplication detection, shielding, segmentation,
//!   affix analysis and paragog merging
//! - **Language layer**: embedded TOML rule-sets for Geser and Seram
//! - **Resources**: lexicon and character-class tables with degraded loading
//! - **API layer**: configuration, input sources and the `Tokenizer`
//!
//! # Example
//!
//! ```rust
//! use seram_core::{Lexicon, CharClasses, Resources, TokenizeOptions, Tokenizer};
//!
//! let resources = Resources::new(Lexicon::from_words(["dana"]), CharClasses::default());
//! let tokenizer = Tokenizer::new(resources).unwrap();
//!
//! let tokens = tokenizer.tokenize("Dia suka lari-lari.").unwrap();
//! assert_eq!(tokens, vec!["Dia", "suka", "lari-lari", "."]);
//!
//! let split = tokenizer
//!     .tokenize_with("sara dana", TokenizeOptions::new(true, false))
//!     .unwrap();
//! assert_eq!(split, vec!["sa", "_ra", "dana"]);
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod language;
pub mod resources;

pub use api::{
    Input, Output, ProcessingMetadata, ProcessingStats, TokenizeOptions, Tokenizer,
    TokenizerConfig, TokenizerConfigBuilder,
};
pub use domain::{
    extract_reduplications, find_reduplications, normalize_paragogs, ParagogNormalizer,
    PlaceholderMap, ReduplicationSpan, SegmentationPolicy, Segmenter, Shield, ShieldedText, Token,
    TokenKind,
};
pub use error::{Result, TokenizerError};
pub use language::{Language, LanguageConfig, LanguageRules};
pub use resources::{
    words_from_json, CharClasses, CharacterClassTable, Lexicon, ResourceDiagnostic, ResourceKind,
    ResourcePaths, Resources,
};
