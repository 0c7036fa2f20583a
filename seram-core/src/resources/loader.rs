//! Resource loading with local recovery
//!
//! A missing or unreadable file never aborts loading. The affected resource
//! is replaced by an empty set, a warning is logged, and a diagnostic is kept
//! so callers can report the degradation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::resources::{CharClasses, CharacterClassTable, Lexicon};

/// Conventional file name of the lexicon inside a data directory
pub const LEXICON_FILE: &str = "geser_word.txt";
/// Conventional file name of the vowel table inside a data directory
pub const VOWELS_FILE: &str = "vocal.txt";
/// Conventional file name of the consonant table inside a data directory
pub const CONSONANTS_FILE: &str = "consonant.txt";

/// Locations of the external resources
///
/// An unset character-class path selects the built-in table. An unset
/// lexicon path yields an empty lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePaths {
    /// Lexicon file (one word-form per line)
    pub lexicon: Option<PathBuf>,
    /// Vowel table file (one character per line)
    pub vowels: Option<PathBuf>,
    /// Consonant table file (one character per line)
    pub consonants: Option<PathBuf>,
}

impl ResourcePaths {
    /// Paths using the conventional file names inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            lexicon: Some(dir.join(LEXICON_FILE)),
            vowels: Some(dir.join(VOWELS_FILE)),
            consonants: Some(dir.join(CONSONANTS_FILE)),
        }
    }

    /// Set the lexicon path
    pub fn with_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon = Some(path.into());
        self
    }

    /// Set the vowel table path
    pub fn with_vowels(mut self, path: impl Into<PathBuf>) -> Self {
        self.vowels = Some(path.into());
        self
    }

    /// Set the consonant table path
    pub fn with_consonants(mut self, path: impl Into<PathBuf>) -> Self {
        self.consonants = Some(path.into());
        self
    }
}

/// Which resource a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Word-form lexicon
    Lexicon,
    /// Vowel table
    Vowels,
    /// Consonant table
    Consonants,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Lexicon => write!(f, "lexicon"),
            ResourceKind::Vowels => write!(f, "vowel table"),
            ResourceKind::Consonants => write!(f, "consonant table"),
        }
    }
}

/// A recovered resource failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDiagnostic {
    /// Affected resource
    pub kind: ResourceKind,
    /// Configured path, if any
    pub path: Option<PathBuf>,
    /// What went wrong
    pub message: String,
}

impl fmt::Display for ResourceDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} ({}): {}", self.kind, path.display(), self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// Loaded, read-only resources shared by every tokenizer call
#[derive(Debug, Clone)]
pub struct Resources {
    lexicon: Arc<Lexicon>,
    classes: Arc<CharClasses>,
    diagnostics: Vec<ResourceDiagnostic>,
}

impl Resources {
    /// Wrap already-built resources
    pub fn new(lexicon: Lexicon, classes: CharClasses) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            classes: Arc::new(classes),
            diagnostics: Vec::new(),
        }
    }

    /// Load every resource named in `paths`, recovering from failures
    pub fn load(paths: &ResourcePaths) -> Self {
        let mut diagnostics = Vec::new();

        let lexicon = match &paths.lexicon {
            Some(path) => match Lexicon::from_file(path) {
                Ok(lexicon) => {
                    log::debug!("loaded {} lexicon entries from {}", lexicon.len(), path.display());
                    lexicon
                }
                Err(e) => {
                    record(
                        &mut diagnostics,
                        ResourceKind::Lexicon,
                        Some(path.as_path()),
                        e.to_string(),
                    );
                    Lexicon::new()
                }
            },
            None => {
                record(
                    &mut diagnostics,
                    ResourceKind::Lexicon,
                    None,
                    "no lexicon configured; every word is treated as unknown".to_string(),
                );
                Lexicon::new()
            }
        };

        let vowels = load_table(
            &mut diagnostics,
            ResourceKind::Vowels,
            paths.vowels.as_deref(),
            CharacterClassTable::default_vowels,
        );
        let consonants = load_table(
            &mut diagnostics,
            ResourceKind::Consonants,
            paths.consonants.as_deref(),
            CharacterClassTable::default_consonants,
        );

        Self {
            lexicon: Arc::new(lexicon),
            classes: Arc::new(CharClasses::new(vowels, consonants)),
            diagnostics,
        }
    }

    /// The lexicon
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// The character classes
    pub fn classes(&self) -> &Arc<CharClasses> {
        &self.classes
    }

    /// Failures recovered during loading
    pub fn diagnostics(&self) -> &[ResourceDiagnostic] {
        &self.diagnostics
    }

    /// Whether any resource was degraded
    pub fn is_degraded(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(Lexicon::new(), CharClasses::default())
    }
}

fn load_table(
    diagnostics: &mut Vec<ResourceDiagnostic>,
    kind: ResourceKind,
    path: Option<&Path>,
    builtin: fn() -> CharacterClassTable,
) -> CharacterClassTable {
    let Some(path) = path else {
        return builtin();
    };

    match CharacterClassTable::from_file(path) {
        Ok(table) => {
            if table.is_empty() {
                log::warn!("{kind} at {} has no entries", path.display());
            }
            table
        }
        Err(e) => {
            record(diagnostics, kind, Some(path), e.to_string());
            CharacterClassTable::default()
        }
    }
}

fn record(
    diagnostics: &mut Vec<ResourceDiagnostic>,
    kind: ResourceKind,
    path: Option<&Path>,
    message: String,
) {
    let diagnostic = ResourceDiagnostic {
        kind,
        path: path.map(Path::to_path_buf),
        message,
    };
    log::warn!("{diagnostic}; continuing with an empty {kind}");
    diagnostics.push(diagnostic);
}
