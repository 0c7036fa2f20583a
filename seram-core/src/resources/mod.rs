//! External collaborators of the tokenizer: lexicon and character classes

pub mod charclass;
pub mod lexicon;
pub mod loader;

pub use charclass::{CharClasses, CharacterClassTable};
pub use lexicon::{words_from_json, Lexicon};
pub use loader::{ResourceDiagnostic, ResourceKind, ResourcePaths, Resources};
