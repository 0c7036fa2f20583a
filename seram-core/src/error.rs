//! Error types for tokenization

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised by the tokenizer and its collaborators
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// Input rejected before any processing started
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lexicon or character-class resource could not be read
    #[error("resource unavailable: {path}: {reason}")]
    ResourceUnavailable {
        /// Path of the resource that failed to load
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Invalid tokenizer or language configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Language code with no rule-set
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// I/O failure while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl TokenizerError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        TokenizerError::InvalidArgument(msg.into())
    }

    pub(crate) fn resource(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        TokenizerError::ResourceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error is the invalid-argument kind
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TokenizerError::InvalidArgument(_))
    }
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = TokenizerError::invalid_argument("words cannot be empty");
        assert_eq!(err.to_string(), "invalid argument: words cannot be empty");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_resource_unavailable_display() {
        let err = TokenizerError::resource("data/geser_word.txt", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "resource unavailable: data/geser_word.txt: No such file or directory"
        );
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TokenizerError = io.into();
        assert!(matches!(err, TokenizerError::Io(_)));
    }
}
