//! Output types for the tokenizer

use std::time::Duration;

use crate::domain::segmenter::SegmentationPolicy;
use crate::domain::token::{Token, TokenKind};

/// Tokenization output with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Tokens in source order
    pub tokens: Vec<Token>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

impl Output {
    /// Token texts
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Tokens of one kind
    pub fn tokens_of(&self, kind: TokenKind) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.kind == kind)
    }
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Language code of the rule-set used
    pub language: String,
    /// Segmentation policy used
    pub policy: SegmentationPolicy,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    /// Number of tokens emitted
    pub token_count: usize,
    /// Number of reduplicated forms kept whole
    pub reduplication_count: usize,
    /// Number of words split into root and marker
    pub affix_split_count: usize,
}

impl ProcessingStats {
    /// Collect statistics for a finished call
    pub fn collect(text: &str, tokens: &[Token]) -> Self {
        let count = |kind| tokens.iter().filter(|t| t.kind == kind).count();
        Self {
            bytes_processed: text.len(),
            chars_processed: text.chars().count(),
            token_count: tokens.len(),
            reduplication_count: count(TokenKind::Reduplication),
            affix_split_count: count(TokenKind::Prefix) + count(TokenKind::Suffix),
        }
    }
}
