//! Public tokenizer API
//!
//! This module provides the interface used by the CLI and by library
//! callers: configuration, input sources, the tokenizer, and its output.

mod config;
mod input;
mod output;
mod tokenizer;


pub use config::{TokenizeOptions, TokenizerConfig, TokenizerConfigBuilder};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats};
pub use tokenizer::Tokenizer;
