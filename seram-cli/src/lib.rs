//! Seram CLI library
//!
//! This library provides the command-line interface for the Geser/Seram
//! tokenizer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::{CliError, CliResult};
