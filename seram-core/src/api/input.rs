//! Input abstraction for the tokenizer

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, TokenizerError};

/// Text sources the tokenizer can read
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input, must be UTF-8
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input as text
    pub fn into_text(self) -> Result<String> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                TokenizerError::Io(io::Error::new(
                    e.kind(),
                    format!("failed to read {}: {e}", path.display()),
                ))
            })?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                buffer
            }
        };
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_input_variants() {
        assert_eq!(Input::from_text("lari-lari").into_text().unwrap(), "lari-lari");
        assert_eq!(
            Input::from_bytes(b"kata".to_vec()).into_text().unwrap(),
            "kata"
        );
        assert_eq!(
            Input::from_reader(Cursor::new("dari reader"))
                .into_text()
                .unwrap(),
            "dari reader"
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let err = Input::from_bytes(vec![0xff, 0xfe]).into_text().unwrap_err();
        assert!(matches!(err, TokenizerError::Encoding(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/teks.txt").into_text().unwrap_err();
        assert!(matches!(err, TokenizerError::Io(_)));
        assert!(err.to_string().contains("teks.txt"));
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("rahasia"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("rahasia"));
    }
}
