//! Documents to segment, from wherever they live
//!
//! Every source is decoded to a `String` before segmentation starts, so a
//! read or decoding failure never leaves a document half segmented.

use crate::error::{EngineError, Result};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// A document waiting to be segmented
pub enum Input {
    /// Text already in memory
    Text(String),
    /// UTF-8 file
    File(PathBuf),
    /// UTF-8 bytes
    Bytes(Vec<u8>),
    /// Reader stream (stdin, sockets, ...)
    Reader(Box<dyn Read + Send>),
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Short description used in errors and logs
    pub fn describe(&self) -> String {
        match self {
            Input::Text(text) => format!("<{} bytes of text>", text.len()),
            Input::File(path) => path.display().to_string(),
            Input::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
            Input::Reader(_) => "<reader>".to_string(),
        }
    }

    /// Read the whole document into a string
    pub fn to_text(self) -> Result<String> {
        let name = self.describe();
        let read_failed = |e: std::io::Error| EngineError::IoError(format!("{name}: {e}"));

        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => fs::read(path).map_err(read_failed)?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(read_failed)?;
                buffer
            }
        };

        String::from_utf8(bytes)
            .map_err(|e| EngineError::EncodingError(format!("{name} is not valid UTF-8: {e}")))
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input({})", self.describe())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_owned())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
