//! Dictionary loading
//!
//! The on-disk format is one word per line in ascending order by Unicode
//! scalar value. Loading happens once, before any segmentation, and every
//! failure is returned to the caller.

use crate::error::{EngineError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tadkham_core::{CoreError, Dictionary};

/// Where a dictionary is read from
pub enum DictionarySource {
    /// Newline-separated file
    File(PathBuf),
    /// Dictionary content already in memory
    Text(String),
    /// UTF-8 bytes
    Bytes(Vec<u8>),
    /// Any reader (network, archive entry, ...)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for DictionarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionarySource::File(path) => f.debug_tuple("File").field(path).finish(),
            DictionarySource::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            DictionarySource::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            DictionarySource::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl DictionarySource {
    /// Read from a file
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        DictionarySource::File(path.into())
    }

    /// Use in-memory content
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        DictionarySource::Text(text.into())
    }

    /// Read from a stream
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        DictionarySource::Reader(Box::new(reader))
    }

    /// Short description used in errors and logs
    pub fn name(&self) -> String {
        match self {
            DictionarySource::File(path) => path.display().to_string(),
            DictionarySource::Text(_) => "<text>".to_string(),
            DictionarySource::Bytes(_) => "<bytes>".to_string(),
            DictionarySource::Reader(_) => "<reader>".to_string(),
        }
    }

    fn read_content(self) -> Result<String> {
        let source_name = self.name();
        let load_error = |reason: String| EngineError::DictionaryLoad {
            source_name: source_name.clone(),
            reason,
        };

        match self {
            DictionarySource::File(path) => {
                fs::read_to_string(&path).map_err(|e| load_error(e.to_string()))
            }
            DictionarySource::Text(text) => Ok(text),
            DictionarySource::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| EngineError::EncodingError(format!("Invalid UTF-8: {e}"))),
            DictionarySource::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|e| load_error(e.to_string()))?;
                String::from_utf8(buffer).map_err(|e| {
                    EngineError::EncodingError(format!("Invalid UTF-8 from stream: {e}"))
                })
            }
        }
    }
}

impl From<PathBuf> for DictionarySource {
    fn from(path: PathBuf) -> Self {
        DictionarySource::File(path)
    }
}

impl From<String> for DictionarySource {
    fn from(text: String) -> Self {
        DictionarySource::Text(text)
    }
}

impl From<Vec<u8>> for DictionarySource {
    fn from(bytes: Vec<u8>) -> Self {
        DictionarySource::Bytes(bytes)
    }
}

/// How loaded content is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject a wordlist that is not in ascending order
    pub validate: bool,
    /// Sort and deduplicate instead of trusting the file order
    pub sort: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            validate: true,
            sort: false,
        }
    }
}

impl LoadOptions {
    /// Trust the file order without checking it
    pub fn trusted() -> Self {
        Self {
            validate: false,
            sort: false,
        }
    }

    /// Accept any order by sorting on load
    pub fn sorted() -> Self {
        Self {
            validate: false,
            sort: true,
        }
    }
}

/// Load and check a dictionary
///
/// With `sort` set, empty lines are dropped along with duplicates. Otherwise
/// every line is kept in file order, empty lines included.
pub fn load_dictionary(source: DictionarySource, options: LoadOptions) -> Result<Dictionary> {
    let source_name = source.name();
    let content = source.read_content()?;

    let dict = if options.sort {
        let lines: Vec<&str> = content.lines().filter(|line| !line.is_empty()).collect();
        if lines.windows(2).any(|pair| pair[1] < pair[0]) {
            log::warn!("{source_name} is not sorted; sorting {} entries on load", lines.len());
        }
        Dictionary::from_words(lines)
    } else {
        Dictionary::parse(&content)
    };

    if options.validate && !options.sort {
        check_sorted(&dict)?;
    }

    log::debug!(
        "loaded {} dictionary entries from {source_name} (longest: {} chars)",
        dict.len(),
        dict.max_word_len()
    );
    Ok(dict)
}

/// Run the sortedness check, naming the offending entry on failure
pub fn check_sorted(dict: &Dictionary) -> Result<()> {
    dict.validate().map_err(|e| match e {
        CoreError::UnsortedDictionary { index } => EngineError::UnsortedDictionary {
            index,
            word: dict.word(index).unwrap_or_default(),
        },
    })
}
