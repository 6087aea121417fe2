//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tadkham_engine::{load_dictionary, DictionarySource, EngineError, LoadOptions};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Dictionary file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        if !self.dictionary.is_file() {
            return Err(CliError::DictionaryNotFound(self.dictionary.display().to_string()).into());
        }

        let source = DictionarySource::from_file(&self.dictionary);
        match load_dictionary(source, LoadOptions::default()) {
            Ok(dictionary) => {
                println!("✓ Dictionary is valid!");
                println!("  Entries: {}", dictionary.len());
                println!("  Longest entry: {} characters", dictionary.max_word_len());
                Ok(())
            }
            Err(EngineError::UnsortedDictionary { index, word }) => {
                println!("✗ Dictionary is not sorted!");
                println!("  Line {}: {word:?} sorts before the line above it", index + 1);
                println!("  Sort it, or segment with --sort-dict");
                Err(anyhow::anyhow!(
                    "Validation failed: entry {index} is out of order"
                ))
            }
            Err(e) => {
                println!("✗ Dictionary could not be loaded!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
