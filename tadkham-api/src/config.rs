//! High-level configuration API

use crate::dto::ExecutionMode;
use crate::error::{ApiError, Result};
use std::path::PathBuf;
use tadkham_engine::{DictionarySource, EngineConfig, LoadOptions};

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryLocation {
    /// One word per line, sorted
    File(PathBuf),
    /// Dictionary content already in memory
    Text(String),
}

impl DictionaryLocation {
    pub(crate) fn to_source(&self) -> DictionarySource {
        match self {
            DictionaryLocation::File(path) => DictionarySource::from_file(path.clone()),
            DictionaryLocation::Text(text) => DictionarySource::from_text(text.clone()),
        }
    }
}

/// High-level configuration for word segmentation
#[derive(Debug, Clone)]
pub struct Config {
    /// Dictionary to load
    pub dictionary: DictionaryLocation,
    /// Reject a dictionary that is out of order
    pub validate: bool,
    /// Sort the dictionary on load instead of trusting its order
    pub sort: bool,
    /// Execution mode for batches
    pub execution_mode: ExecutionMode,
    /// Worker threads for parallel batches (None = all cores)
    pub threads: Option<usize>,
    /// Total batch size in bytes above which adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Config {
    /// Default settings for a dictionary file
    pub fn new(dictionary_path: impl Into<PathBuf>) -> Self {
        Self::with_location(DictionaryLocation::File(dictionary_path.into()))
    }

    fn with_location(dictionary: DictionaryLocation) -> Self {
        let engine = EngineConfig::default();
        Self {
            dictionary,
            validate: true,
            sort: false,
            execution_mode: ExecutionMode::default(),
            threads: engine.threads,
            parallel_threshold: engine.parallel_threshold,
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub(crate) fn load_options(&self) -> LoadOptions {
        LoadOptions {
            validate: self.validate,
            sort: self.sort,
        }
    }

    pub(crate) fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            execution_mode: self.execution_mode.into(),
            threads: self.threads,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    dictionary: Option<DictionaryLocation>,
    validate: Option<bool>,
    sort: Option<bool>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl ConfigBuilder {
    /// Load the dictionary from a file
    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = Some(DictionaryLocation::File(path.into()));
        self
    }

    /// Use newline-separated dictionary text
    pub fn dictionary_text(mut self, text: impl Into<String>) -> Self {
        self.dictionary = Some(DictionaryLocation::Text(text.into()));
        self
    }

    /// Check dictionary order on load
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = Some(validate);
        self
    }

    /// Sort the dictionary on load
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Set the adaptive parallel threshold in bytes
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.parallel_threshold = Some(bytes);
        self
    }

    /// Use fast configuration
    pub fn fast(mut self) -> Self {
        let fast = EngineConfig::fast();
        self.execution_mode = Some(ExecutionMode::Adaptive);
        self.parallel_threshold = Some(fast.parallel_threshold);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let dictionary = self
            .dictionary
            .ok_or_else(|| ApiError::Config("a dictionary file or text is required".to_string()))?;

        if self.threads == Some(0) {
            return Err(ApiError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }

        let mut config = Config::with_location(dictionary);
        if let Some(validate) = self.validate {
            config.validate = validate;
        }
        if let Some(sort) = self.sort {
            config.sort = sort;
        }
        if let Some(mode) = self.execution_mode {
            config.execution_mode = mode;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if let Some(threshold) = self.parallel_threshold {
            config.parallel_threshold = threshold;
        }
        Ok(config)
    }
}
