//! Main segmenter and builder

use crate::{
    assembler::Token,
    config::EngineConfig,
    dictionary::{load_dictionary, DictionarySource, LoadOptions},
    error::{EngineError, Result},
    executor::{
        auto_select, process_document, ExecutionMetrics, ExecutionMode, Executor,
        ProcessingOutput, SequentialExecutor,
    },
    input::Input,
};
use std::sync::Arc;
use tadkham_core::Dictionary;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Main word segmenter
///
/// Holds one immutable dictionary that every call shares, so a segmenter
/// can be cloned cheaply and used from several threads. Clones also share
/// the worker pool started for a fixed thread count.
#[derive(Debug, Clone)]
pub struct Segmenter {
    dictionary: Arc<Dictionary>,
    config: EngineConfig,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
}

/// Tokens with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Segments in text order
    pub tokens: Vec<Token>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

impl Output {
    /// Segment texts in order
    pub fn segments(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Input size in bytes
    pub total_bytes: usize,
    /// Input size in characters
    pub total_chars: usize,
    /// Segments produced
    pub word_count: usize,
    /// Segments that are not dictionary entries
    pub unknown_count: usize,
}

impl From<ExecutionMetrics> for ProcessingMetadata {
    fn from(metrics: ExecutionMetrics) -> Self {
        Self {
            execution_mode: metrics.mode_used,
            processing_time_ms: metrics.processing_time.as_secs_f64() * 1000.0,
            total_bytes: metrics.bytes_processed,
            total_chars: metrics.chars_processed,
            word_count: metrics.word_count,
            unknown_count: metrics.unknown_count,
        }
    }
}

impl From<ProcessingOutput> for Output {
    fn from(output: ProcessingOutput) -> Self {
        Self {
            tokens: output.tokens,
            metadata: output.metadata.into(),
        }
    }
}

impl Segmenter {
    /// Create a segmenter with default configuration
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            config: EngineConfig::default(),
            #[cfg(feature = "parallel")]
            parallel: ParallelExecutor::global(),
        }
    }

    /// Create a segmenter with custom configuration
    ///
    /// A fixed thread count starts its worker pool here, once, unless the
    /// mode is [`ExecutionMode::Sequential`].
    pub fn with_config(dictionary: Dictionary, config: EngineConfig) -> Result<Self> {
        #[cfg(feature = "parallel")]
        let parallel = match config.execution_mode {
            ExecutionMode::Sequential => ParallelExecutor::global(),
            _ => ParallelExecutor::new(config.threads)?,
        };

        Ok(Self {
            dictionary: Arc::new(dictionary),
            config,
            #[cfg(feature = "parallel")]
            parallel,
        })
    }

    /// Start building a segmenter
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::new()
    }

    /// The shared dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Split text into segment strings
    pub fn segment(&self, text: &str) -> Vec<String> {
        tadkham_core::segment(text, &self.dictionary)
    }

    /// Split text into tokens with offsets and metadata
    pub fn tokenize(&self, text: &str) -> Output {
        process_document(text, &self.dictionary, ExecutionMode::Sequential).into()
    }

    /// Read and segment one input
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.to_text()?;
        Ok(self.tokenize(&text))
    }

    /// Segment independent documents, outputs in input order
    pub fn segment_batch<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Output>> {
        let documents: Vec<&str> = documents.iter().map(AsRef::as_ref).collect();
        let mode = self.resolve_mode(&documents);
        log::debug!("segmenting {} documents ({mode})", documents.len());

        let outputs = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel.process_batch(&documents, &self.dictionary)?,
            _ => SequentialExecutor.process_batch(&documents, &self.dictionary)?,
        };
        Ok(outputs.into_iter().map(Output::from).collect())
    }

    fn resolve_mode(&self, documents: &[&str]) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => {
                let total_bytes = documents.iter().map(|d| d.len()).sum();
                auto_select(documents.len(), total_bytes, self.config.parallel_threshold)
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        }
    }
}

/// Builder for [`Segmenter`]
#[derive(Debug, Default)]
pub struct SegmenterBuilder {
    source: Option<DictionarySource>,
    dictionary: Option<Dictionary>,
    load_options: LoadOptions,
    config: EngineConfig,
}

impl SegmenterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dictionary from a file
    pub fn dictionary_file<P: Into<std::path::PathBuf>>(mut self, path: P) -> Self {
        self.source = Some(DictionarySource::from_file(path));
        self
    }

    /// Parse the dictionary from newline-separated text
    pub fn dictionary_text<S: Into<String>>(mut self, text: S) -> Self {
        self.source = Some(DictionarySource::from_text(text));
        self
    }

    /// Use an already loaded dictionary
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Set how the dictionary source is checked
    pub fn load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the batch size in bytes above which batches run in parallel
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.config.parallel_threshold = bytes;
        self
    }

    /// Replace the whole engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the dictionary and build the segmenter
    ///
    /// A dictionary passed with [`SegmenterBuilder::dictionary`] takes
    /// precedence over a file or text source.
    pub fn build(self) -> Result<Segmenter> {
        if self.config.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }

        let dictionary = match (self.dictionary, self.source) {
            (Some(dictionary), _) => dictionary,
            (None, Some(source)) => load_dictionary(source, self.load_options)?,
            (None, None) => {
                return Err(EngineError::ConfigError(
                    "no dictionary configured".to_string(),
                ))
            }
        };

        Segmenter::with_config(dictionary, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> Segmenter {
        Segmenter::new(Dictionary::from_words(["ตัด", "ตัดคำ", "คำ", "ไหม"]))
    }

    #[test]
    fn test_segment() {
        assert_eq!(segmenter().segment("ตัดคำไหม"), vec!["ตัดคำ", "ไหม"]);
    }

    #[test]
    fn test_tokenize_metadata() {
        let output = segmenter().tokenize("ตัดคำXไหม");
        assert_eq!(output.segments(), vec!["ตัดคำ", "X", "ไหม"]);
        assert_eq!(output.metadata.total_chars, 9);
        assert_eq!(output.metadata.total_bytes, 25);
        assert_eq!(output.metadata.word_count, 3);
        assert_eq!(output.metadata.unknown_count, 1);
        assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_builder_requires_dictionary() {
        let result = SegmenterBuilder::new().build();
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_builder_rejects_zero_threads() {
        let result = SegmenterBuilder::new()
            .dictionary_text("a")
            .threads(Some(0))
            .build();
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_builder_propagates_unsorted_dictionary() {
        let result = SegmenterBuilder::new().dictionary_text("b\na").build();
        assert!(matches!(
            result,
            Err(EngineError::UnsortedDictionary { index: 1, .. })
        ));
    }

    #[test]
    fn test_batch_keeps_order_in_every_mode() {
        let documents = ["ตัดคำ", "ไหม", "", "คำตัด"];
        for mode in [
            ExecutionMode::Sequential,
            ExecutionMode::Parallel,
            ExecutionMode::Adaptive,
        ] {
            let segmenter = Segmenter::builder()
                .dictionary(segmenter().dictionary().clone())
                .execution_mode(mode)
                .threads(Some(2))
                .build()
                .unwrap();
            let outputs = segmenter.segment_batch(&documents).unwrap();
            let segments: Vec<Vec<&str>> = outputs.iter().map(Output::segments).collect();
            assert_eq!(
                segments,
                vec![vec!["ตัดคำ"], vec!["ไหม"], vec![], vec!["คำ", "ตัด"]]
            );
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_worker_pool_started_once_per_segmenter() {
        let segmenter = Segmenter::builder()
            .dictionary(segmenter().dictionary().clone())
            .execution_mode(ExecutionMode::Parallel)
            .threads(Some(2))
            .build()
            .unwrap();
        assert_eq!(segmenter.parallel.current_num_threads(), 2);

        let clone = segmenter.clone();
        for documents in [["ตัดคำ", "ไหม"], ["คำ", "ตัด"]] {
            let outputs = clone.segment_batch(&documents).unwrap();
            assert_eq!(outputs.len(), 2);
        }
        assert_eq!(clone.parallel.current_num_threads(), 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_sequential_mode_starts_no_pool() {
        let segmenter =
            Segmenter::with_config(segmenter().dictionary().clone(), EngineConfig::sequential())
                .unwrap();
        assert_eq!(
            segmenter.parallel.current_num_threads(),
            rayon::current_num_threads()
        );
    }

    #[test]
    fn test_adaptive_small_batch_runs_sequentially() {
        let outputs = segmenter().segment_batch(&["คำ", "ไหม"]).unwrap();
        assert!(outputs
            .iter()
            .all(|o| o.metadata.execution_mode == ExecutionMode::Sequential));
    }
}
