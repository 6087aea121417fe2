//! Segment command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tadkham_api::{Config, ExecutionMode, WordSegmenter};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Dictionary file, one word per line in ascending order
    #[arg(short, long, value_name = "FILE", env = "TADKHAM_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Separator between segments in text output [default: |]
    #[arg(long, value_name = "STR")]
    pub delimiter: Option<String>,

    /// Wrap text output into lines of at most this many characters
    #[arg(short, long, value_name = "CHARS")]
    pub wrap: Option<usize>,

    /// Segment the lines of each file in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Sort the dictionary on load instead of requiring sorted input
    #[arg(long)]
    pub sort_dict: bool,

    /// Skip the dictionary order check
    #[arg(long)]
    pub no_validate: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Segments joined by a delimiter, one line per input line
    Text,
    /// JSON array of lines with token offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Segments joined by a delimiter (default)",
            OutputFormat::Json => "Tokens with character and byte offsets",
            OutputFormat::Markdown => "Numbered list, unknown segments emphasized",
        }
    }

    /// Parse a format name from a configuration file
    pub fn parse(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }
}

/// Flags merged over the configuration file
#[derive(Debug)]
struct Settings {
    dictionary: PathBuf,
    format: OutputFormat,
    delimiter: String,
    wrap: usize,
    segmenter: Config,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.merge(&config)?;

        let segmenter = WordSegmenter::with_config(settings.segmenter.clone())
            .with_context(|| format!("Failed to load dictionary {}", settings.dictionary.display()))?;
        log::info!(
            "Loaded {} dictionary entries from {}",
            segmenter.dictionary_len(),
            settings.dictionary.display()
        );

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to segment", files.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, settings.delimiter, settings.wrap)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        for path in &files {
            segment_file(&segmenter, path, formatter.as_mut())?;
            progress.file_completed(&path.display().to_string());
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    fn merge(&self, config: &CliConfig) -> Result<Settings> {
        let dictionary = self
            .dictionary
            .clone()
            .or_else(|| config.dictionary.path.clone())
            .ok_or_else(|| {
                CliError::ConfigError(
                    "no dictionary given; use --dictionary or set [dictionary] path".to_string(),
                )
            })?;
        if !dictionary.is_file() {
            return Err(CliError::DictionaryNotFound(dictionary.display().to_string()).into());
        }

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&config.output.format)?,
        };

        let threads = self
            .threads
            .or((config.performance.threads > 0).then_some(config.performance.threads))
            .or(self.parallel.then(num_cpus::get));

        let segmenter = Config::builder()
            .dictionary_file(&dictionary)
            .validate(config.dictionary.validate && !self.no_validate)
            .sort(config.dictionary.sort || self.sort_dict)
            .execution_mode(if self.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Adaptive
            })
            .threads(threads)
            .parallel_threshold(config.performance.parallel_threshold)
            .build()?;

        Ok(Settings {
            dictionary,
            format,
            delimiter: self
                .delimiter
                .clone()
                .unwrap_or_else(|| config.output.delimiter.clone()),
            wrap: self.wrap.unwrap_or(config.output.wrap),
            segmenter,
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Already initialized when run more than once in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Segment one file line by line; line breaks never reach the matcher
fn segment_file(
    segmenter: &WordSegmenter,
    path: &Path,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    let text = FileReader::read_text(path)?;
    log::debug!("Segmenting {} ({} bytes)", path.display(), text.len());

    let lines: Vec<&str> = text.lines().collect();
    let outputs = segmenter
        .process_batch(&lines)
        .map_err(|e| CliError::ProcessingError(format!("{}: {e}", path.display())))?;

    let source = path.display().to_string();
    for (i, output) in outputs.iter().enumerate() {
        formatter.format_line(&source, i + 1, &output.tokens)?;
    }
    Ok(())
}
