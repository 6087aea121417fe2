//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Dictionary path to pre-fill
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [dictionary] path at a word list, one word per line");
        println!("2. Use it for segmentation:");
        println!(
            "   tadkham segment -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let path_line = match &self.dictionary {
            Some(path) => format!("path = {:?}", path.display().to_string()),
            None => "# path = \"words.txt\"".to_string(),
        };

        format!(
            r#"# tadkham configuration

[dictionary]
# Word list, one entry per line, ascending by Unicode scalar value.
# --dictionary on the command line takes precedence.
{path_line}

# Reject a word list that is out of order
validate = true

# Sort the word list on load instead (slower startup, any order accepted)
sort = false

[output]
# text, json or markdown
format = "text"

# Separator between segments in text output
delimiter = "|"

# Pack text output into lines of at most this many characters (0 = off)
wrap = 0

[performance]
# Worker threads for parallel segmentation (0 = all cores)
threads = 0

# Files larger than this many bytes have their lines segmented in parallel
parallel_threshold = 100000
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("tadkham.toml"),
            dictionary: None,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("tadkham.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("tadkham.toml"),
            dictionary: None,
        };

        let config = CliConfig::parse(&args.generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_template_with_dictionary() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("tadkham.toml"),
            dictionary: Some(PathBuf::from("dict/thai.txt")),
        };

        let config = CliConfig::parse(&args.generate_template()).unwrap();
        assert_eq!(config.dictionary.path, Some(PathBuf::from("dict/thai.txt")));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("tadkham.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            dictionary: None,
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[dictionary]"));
        assert!(content.contains("[performance]"));
    }
}
