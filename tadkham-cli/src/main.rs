//! tadkham: split unspaced text into dictionary words

use clap::Parser;
use tadkham_cli::commands::Commands;

/// Dictionary-based word segmentation for Thai and other unspaced scripts
#[derive(Debug, Parser)]
#[command(name = "tadkham", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
