//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Corrects: fill in the accuracy column of picture-naming trial exports
#[derive(Parser)]
#[command(name = "corrects")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input trial exports (CSV with a header row)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Suffix inserted before the file extension for output names
    #[arg(short, long, default_value = "_out")]
    pub suffix: String,

    /// Print the per-file reports as JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
