//! Command line argument parsing for the zipfian CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// zipfian - word frequency and Zipf's-law statistics for text documents
#[derive(Parser, Debug, Clone)]
#[command(name = "zipfian")]
#[command(about = "Word frequency and Zipf's-law statistics for text documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ZipfianArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Analysis configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "ZIPFIAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ZipfianArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze word frequencies and Zipf statistics of text documents
    Analyze(AnalyzeArgs),

    /// Detect the language of a text document
    Detect(DetectArgs),

    /// Export the ranked words of a document as CSV or JSON
    Export(ExportArgs),
}

/// Arguments for analyzing documents
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text files to analyze
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum number of ranked words
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Analyze as this language instead of detecting it (de, en)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Number of ranks in the plot arrays
    #[arg(long)]
    pub plot_limit: Option<usize>,

    /// Number of top words shown in the preview
    #[arg(long)]
    pub preview: Option<usize>,
}

/// Arguments for language detection
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// Text file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of leading words to sample
    #[arg(short, long)]
    pub sample: Option<usize>,
}

/// Arguments for exporting ranked words
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Text file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Export format (csv or json)
    #[arg(long = "as", value_name = "FORMAT", default_value = "csv")]
    pub export_format: String,

    /// Output file (defaults to the format's standard file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of ranked words
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Analyze as this language instead of detecting it (de, en)
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
