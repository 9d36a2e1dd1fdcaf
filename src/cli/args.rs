//! Command line argument parsing for the Wordhood CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::alphabet::DEFAULT_ALPHABET;
use crate::neighborhood::ExpansionMode;

/// Wordhood - generate every word within an edit distance of a source word
#[derive(Parser, Debug, Clone)]
#[command(name = "wordhood")]
#[command(about = "Generate every word within an edit distance of a source word")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Wordhood Contributors")]
#[command(long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct WordhoodArgs {
    /// Source word
    ///
    /// May start with `-` unless every following character is a known short
    /// flag; use `--` before the positionals in that case.
    #[arg(value_name = "WORD", allow_hyphen_values = true)]
    pub word: String,

    /// Maximum edit distance (a positive integer)
    ///
    /// Kept as text so that it can be validated with a dedicated message.
    #[arg(value_name = "DISTANCE", allow_hyphen_values = true)]
    pub distance: String,

    /// File the generated words are written to, one per line
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Characters used for substitution and insertion
    #[arg(short, long, env = "WORDHOOD_ALPHABET", default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Which words make up the result
    #[arg(short, long, env = "WORDHOOD_MODE", default_value = "frontier")]
    pub mode: ModeArg,

    /// Expand each level on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: CPU count)
    #[arg(short, long, env = "WORDHOOD_THREADS")]
    pub threads: Option<usize>,

    /// Write words in lexicographic order
    #[arg(long)]
    pub sort: bool,

    /// Print a generation summary to stdout
    #[arg(long)]
    pub summary: bool,

    /// Summary output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl WordhoodArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Result modes available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeArg {
    /// Words at exactly DISTANCE levels of expansion
    Frontier,
    /// Words produced at any level from 1 to DISTANCE
    Cumulative,
}

impl From<ModeArg> for ExpansionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Frontier => ExpansionMode::Frontier,
            ModeArg::Cumulative => ExpansionMode::Cumulative,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Wordhood benchmark harness for external full-text search executables
#[derive(Parser, Debug, Clone)]
#[command(name = "wordhood-bench")]
#[command(about = "Benchmark a full-text search executable across datasets and algorithms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct BenchmarkArgs {
    /// Path to the data directory
    #[arg(short, long)]
    pub data: PathBuf,

    /// Path to the search executable
    #[arg(short, long)]
    pub executable: PathBuf,

    /// Path to the output directory
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to the query directory
    #[arg(short, long)]
    pub query: PathBuf,

    /// The number of results per query
    #[arg(short, long)]
    pub num_results: String,

    /// Number of iterations
    #[arg(long, default_value = "5")]
    pub iterations: usize,

    /// Datasets to run (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "imdb,yelp,cnn_dailymail")]
    pub datasets: Vec<String>,

    /// Algorithms to run (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "inverted,trigram")]
    pub algorithms: Vec<String>,

    /// Ranking function passed to the executable
    #[arg(long, default_value = "bm25")]
    pub ranking: String,

    /// Command run before each algorithm switch (empty to disable)
    #[arg(long, env = "WORDHOOD_PURGE_COMMAND", default_value = "sudo purge")]
    pub cache_purge_command: String,

    /// Verbosity level (1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl BenchmarkArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbose.saturating_add(2)
    }
}

/// Wordhood table converter: CSV to Parquet with renamed columns
#[derive(Parser, Debug, Clone)]
#[command(name = "wordhood-convert")]
#[command(about = "Convert a CSV file to Parquet, keeping a title and a content column")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct ConvertArgs {
    /// Path to the input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the output Parquet file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Column written as `ID`
    #[arg(short, long)]
    pub title: String,

    /// Column written as `Content`
    #[arg(short, long)]
    pub content: String,

    /// Field delimiter of the input file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Verbosity level (1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbose.saturating_add(1)
    }
}
