//! Error types for the Wordhood library.
//!
//! All fallible operations return [`WordhoodError`]. The neighborhood
//! generator itself never fails; errors come from validating inputs at the
//! boundary, from writing results, from the benchmark harness, and from the
//! table converter.
//!
//! # Examples
//!
//! ```
//! use wordhood::error::{WordhoodError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordhoodError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordhood operations.
#[derive(Error, Debug)]
pub enum WordhoodError {
    /// I/O errors (output files, subprocess pipes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The distance budget was not a positive integer.
    #[error("Distance must be a positive integer.")]
    InvalidDistance,

    /// The alphabet could not be used for substitution and insertion.
    #[error("Alphabet error: {0}")]
    InvalidAlphabet(String),

    /// A malformed argument other than the distance.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Benchmark harness failures
    #[error("Benchmark error: {0}")]
    Benchmark(String),

    /// Table conversion failures, such as a missing column
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading and writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Arrow record batch errors
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet encoding errors
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WordhoodError.
pub type Result<T> = std::result::Result<T, WordhoodError>;

impl WordhoodError {
    /// Create a new alphabet error.
    pub fn invalid_alphabet<S: Into<String>>(msg: S) -> Self {
        WordhoodError::InvalidAlphabet(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordhoodError::InvalidArgument(msg.into())
    }

    /// Create a new benchmark error.
    pub fn benchmark<S: Into<String>>(msg: S) -> Self {
        WordhoodError::Benchmark(msg.into())
    }

    /// Create a new conversion error.
    pub fn conversion<S: Into<String>>(msg: S) -> Self {
        WordhoodError::Conversion(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        WordhoodError::Other(format!("Internal error: {}", msg.into()))
    }
}
