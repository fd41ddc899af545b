//! Error types for the zipfian library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ZipfianError`] enum.
//!
//! # Examples
//!
//! ```
//! use zipfian::error::{Result, ZipfianError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ZipfianError::invalid_format("xml"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for zipfian operations.
#[derive(Error, Debug)]
pub enum ZipfianError {
    /// I/O errors (file operations, stdout, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The text extraction capability could not produce text for a document.
    #[error("Analysis failed: {0}")]
    Extraction(String),

    /// An unsupported output or export format was requested.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration values that cannot be used.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ZipfianError.
pub type Result<T> = std::result::Result<T, ZipfianError>;

impl ZipfianError {
    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        ZipfianError::Extraction(msg.into())
    }

    /// Create a new invalid format error.
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        ZipfianError::InvalidFormat(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ZipfianError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ZipfianError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ZipfianError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
