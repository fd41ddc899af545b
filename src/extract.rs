//! Text extraction from documents.
//!
//! The analysis core only needs the text of a document. A [`TextExtractor`]
//! turns a document on disk into a string; formats such as PDF are added by
//! implementing the trait outside this crate.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::DEFAULT_MAX_DOCUMENT_SIZE;
use crate::error::{Result, ZipfianError};

/// A capability that returns the full text of a document.
///
/// Any failure must be reported as [`ZipfianError::Extraction`].
pub trait TextExtractor: Send + Sync {
    /// Extract the text of the document at `path`.
    fn extract(&self, path: &Path) -> Result<String>;

    /// Get the name of this extractor (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Reads UTF-8 text files.
#[derive(Clone, Debug)]
pub struct PlainTextExtractor {
    max_document_size: u64,
}

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self::with_max_document_size(DEFAULT_MAX_DOCUMENT_SIZE)
    }

    /// Refuse documents larger than `max_document_size` bytes.
    pub fn with_max_document_size(max_document_size: u64) -> Self {
        PlainTextExtractor { max_document_size }
    }

    pub fn max_document_size(&self) -> u64 {
        self.max_document_size
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let display = path.display();
        let metadata = fs::metadata(path)
            .map_err(|e| ZipfianError::extraction(format!("cannot read {display}: {e}")))?;

        if !metadata.is_file() {
            return Err(ZipfianError::extraction(format!("{display} is not a file")));
        }
        if metadata.len() > self.max_document_size {
            return Err(ZipfianError::extraction(format!(
                "{display} is {} bytes, larger than the limit of {} bytes",
                metadata.len(),
                self.max_document_size
            )));
        }

        let bytes = fs::read(path)
            .map_err(|e| ZipfianError::extraction(format!("cannot read {display}: {e}")))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ZipfianError::extraction(format!("{display} is not UTF-8: {e}")))?;

        debug!("extracted {} bytes from {display}", text.len());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "plain_text"
    }
}
