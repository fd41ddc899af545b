//! Analysis configuration.
//!
//! Configuration is plain serde data so it can be loaded from a JSON file;
//! missing fields take their defaults.
//!
//! ```
//! use zipfian::config::AnalysisConfig;
//!
//! let config: AnalysisConfig = serde_json::from_str(r#"{"top_n": 100}"#).unwrap();
//! assert_eq!(config.top_n, 100);
//! assert_eq!(config.plot_limit, 500);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::language::{DEFAULT_SAMPLE_SIZE, Language};
use crate::error::{Result, ZipfianError};
use crate::zipf::{DEFAULT_PLOT_LIMIT, DEFAULT_TOP_N};

/// Default number of top words in the report preview.
pub const DEFAULT_PREVIEW_LIMIT: usize = 50;

/// Default upper bound on document size (50 MiB).
pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 50 * 1024 * 1024;

/// Settings for one [`AnalysisPipeline`](crate::pipeline::AnalysisPipeline).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Cap on ranked Zipf entries.
    pub top_n: usize,
    /// Number of ranks exported as plot arrays.
    pub plot_limit: usize,
    /// Number of ranked words in the report preview.
    pub preview_limit: usize,
    /// Words sampled by the language detector.
    pub detection_sample: usize,
    /// Largest document, in bytes, accepted by the plain-text extractor.
    pub max_document_size: u64,
    /// Skip detection and analyze as this language.
    pub language: Option<Language>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            top_n: DEFAULT_TOP_N,
            plot_limit: DEFAULT_PLOT_LIMIT,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            detection_sample: DEFAULT_SAMPLE_SIZE,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            language: None,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(ZipfianError::invalid_config("top_n must be at least 1"));
        }
        if self.detection_sample == 0 {
            return Err(ZipfianError::invalid_config(
                "detection_sample must be at least 1",
            ));
        }
        if self.max_document_size == 0 {
            return Err(ZipfianError::invalid_config(
                "max_document_size must be at least 1 byte",
            ));
        }
        Ok(())
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_plot_limit(mut self, plot_limit: usize) -> Self {
        self.plot_limit = plot_limit;
        self
    }

    pub fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }
}
