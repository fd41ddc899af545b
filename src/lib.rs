//! # Zipfian
//!
//! Word frequency and Zipf's-law statistics for German and English text.
//!
//! ## Features
//!
//! - Stop-word based language detection
//! - Regex tokenization with lowercase, length and stop-word filters
//! - Rank/frequency tables with Zipf deviation per word
//! - Corpus statistics (type-token ratio, hapax legomena, vocabulary levels)
//! - CSV and JSON export of the ranked words
//! - Parallel analysis of several documents

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod frequency;
pub mod pipeline;
pub mod statistics;
pub mod zipf;

pub mod prelude {
    pub use crate::analysis::language::{Language, LanguageDetector};
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{Result, ZipfianError};
    pub use crate::export::{ExportFormat, export_words};
    pub use crate::extract::{PlainTextExtractor, TextExtractor};
    pub use crate::frequency::FrequencyTable;
    pub use crate::pipeline::{AnalysisPipeline, AnalysisReport};
    pub use crate::statistics::StatisticsRecord;
    pub use crate::zipf::{ZipfAnalyzer, ZipfEntry};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
