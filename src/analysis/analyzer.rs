//! Analyzers combine a tokenizer with a chain of filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Frequency Table
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use zipfian::analysis::analyzer::{Analyzer, LanguageAnalyzer};
//! use zipfian::analysis::language::Language;
//!
//! let analyzer = LanguageAnalyzer::new(Language::English).unwrap();
//! let tokens: Vec<_> = analyzer.analyze("The Cat sat on the mat").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "cat");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can be shared by
/// analyses running in parallel.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

mod language;
mod pipeline;

pub use language::LanguageAnalyzer;
pub use pipeline::PipelineAnalyzer;
