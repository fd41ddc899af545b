//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of an analyzer: they split raw text into
//! [`Token`](crate::analysis::token::Token)s that the filters then refine.
//!
//! # Examples
//!
//! ```
//! use zipfian::analysis::tokenizer::Tokenizer;
//! use zipfian::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::words().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that one tokenizer can serve
/// analyses running on several threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use regex::RegexTokenizer;
