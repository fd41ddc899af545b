//! Stop filter implementation.
//!
//! This module provides a filter that removes function words (stop words)
//! before frequency counting, along with the built-in English and German
//! lists. The lists double as the evidence used by the language detector.
//!
//! # Examples
//!
//! ```
//! use zipfian::analysis::token_filter::Filter;
//! use zipfian::analysis::token_filter::stop::StopFilter;
//! use zipfian::analysis::token::Token;
//!
//! let filter = StopFilter::english();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "into", "year", "your", "some",
    "could", "them", "see", "other", "than", "then", "now", "look", "only", "come", "its",
    "over", "think", "also", "back", "after", "use", "two", "how", "our", "work", "first",
    "well", "way", "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
    "is", "was", "are", "been", "has", "had", "were", "said", "did", "having", "may", "should",
];

/// Default German stop words list.
const DEFAULT_GERMAN_STOP_WORDS: &[&str] = &[
    "der", "die", "das", "und", "in", "zu", "den", "mit", "von", "ist", "auf", "für", "im",
    "dem", "des", "eine", "ein", "als", "sich", "an", "nicht", "auch", "werden", "aus", "er",
    "sie", "es", "bei", "oder", "um", "war", "hat", "sind", "ich", "du", "wir", "ihr", "aber",
    "so", "wenn", "noch", "nur", "nach", "bis", "über", "durch", "kann", "sein", "diese", "zum",
    "zur", "am", "vom", "einen", "einem", "einer", "eines", "wurde", "mehr", "wie", "was",
    "alle", "haben", "hatte", "wurden",
];

/// Default English stop words as a HashSet, shared by every English filter.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// Default German stop words as a HashSet, shared by every German filter.
pub static DEFAULT_GERMAN_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_GERMAN_STOP_WORDS
            .iter()
            .map(|&s| s.to_string())
            .collect(),
    )
});

/// A filter that removes stop words from the token stream.
///
/// Tokens are compared verbatim, so the filter belongs after
/// [`LowercaseFilter`](super::lowercase::LowercaseFilter) in a pipeline.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with the built-in English list.
    pub fn english() -> Self {
        Self::shared(Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET))
    }

    /// Create a stop filter with the built-in German list.
    pub fn german() -> Self {
        Self::shared(Arc::clone(&DEFAULT_GERMAN_STOP_WORDS_SET))
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self::shared(Arc::new(stop_words))
    }

    /// Create a stop filter over a set that other filters may hold too.
    pub fn shared(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use zipfian::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// The underlying stop-word set.
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
