//! Supported languages and stop-word based language detection.
//!
//! Detection is a heuristic: the first words of a document are matched
//! against every language's stop-word list and the language with the most
//! hits wins.
//!
//! # Examples
//!
//! ```
//! use zipfian::analysis::language::{Language, LanguageDetector};
//!
//! let detector = LanguageDetector::new();
//! assert_eq!(detector.detect("der und die das ist"), Language::German);
//! assert_eq!(detector.detect("the and is of"), Language::English);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::{
    DEFAULT_ENGLISH_STOP_WORDS_SET, DEFAULT_GERMAN_STOP_WORDS_SET, StopFilter,
};
use crate::error::{Result, ZipfianError};

/// Number of leading words inspected by [`LanguageDetector::default`].
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// A language the analyzer has stop words for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    /// All supported languages in canonical order.
    ///
    /// Detection ties resolve to the earliest entry.
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
        }
    }

    /// The process-wide stop-word set of this language.
    pub fn stop_words(&self) -> &'static HashSet<String> {
        match self {
            Language::English => &**DEFAULT_ENGLISH_STOP_WORDS_SET,
            Language::German => &**DEFAULT_GERMAN_STOP_WORDS_SET,
        }
    }

    /// A stop filter over this language's shared stop-word set.
    pub fn stop_filter(&self) -> StopFilter {
        match self {
            Language::English => StopFilter::english(),
            Language::German => StopFilter::german(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ZipfianError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| {
                language.code() == wanted || language.name().to_lowercase() == wanted
            })
            .ok_or_else(|| ZipfianError::invalid_argument(format!("unsupported language: {s}")))
    }
}

/// Stop-word hits per language for one detection run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionScores {
    /// The chosen language.
    pub language: Language,
    /// Number of whitespace-delimited words that were inspected.
    pub sampled_words: usize,
    /// Stop-word hits, in [`Language::ALL`] order.
    pub scores: Vec<(Language, usize)>,
}

/// Classifies text as one of the [`Language`]s by counting stop words.
#[derive(Clone, Debug)]
pub struct LanguageDetector {
    sample_size: usize,
}

impl LanguageDetector {
    /// Create a detector that samples [`DEFAULT_SAMPLE_SIZE`] words.
    pub fn new() -> Self {
        Self::with_sample_size(DEFAULT_SAMPLE_SIZE)
    }

    /// Create a detector that samples at most `sample_size` words.
    pub fn with_sample_size(sample_size: usize) -> Self {
        LanguageDetector { sample_size }
    }

    /// Get the sample size.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Detect the language of `text`.
    ///
    /// Empty text and ties fall back to the first language of
    /// [`Language::ALL`].
    pub fn detect(&self, text: &str) -> Language {
        self.detect_with_scores(text).language
    }

    /// Detect the language of `text` and report the hits per language.
    pub fn detect_with_scores(&self, text: &str) -> DetectionScores {
        let lowered = text.to_lowercase();
        let sample: Vec<&str> = lowered.split_whitespace().take(self.sample_size).collect();

        let scores: Vec<(Language, usize)> = Language::ALL
            .into_iter()
            .map(|language| {
                let stop_words = language.stop_words();
                let hits = sample.iter().filter(|&&w| stop_words.contains(w)).count();
                (language, hits)
            })
            .collect();

        let mut best = scores[0];
        for &candidate in &scores[1..] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }

        debug!(
            "language detection over {} words: {:?} -> {}",
            sample.len(),
            scores,
            best.0
        );

        DetectionScores {
            language: best.0,
            sampled_words: sample.len(),
            scores,
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}
