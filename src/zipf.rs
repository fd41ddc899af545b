//! Zipf's-law ranking.
//!
//! Under an ideal Zipf distribution the word at rank `r` occurs `f1 / r`
//! times, where `f1` is the frequency of the most common word, so
//! `rank × frequency` is constant. [`ZipfAnalyzer`] ranks a
//! [`FrequencyTable`] and measures how far each word is from that ideal.
//!
//! # Examples
//!
//! ```
//! use zipfian::frequency::FrequencyTable;
//! use zipfian::zipf::ZipfAnalyzer;
//!
//! let table = FrequencyTable::from_tokens(["a", "a", "a", "a", "b", "b", "c"]);
//! let entries = ZipfAnalyzer::new().analyze(&table);
//!
//! assert_eq!(entries[1].expected_frequency, 2.0);
//! assert_eq!(entries[2].zipf_product, 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;

/// Default cap on the number of ranked words.
pub const DEFAULT_TOP_N: usize = 5000;

/// Default number of ranks included in [`PlotData`].
pub const DEFAULT_PLOT_LIMIT: usize = 500;

/// One ranked word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZipfEntry {
    /// 1-based rank.
    pub rank: usize,
    pub word: String,
    pub frequency: usize,
    /// `rank × frequency`.
    pub zipf_product: usize,
    /// `f1 / rank`.
    pub expected_frequency: f64,
    /// `|frequency − expected| / expected × 100`.
    pub deviation_percent: f64,
}

impl ZipfEntry {
    /// Copy with the floating point fields rounded to two decimals.
    pub fn rounded(&self) -> Self {
        ZipfEntry {
            word: self.word.clone(),
            expected_frequency: round_to(self.expected_frequency, 2),
            deviation_percent: round_to(self.deviation_percent, 2),
            ..*self
        }
    }
}

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Ranks words and compares them with the ideal Zipf distribution.
#[derive(Clone, Debug)]
pub struct ZipfAnalyzer {
    top_n: usize,
}

impl ZipfAnalyzer {
    /// Create an analyzer ranking at most [`DEFAULT_TOP_N`] words.
    pub fn new() -> Self {
        Self::with_top_n(DEFAULT_TOP_N)
    }

    /// Create an analyzer ranking at most `top_n` words.
    pub fn with_top_n(top_n: usize) -> Self {
        ZipfAnalyzer { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank the words of `table`.
    ///
    /// Returns `min(top_n, table.len())` entries with ranks `1..=len`.
    pub fn analyze(&self, table: &FrequencyTable) -> Vec<ZipfEntry> {
        let ranked = table.most_common(self.top_n);
        let Some(&(_, top_frequency)) = ranked.first() else {
            return Vec::new();
        };
        let f1 = top_frequency as f64;

        ranked
            .into_iter()
            .enumerate()
            .map(|(i, (word, frequency))| {
                let rank = i + 1;
                let expected = f1 / rank as f64;
                let deviation = (frequency as f64 - expected).abs() / expected * 100.0;
                ZipfEntry {
                    rank,
                    word: word.to_string(),
                    frequency,
                    zipf_product: rank * frequency,
                    expected_frequency: expected,
                    deviation_percent: deviation,
                }
            })
            .collect()
    }
}

impl Default for ZipfAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parallel arrays for plotting observed against expected frequencies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub ranks: Vec<usize>,
    pub frequencies: Vec<usize>,
    pub expected: Vec<f64>,
}

impl PlotData {
    /// Build plot arrays from the first `limit` entries.
    pub fn from_entries(entries: &[ZipfEntry], limit: usize) -> Self {
        let window = &entries[..entries.len().min(limit)];
        PlotData {
            ranks: window.iter().map(|e| e.rank).collect(),
            frequencies: window.iter().map(|e| e.frequency).collect(),
            expected: window
                .iter()
                .map(|e| round_to(e.expected_frequency, 2))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
