//! Corpus statistics derived from the token stream and the Zipf ranking.
//!
//! Every ratio has an explicit zero guard: an empty corpus produces a record
//! full of zeros instead of an error.

use serde::{Deserialize, Serialize};

use crate::analysis::language::Language;
use crate::frequency::FrequencyTable;
use crate::zipf::{ZipfEntry, round_to};

/// Number of leading Zipf entries averaged for the Zipf constant.
pub const ZIPF_WINDOW: usize = 100;

/// Vocabulary concentration at the top-10/100/1000 cut-offs.
///
/// Each value counts the distinct words whose frequency is at least the
/// frequency of the k-th most common word, so ties at the cut-off can push
/// the count above k.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyLevels {
    pub top_10: usize,
    pub top_100: usize,
    pub top_1000: usize,
}

impl VocabularyLevels {
    pub fn compute(table: &FrequencyTable) -> Self {
        let ranked = table.most_common(table.len());
        let level = |k: usize| -> usize {
            if ranked.is_empty() {
                return 0;
            }
            let cutoff = ranked[k.min(ranked.len()) - 1].1;
            ranked.iter().take_while(|(_, count)| *count >= cutoff).count()
        };

        VocabularyLevels {
            top_10: level(10),
            top_100: level(100),
            top_1000: level(1000),
        }
    }
}

/// Summary metrics of one analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    /// Tokens after stop-word filtering.
    pub total_words: usize,
    /// Distinct tokens.
    pub unique_words: usize,
    /// `unique_words / total_words`, four decimals.
    pub type_token_ratio: f64,
    /// Words occurring exactly once.
    pub hapax_legomena: usize,
    /// Share of the vocabulary that is hapax legomena, in percent.
    pub hapax_percentage: f64,
    /// Mean token length in characters.
    pub avg_word_length: f64,
    /// Mean `rank × frequency` over the first [`ZIPF_WINDOW`] ranks.
    pub zipf_constant: f64,
    /// Mean deviation percent over the first [`ZIPF_WINDOW`] ranks.
    pub avg_zipf_deviation: f64,
    pub vocab_levels: VocabularyLevels,
    pub detected_language: Language,
}

impl StatisticsRecord {
    /// Compute the record. Ratios are rounded only here, at the end.
    pub fn compute<S: AsRef<str>>(
        tokens: &[S],
        table: &FrequencyTable,
        entries: &[ZipfEntry],
        language: Language,
    ) -> Self {
        let total_words = tokens.len();
        let unique_words = table.len();
        let hapax_legomena = table.hapax_legomena();

        let type_token_ratio = if total_words > 0 {
            unique_words as f64 / total_words as f64
        } else {
            0.0
        };

        let hapax_percentage = if unique_words > 0 {
            hapax_legomena as f64 / unique_words as f64 * 100.0
        } else {
            0.0
        };

        let avg_word_length = if total_words > 0 {
            let chars: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();
            chars as f64 / total_words as f64
        } else {
            0.0
        };

        let window = &entries[..entries.len().min(ZIPF_WINDOW)];
        let (zipf_constant, avg_zipf_deviation) = if window.is_empty() {
            (0.0, 0.0)
        } else {
            let n = window.len() as f64;
            let products: usize = window.iter().map(|e| e.zipf_product).sum();
            let deviations: f64 = window.iter().map(|e| e.deviation_percent).sum();
            (products as f64 / n, deviations / n)
        };

        StatisticsRecord {
            total_words,
            unique_words,
            type_token_ratio: round_to(type_token_ratio, 4),
            hapax_legomena,
            hapax_percentage: round_to(hapax_percentage, 2),
            avg_word_length: round_to(avg_word_length, 2),
            zipf_constant: round_to(zipf_constant, 2),
            avg_zipf_deviation: round_to(avg_zipf_deviation, 2),
            vocab_levels: VocabularyLevels::compute(table),
            detected_language: language,
        }
    }
}
