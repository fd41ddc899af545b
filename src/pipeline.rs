//! End-to-end analysis of a document.
//!
//! ```text
//! text → LanguageDetector → LanguageAnalyzer → FrequencyTable
//!      → ZipfAnalyzer → StatisticsRecord → AnalysisReport
//! ```
//!
//! Each run allocates its own token list, table and ranking; the pipeline
//! itself is read-only after construction and can be shared across threads.
//!
//! # Examples
//!
//! ```
//! use zipfian::config::AnalysisConfig;
//! use zipfian::pipeline::AnalysisPipeline;
//!
//! let pipeline = AnalysisPipeline::new(AnalysisConfig::default()).unwrap();
//! let report = pipeline.analyze_text("the cat sat on the mat the cat ran").unwrap();
//!
//! assert_eq!(report.statistics.total_words, 5);
//! assert_eq!(report.words[0].word, "cat");
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ahash::AHashMap;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::LanguageAnalyzer;
use crate::analysis::language::{Language, LanguageDetector};
use crate::config::AnalysisConfig;
use crate::error::{Result, ZipfianError};
use crate::extract::TextExtractor;
use crate::frequency::FrequencyTable;
use crate::statistics::StatisticsRecord;
use crate::zipf::{PlotData, ZipfAnalyzer, ZipfEntry};

/// The result of analyzing one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub statistics: StatisticsRecord,
    /// The first `preview_limit` ranked words.
    pub top_words: Vec<ZipfEntry>,
    /// Observed and expected frequencies of the first `plot_limit` ranks.
    pub plot: PlotData,
    /// Every ranked word, up to `top_n`.
    pub words: Vec<ZipfEntry>,
}

impl AnalysisReport {
    fn new(statistics: StatisticsRecord, entries: &[ZipfEntry], config: &AnalysisConfig) -> Self {
        let words: Vec<ZipfEntry> = entries.iter().map(ZipfEntry::rounded).collect();
        let preview = words.len().min(config.preview_limit);

        AnalysisReport {
            statistics,
            top_words: words[..preview].to_vec(),
            plot: PlotData::from_entries(entries, config.plot_limit),
            words,
        }
    }
}

/// Outcome of one document in a batch.
#[derive(Debug)]
pub struct DocumentResult {
    pub path: PathBuf,
    pub report: Result<AnalysisReport>,
    /// Wall-clock time spent extracting and analyzing this document.
    pub duration: Duration,
}

/// Runs the analysis stages with a fixed configuration.
#[derive(Debug)]
pub struct AnalysisPipeline {
    config: AnalysisConfig,
    detector: LanguageDetector,
    analyzers: AHashMap<Language, LanguageAnalyzer>,
    zipf: ZipfAnalyzer,
}

impl AnalysisPipeline {
    /// Validate `config` and prepare one analyzer per supported language.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let mut analyzers = AHashMap::new();
        for language in Language::ALL {
            analyzers.insert(language, LanguageAnalyzer::new(language)?);
        }

        Ok(AnalysisPipeline {
            detector: LanguageDetector::with_sample_size(config.detection_sample),
            zipf: ZipfAnalyzer::with_top_n(config.top_n),
            analyzers,
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The language `text` will be analyzed as.
    pub fn language_of(&self, text: &str) -> Language {
        match self.config.language {
            Some(language) => language,
            None => self.detector.detect(text),
        }
    }

    /// Analyze already extracted text.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisReport> {
        let started = Instant::now();

        let language = self.language_of(text);
        let analyzer = self.analyzers.get(&language).ok_or_else(|| {
            ZipfianError::analysis(format!("no analyzer for language {language}"))
        })?;

        let words = analyzer.words(text)?;
        debug!("tokenized {} words as {language}", words.len());

        let table = FrequencyTable::from_tokens(&words);
        let entries = self.zipf.analyze(&table);
        debug!(
            "ranked {} of {} distinct words",
            entries.len(),
            table.len()
        );

        let statistics = StatisticsRecord::compute(&words, &table, &entries, language);
        info!(
            "analyzed {} words ({} distinct, {language}) in {:?}",
            statistics.total_words,
            statistics.unique_words,
            started.elapsed()
        );

        Ok(AnalysisReport::new(statistics, &entries, &self.config))
    }

    /// Extract the document at `path` and analyze it.
    ///
    /// Extraction failures are returned as
    /// [`ZipfianError::Extraction`]; nothing is analyzed in that case.
    pub fn analyze_document(
        &self,
        extractor: &dyn TextExtractor,
        path: &Path,
    ) -> Result<AnalysisReport> {
        debug!("extracting {} with {}", path.display(), extractor.name());
        let text = extractor.extract(path).map_err(|e| match e {
            ZipfianError::Extraction(_) => e,
            other => ZipfianError::extraction(other.to_string()),
        })?;
        self.analyze_text(&text)
    }

    /// Analyze several documents in parallel.
    ///
    /// Results come back in the order of `paths`; one failing document does
    /// not affect the others.
    pub fn analyze_documents(
        &self,
        extractor: &dyn TextExtractor,
        paths: &[PathBuf],
    ) -> Vec<DocumentResult> {
        paths
            .par_iter()
            .map(|path| {
                let started = Instant::now();
                let report = self.analyze_document(extractor, path);
                DocumentResult {
                    path: path.clone(),
                    report,
                    duration: started.elapsed(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::extract::PlainTextExtractor;

    fn pipeline() -> AnalysisPipeline {
        AnalysisPipeline::new(AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_cat_scenario() {
        let report = pipeline()
            .analyze_text("the cat sat on the mat the cat ran")
            .unwrap();
        let stats = &report.statistics;

        assert_eq!(stats.detected_language, Language::English);
        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.unique_words, 4);
        assert_eq!(stats.hapax_legomena, 3);
        assert_eq!(stats.hapax_percentage, 75.0);
        assert_eq!(stats.type_token_ratio, 0.8);

        let words: Vec<(&str, usize)> = report
            .words
            .iter()
            .map(|e| (e.word.as_str(), e.frequency))
            .collect();
        assert_eq!(words, vec![("cat", 2), ("sat", 1), ("mat", 1), ("ran", 1)]);
    }

    #[test]
    fn test_empty_text() {
        let report = pipeline().analyze_text("").unwrap();

        assert_eq!(report.statistics.total_words, 0);
        assert_eq!(report.statistics.unique_words, 0);
        assert_eq!(report.statistics.type_token_ratio, 0.0);
        assert_eq!(report.statistics.hapax_percentage, 0.0);
        assert_eq!(report.statistics.avg_word_length, 0.0);
        assert!(report.words.is_empty());
        assert!(report.top_words.is_empty());
        assert!(report.plot.is_empty());
    }

    #[test]
    fn test_german_text_uses_german_stop_words() {
        let report = pipeline()
            .analyze_text("Der Hund und die Katze. Der Hund ist müde und die Katze nicht.")
            .unwrap();

        assert_eq!(report.statistics.detected_language, Language::German);
        assert_eq!(report.words[0].word, "hund");
        assert_eq!(report.words[1].word, "katze");
        assert_eq!(report.statistics.total_words, 5);
    }

    #[test]
    fn test_language_override_skips_detection() {
        let config = AnalysisConfig::default().with_language(Language::German);
        let pipeline = AnalysisPipeline::new(config).unwrap();

        let report = pipeline.analyze_text("the the the cat").unwrap();

        assert_eq!(report.statistics.detected_language, Language::German);
        assert_eq!(report.words[0].word, "the");
    }

    #[test]
    fn test_limits_are_applied() {
        let text: String = (0..40)
            .map(|i| format!("word{} ", char::from(b'a' + (i % 26) as u8)).repeat(i + 1))
            .collect();
        let config = AnalysisConfig::default()
            .with_top_n(10)
            .with_preview_limit(3)
            .with_plot_limit(5);
        let report = AnalysisPipeline::new(config).unwrap().analyze_text(&text).unwrap();

        assert_eq!(report.words.len(), 10);
        assert_eq!(report.top_words.len(), 3);
        assert_eq!(report.plot.len(), 5);
        assert_eq!(report.top_words[..], report.words[..3]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = AnalysisPipeline::new(AnalysisConfig::default().with_top_n(0));
        assert!(matches!(result, Err(ZipfianError::Config(_))));
    }

    #[test]
    fn test_analyze_document_propagates_extraction_failure() {
        let err = pipeline()
            .analyze_document(&PlainTextExtractor::new(), Path::new("/nonexistent/doc.txt"))
            .unwrap_err();

        assert!(matches!(err, ZipfianError::Extraction(_)));
    }

    #[test]
    fn test_analyze_documents_keeps_order() {
        let mut english = NamedTempFile::new().unwrap();
        write!(english, "the cat and the dog").unwrap();
        let mut german = NamedTempFile::new().unwrap();
        write!(german, "der Hund und die Katze").unwrap();

        let paths = vec![
            english.path().to_path_buf(),
            PathBuf::from("/nonexistent/doc.txt"),
            german.path().to_path_buf(),
        ];
        let pipeline = pipeline();
        let started = Instant::now();
        let results = pipeline.analyze_documents(&PlainTextExtractor::new(), &paths);
        let batch = started.elapsed();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].path, paths[0]);
        let first = results[0].report.as_ref().unwrap();
        assert_eq!(first.statistics.detected_language, Language::English);
        assert!(results[1].report.is_err());
        let third = results[2].report.as_ref().unwrap();
        assert_eq!(third.statistics.detected_language, Language::German);

        // Each document carries its own time, bounded by the whole batch.
        assert!(results.iter().all(|r| r.duration <= batch));
    }
}
