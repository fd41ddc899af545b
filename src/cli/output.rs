//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::language::DetectionScores;
use crate::cli::args::{OutputFormat, ZipfianArgs};
use crate::error::Result;
use crate::pipeline::AnalysisReport;
use crate::statistics::StatisticsRecord;
use crate::zipf::ZipfEntry;

/// Result structure for one analyzed document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub path: String,
    pub duration_ms: u64,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub documents: Vec<DocumentAnalysis>,
    pub failed: Vec<FailedDocument>,
}

/// A document that could not be analyzed.
#[derive(Debug, Serialize, Deserialize)]
pub struct FailedDocument {
    pub path: String,
    pub error: String,
}

/// Result structure for language detection.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionResult {
    pub path: String,
    #[serde(flatten)]
    pub detection: DetectionScores,
}

/// Result structure for word export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub path: String,
    pub format: String,
    pub words_exported: usize,
}

/// Something the CLI can print for a human reader.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &ZipfianArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ZipfianArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for AnalysisResults {
    fn print_human(&self) {
        for (i, document) in self.documents.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("Document: {}", document.path);
            println!("═════════");
            print_statistics(&document.report.statistics);
            println!();
            print_top_words(&document.report.top_words);
            println!();
            println!("Analysis time: {}ms", document.duration_ms);
        }

        for failure in &self.failed {
            println!();
            println!("Failed: {} ({})", failure.path, failure.error);
        }
    }
}

impl HumanOutput for DetectionResult {
    fn print_human(&self) {
        println!(
            "{}: {} ({})",
            self.path,
            self.detection.language.name(),
            self.detection.language.code()
        );
        println!("Sampled words: {}", self.detection.sampled_words);
        for (language, hits) in &self.detection.scores {
            println!("  {:<8} {hits}", language.code());
        }
    }
}

impl HumanOutput for ExportResult {
    fn print_human(&self) {
        println!(
            "Exported {} words as {} to {}",
            self.words_exported, self.format, self.path
        );
    }
}

fn print_statistics(stats: &StatisticsRecord) {
    println!("Statistics:");
    println!("───────────");
    println!(
        "Detected language:   {} ({})",
        stats.detected_language.name(),
        stats.detected_language.code()
    );
    println!("Total words:         {}", stats.total_words);
    println!("Unique words:        {}", stats.unique_words);
    println!("Type-token ratio:    {}", stats.type_token_ratio);
    println!(
        "Hapax legomena:      {} ({}%)",
        stats.hapax_legomena, stats.hapax_percentage
    );
    println!("Avg. word length:    {}", stats.avg_word_length);
    println!("Zipf constant:       {}", stats.zipf_constant);
    println!("Avg. Zipf deviation: {}%", stats.avg_zipf_deviation);
    println!(
        "Vocabulary levels:   top 10: {}, top 100: {}, top 1000: {}",
        stats.vocab_levels.top_10, stats.vocab_levels.top_100, stats.vocab_levels.top_1000
    );
}

fn print_top_words(entries: &[ZipfEntry]) {
    if entries.is_empty() {
        println!("No words found.");
        return;
    }

    let width = entries
        .iter()
        .map(|e| e.word.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    println!("Top words:");
    println!("──────────");
    println!(
        "{:>5}  {:<width$}  {:>9}  {:>9}  {:>9}  {:>9}",
        "rank", "word", "freq", "r×f", "expected", "dev %"
    );
    for entry in entries {
        println!(
            "{:>5}  {:<width$}  {:>9}  {:>9}  {:>9.2}  {:>9.2}",
            entry.rank,
            entry.word,
            entry.frequency,
            entry.zipf_product,
            entry.expected_frequency,
            entry.deviation_percent
        );
    }
}
