//! Command implementations for the zipfian CLI.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};

use crate::analysis::language::{Language, LanguageDetector};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::error::{Result, ZipfianError};
use crate::export::{ExportFormat, export_words};
use crate::extract::{PlainTextExtractor, TextExtractor};
use crate::pipeline::{AnalysisPipeline, DocumentResult};

/// Execute a CLI command.
pub fn execute_command(args: ZipfianArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Detect(detect_args) => detect(detect_args.clone(), &args),
        Command::Export(export_args) => export(export_args.clone(), &args),
    }
}

/// Load the configuration file if one was given, otherwise use defaults.
fn base_config(cli_args: &ZipfianArgs) -> Result<AnalysisConfig> {
    match &cli_args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            AnalysisConfig::from_file(path)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

fn apply_overrides(
    mut config: AnalysisConfig,
    top_n: Option<usize>,
    language: Option<&str>,
) -> Result<AnalysisConfig> {
    if let Some(top_n) = top_n {
        config = config.with_top_n(top_n);
    }
    if let Some(language) = language {
        config = config.with_language(language.parse::<Language>()?);
    }
    Ok(config)
}

/// Analyze one or more documents.
fn analyze(args: AnalyzeArgs, cli_args: &ZipfianArgs) -> Result<()> {
    let mut config = apply_overrides(
        base_config(cli_args)?,
        args.top_n,
        args.language.as_deref(),
    )?;
    if let Some(plot_limit) = args.plot_limit {
        config = config.with_plot_limit(plot_limit);
    }
    if let Some(preview) = args.preview {
        config = config.with_preview_limit(preview);
    }

    let extractor = PlainTextExtractor::with_max_document_size(config.max_document_size);
    let pipeline = AnalysisPipeline::new(config)?;

    let started = Instant::now();
    let mut results = pipeline.analyze_documents(&extractor, &args.files);
    info!(
        "analyzed {} documents in {:?}",
        results.len(),
        started.elapsed()
    );

    // A single document behaves all-or-nothing.
    if results.len() == 1 && results[0].report.is_err() {
        if let Some(DocumentResult { report: Err(e), .. }) = results.pop() {
            return Err(e);
        }
    }

    let mut documents = Vec::new();
    let mut failed = Vec::new();
    for result in results {
        let path = result.path.to_string_lossy().to_string();
        match result.report {
            Ok(report) => documents.push(DocumentAnalysis {
                path,
                duration_ms: result.duration.as_millis() as u64,
                report,
            }),
            Err(e) => {
                warn!("{path}: {e}");
                failed.push(FailedDocument {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }
    if documents.is_empty() {
        return Err(ZipfianError::analysis("no document could be analyzed"));
    }

    output_result(
        "Analysis complete",
        &AnalysisResults { documents, failed },
        cli_args,
    )
}

/// Detect the language of a document.
fn detect(args: DetectArgs, cli_args: &ZipfianArgs) -> Result<()> {
    let config = base_config(cli_args)?;
    let sample = args.sample.unwrap_or(config.detection_sample);

    let extractor = PlainTextExtractor::with_max_document_size(config.max_document_size);
    let text = extractor.extract(&args.file)?;
    let detection = LanguageDetector::with_sample_size(sample).detect_with_scores(&text);

    output_result(
        "Language detected",
        &DetectionResult {
            path: args.file.to_string_lossy().to_string(),
            detection,
        },
        cli_args,
    )
}

/// Analyze a document and export its ranked words.
fn export(args: ExportArgs, cli_args: &ZipfianArgs) -> Result<()> {
    // Reject the format before touching the document.
    let format: ExportFormat = args.export_format.parse()?;

    let config = apply_overrides(
        base_config(cli_args)?,
        args.top_n,
        args.language.as_deref(),
    )?;
    let extractor = PlainTextExtractor::with_max_document_size(config.max_document_size);
    let pipeline = AnalysisPipeline::new(config)?;
    let report = pipeline.analyze_document(&extractor, &args.file)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format.file_name()));
    let writer = BufWriter::new(File::create(&output_path)?);
    export_words(&report.words, format, writer)?;
    info!(
        "wrote {} words to {}",
        report.words.len(),
        output_path.display()
    );

    output_result(
        "Export complete",
        &ExportResult {
            path: output_path.to_string_lossy().to_string(),
            format: format.to_string(),
            words_exported: report.words.len(),
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    #[test]
    fn test_export_rejects_unknown_format_before_reading() {
        let args = ZipfianArgs::try_parse_from([
            "zipfian",
            "export",
            "/nonexistent/doc.txt",
            "--as",
            "xml",
        ])
        .unwrap();

        let err = execute_command(args).unwrap_err();
        assert!(matches!(err, ZipfianError::InvalidFormat(_)));
    }

    #[test]
    fn test_export_writes_file() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "the cat sat on the mat the cat ran").unwrap();
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("words.json");

        let args = ZipfianArgs::try_parse_from([
            "zipfian",
            "--quiet",
            "export",
            input.path().to_str().unwrap(),
            "--as",
            "json",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();
        execute_command(args).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let words: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(words[0]["word"], "cat");
        assert_eq!(words.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_analyze_single_missing_file_fails() {
        let args =
            ZipfianArgs::try_parse_from(["zipfian", "analyze", "/nonexistent/doc.txt"]).unwrap();

        let err = execute_command(args).unwrap_err();
        assert!(matches!(err, ZipfianError::Extraction(_)));
    }

    #[test]
    fn test_analyze_single_file_succeeds() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "the cat sat on the mat the cat ran").unwrap();

        let args = ZipfianArgs::try_parse_from([
            "zipfian",
            "--quiet",
            "analyze",
            input.path().to_str().unwrap(),
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_analyze_batch_tolerates_one_missing_file() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "der Hund und die Katze").unwrap();

        let args = ZipfianArgs::try_parse_from([
            "zipfian",
            "--quiet",
            "--format",
            "json",
            "analyze",
            input.path().to_str().unwrap(),
            "/nonexistent/doc.txt",
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_analyze_batch_fails_when_every_file_fails() {
        let args = ZipfianArgs::try_parse_from([
            "zipfian",
            "analyze",
            "/nonexistent/a.txt",
            "/nonexistent/b.txt",
        ])
        .unwrap();

        let err = execute_command(args).unwrap_err();
        assert!(matches!(err, ZipfianError::Analysis(_)));
    }

    #[test]
    fn test_detect_reads_file() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "der Hund und die Katze ist müde").unwrap();

        let args = ZipfianArgs::try_parse_from([
            "zipfian",
            "--quiet",
            "--format",
            "json",
            "detect",
            input.path().to_str().unwrap(),
            "--sample",
            "3",
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_detect_missing_file_fails() {
        let args =
            ZipfianArgs::try_parse_from(["zipfian", "detect", "/nonexistent/doc.txt"]).unwrap();

        let err = execute_command(args).unwrap_err();
        assert!(matches!(err, ZipfianError::Extraction(_)));
    }

    #[test]
    fn test_unsupported_language_is_rejected() {
        let args = ZipfianArgs::try_parse_from([
            "zipfian",
            "analyze",
            "doc.txt",
            "--language",
            "fr",
        ])
        .unwrap();

        assert!(execute_command(args).is_err());
    }
}
