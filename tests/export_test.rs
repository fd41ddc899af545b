//! Integration tests for exporting ranked words.

use std::fs::File;
use std::io::BufWriter;

use tempfile::TempDir;
use zipfian::prelude::*;

const TEXT: &str = "Die Straße führt zum Café. Die Straße ist lang, \
                    das Café ist klein und die Straße ist alt.";

#[test]
fn test_csv_export_round_trips_through_csv_reader() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(ExportFormat::Csv.file_name());

    let report = AnalysisPipeline::new(AnalysisConfig::default())?.analyze_text(TEXT)?;
    export_words(
        &report.words,
        ExportFormat::Csv,
        BufWriter::new(File::create(&path)?),
    )?;

    let bytes = std::fs::read(&path)?;
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));

    let mut reader = csv::Reader::from_reader(&bytes[3..]);
    let headers = reader.headers()?.clone();
    assert_eq!(&headers[1], "word");

    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), report.words.len());
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][1], "straße");
    assert_eq!(&rows[0][2], "3");
    // Whole numbers keep the fixed two-decimal format.
    assert_eq!(&rows[0][4], "3.00");
    assert_eq!(&rows[0][5], "0.00");
    assert_eq!(&rows[1][1], "café");

    Ok(())
}

#[test]
fn test_json_export_matches_report() -> Result<()> {
    let report = AnalysisPipeline::new(AnalysisConfig::default())?.analyze_text(TEXT)?;

    let mut buffer = Vec::new();
    export_words(&report.words, ExportFormat::Json, &mut buffer)?;
    let parsed: Vec<ZipfEntry> = serde_json::from_slice(&buffer)?;

    assert_eq!(parsed.len(), report.words.len());
    for (exported, entry) in parsed.iter().zip(&report.words) {
        assert_eq!(exported.rank, entry.rank);
        assert_eq!(exported.word, entry.word);
        assert_eq!(exported.frequency, entry.frequency);
        assert!((exported.deviation_percent - entry.deviation_percent).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn test_export_respects_top_n() -> Result<()> {
    let config = AnalysisConfig::default().with_top_n(2);
    let report = AnalysisPipeline::new(config)?.analyze_text(TEXT)?;

    let mut buffer = Vec::new();
    export_words(&report.words, ExportFormat::Json, &mut buffer)?;
    let parsed: Vec<ZipfEntry> = serde_json::from_slice(&buffer)?;

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1].rank, 2);
    Ok(())
}
