//! Export of ranked words as CSV or JSON.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZipfianError};
use crate::zipf::ZipfEntry;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const CSV_HEADER: [&str; 6] = [
    "rank",
    "word",
    "frequency",
    "zipf_product",
    "expected_frequency",
    "deviation_percent",
];

/// Supported export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Default file name for an export of the ranked words.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "word_frequency_top5000.csv",
            ExportFormat::Json => "word_frequency_top5000.json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ZipfianError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ZipfianError::invalid_format(format!(
                "unsupported export format '{other}', expected csv or json"
            ))),
        }
    }
}

/// Write `entries` to `writer` in `format`, rounding floats to two decimals.
///
/// CSV columns always print two decimals so spreadsheets see one number format.
pub fn export_words<W: Write>(
    entries: &[ZipfEntry],
    format: ExportFormat,
    mut writer: W,
) -> Result<()> {
    let rounded: Vec<ZipfEntry> = entries.iter().map(ZipfEntry::rounded).collect();

    match format {
        ExportFormat::Csv => {
            // Spreadsheet tools need the BOM to pick up UTF-8.
            writer.write_all(UTF8_BOM)?;
            let mut csv = csv::Writer::from_writer(writer);
            csv.write_record(CSV_HEADER)?;
            for entry in &rounded {
                csv.write_record(&[
                    entry.rank.to_string(),
                    entry.word.clone(),
                    entry.frequency.to_string(),
                    entry.zipf_product.to_string(),
                    format!("{:.2}", entry.expected_frequency),
                    format!("{:.2}", entry.deviation_percent),
                ])?;
            }
            csv.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &rounded)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
    }

    Ok(())
}
