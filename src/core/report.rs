//! Report building: filter out expected-language entries, rank the rest by
//! confidence and serialize them as CSV.

use std::{fs, io, path::Path};

use tracing::info;

use super::{
    error::{LidError, Result},
    types::{ClassificationResult, ReportRow},
};

pub const REPORT_HEADER: [&str; 4] = ["Name", "Text", "Language", "Confidence"];

/// Keep results not detected as `expected_language` and order them by
/// descending confidence.
///
/// Language names are compared case-insensitively. The sort is stable, so
/// entries with equal confidence keep document order.
pub fn build_report(results: Vec<ClassificationResult>, expected_language: &str) -> Vec<ReportRow> {
    let expected = expected_language.to_lowercase();

    let mut rows: Vec<ReportRow> = results
        .into_iter()
        .filter(|result| result.language_name.to_lowercase() != expected)
        .map(ReportRow::from)
        .collect();

    rows.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    rows
}

/// Serialize rows to CSV, header first. Records end with `\r\n`.
pub fn render_csv(rows: &[ReportRow]) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        let confidence = row.confidence.to_string();
        writer.write_record([
            row.identifier.as_str(),
            row.text.as_str(),
            row.language_name.as_str(),
            confidence.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

/// Write the report to `path` in a single write, replacing any existing file.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    info!("Writing to csv file -> {}", path.display());

    let write_error = |source: io::Error| LidError::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    let content = render_csv(rows).map_err(|err| write_error(err.into()))?;
    fs::write(path, content).map_err(write_error)?;

    info!("Output created!");
    Ok(())
}
