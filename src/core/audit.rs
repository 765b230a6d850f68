//! End-to-end audit: extract -> classify -> build report -> write CSV.

use std::path::PathBuf;

use tracing::info;

use super::{
    error::Result,
    extract::extract,
    identify::{DetectorKind, LanguageIdentifier},
    pipeline::classify,
    registry::LanguageRegistry,
    report::{build_report, write_report},
    types::ReportRow,
};

/// Fully resolved inputs of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub resource_path: PathBuf,
    pub output_path: PathBuf,
    pub expected_language: String,
    pub detector: DetectorKind,
    pub model_path: PathBuf,
}

#[derive(Debug)]
pub struct AuditSummary {
    /// Number of translatable strings that were classified.
    pub units_checked: usize,
    /// Flagged entries, in report order.
    pub rows: Vec<ReportRow>,
    pub output_path: PathBuf,
}

pub fn run_audit(
    config: &RunConfig,
    identifier: &dyn LanguageIdentifier,
    registry: &dyn LanguageRegistry,
) -> Result<AuditSummary> {
    let units = extract(&config.resource_path)?;
    let results = classify(&units, identifier, registry)?;
    let rows = build_report(results, &config.expected_language);

    info!(
        "{} of {} strings not detected as {}",
        rows.len(),
        units.len(),
        config.expected_language
    );

    write_report(&config.output_path, &rows)?;

    Ok(AuditSummary {
        units_checked: units.len(),
        rows,
        output_path: config.output_path.clone(),
    })
}
