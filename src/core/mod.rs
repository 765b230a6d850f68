//! Core audit engine.
//!
//! The pipeline runs in four steps, each a pure function of its input:
//!
//! 1. **Extract** (`extract`): `<string>` entries -> [`TextUnit`]s
//! 2. **Classify** (`pipeline`): each unit -> language code, name and confidence
//! 3. **Build** (`report`): drop expected-language entries, rank the rest
//! 4. **Write** (`report`): serialize the ranked rows as CSV
//!
//! `audit` wires the steps together for one run.

pub mod audit;
pub mod error;
pub mod extract;
pub mod identify;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod types;

pub use audit::{AuditSummary, RunConfig, run_audit};
pub use error::{LidError, Result};
pub use extract::{extract, extract_from_str};
pub use identify::{DetectorKind, LanguageIdentifier, default_model_path, load_identifier};
pub use pipeline::classify;
pub use registry::{IsoRegistry, LanguageRegistry};
pub use report::{build_report, render_csv, write_report};
pub use types::{ClassificationResult, Detection, Percentage, ReportRow, TextUnit};
