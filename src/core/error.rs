//! Error type for the audit pipeline.
//!
//! Every variant is fatal for the run: there is no skip-and-continue mode.
//! Units that are empty or marked `translatable="false"` are not errors and
//! never reach this type.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LidError {
    #[error("failed to load language model from {}: {reason}", path.display())]
    ModelLoad { path: PathBuf, reason: String },

    #[error("detector '{0}' is not available in this build")]
    DetectorUnavailable(&'static str),

    #[error("failed to read resource file {}", path.display())]
    ReadResource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse resource file {}", path.display())]
    ParseResource {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("language detection failed: {0}")]
    Detection(String),

    #[error("unknown language code '{code}'")]
    UnknownLanguageCode { code: String },

    #[error("failed to write report to {}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LidError>;
