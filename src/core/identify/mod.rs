//! Language identification backends.
//!
//! A detector is built once per run by [`load_identifier`] and then shared
//! read-only by every classification call.

use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{error::Result, types::Detection};

#[cfg(feature = "fasttext")]
mod fasttext_detector;
mod whatlang_detector;

#[cfg(feature = "fasttext")]
pub use fasttext_detector::FastTextDetector;
pub use whatlang_detector::WhatlangDetector;

/// File name of the pretrained fastText language-ID model.
pub const MODEL_FILE_NAME: &str = "lid.176.ftz";

/// Code reported when a text carries no detectable language.
pub const UNDETERMINED_CODE: &str = "und";

/// Black-box language identifier: `text -> (code, probability)`.
pub trait LanguageIdentifier: Send + Sync {
    /// Return the most probable language of `text`.
    fn identify(&self, text: &str) -> Result<Detection>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// Trigram-based detector bundled with the binary
    #[default]
    Whatlang,
    /// Pretrained fastText model (lid.176.ftz)
    Fasttext,
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorKind::Whatlang => write!(f, "whatlang"),
            DetectorKind::Fasttext => write!(f, "fasttext"),
        }
    }
}

/// Build the detector selected by `kind`.
///
/// `model_path` is only read by backends that need a model asset. A model that
/// cannot be loaded is fatal for the run.
pub fn load_identifier(kind: DetectorKind, model_path: &Path) -> Result<Box<dyn LanguageIdentifier>> {
    match kind {
        DetectorKind::Whatlang => Ok(Box::new(WhatlangDetector::new())),
        DetectorKind::Fasttext => load_fasttext(model_path),
    }
}

#[cfg(feature = "fasttext")]
fn load_fasttext(model_path: &Path) -> Result<Box<dyn LanguageIdentifier>> {
    Ok(Box::new(FastTextDetector::load(model_path)?))
}

#[cfg(not(feature = "fasttext"))]
fn load_fasttext(_model_path: &Path) -> Result<Box<dyn LanguageIdentifier>> {
    Err(super::error::LidError::DetectorUnavailable("fasttext"))
}

/// Default model location: `models/lid.176.ftz` next to the executable.
pub fn default_model_path() -> PathBuf {
    let base = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    base.join("models").join(MODEL_FILE_NAME)
}
