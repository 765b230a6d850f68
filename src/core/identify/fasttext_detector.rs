//! FastText-based language detector.
//!
//! Wraps the pretrained `lid.176.ftz` language-ID model. Labels come back as
//! `__label__<code>` with ISO 639-1 codes where one exists.

use std::path::Path;

use fasttext::FastText;
use tracing::info;

use super::LanguageIdentifier;
use crate::core::{
    error::{LidError, Result},
    types::Detection,
};

const LABEL_PREFIX: &str = "__label__";

pub struct FastTextDetector {
    model: FastText,
}

impl FastTextDetector {
    /// Load the model file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading fastText language model from {}", path.display());

        let model_load = |reason: String| LidError::ModelLoad {
            path: path.to_path_buf(),
            reason,
        };

        if !path.is_file() {
            return Err(model_load("model file not found".to_string()));
        }
        let path_str = path
            .to_str()
            .ok_or_else(|| model_load("model path is not valid UTF-8".to_string()))?;

        let mut model = FastText::new();
        model.load_model(path_str).map_err(model_load)?;

        Ok(Self { model })
    }
}

impl LanguageIdentifier for FastTextDetector {
    fn identify(&self, text: &str) -> Result<Detection> {
        let predictions = self
            .model
            .predict(text, 1, 0.0)
            .map_err(LidError::Detection)?;

        let top = predictions
            .into_iter()
            .next()
            .ok_or_else(|| LidError::Detection(format!("no prediction for \"{}\"", text)))?;

        Ok(Detection {
            code: strip_label(&top.label).to_string(),
            probability: top.prob,
        })
    }
}

fn strip_label(label: &str) -> &str {
    label.strip_prefix(LABEL_PREFIX).unwrap_or(label)
}
