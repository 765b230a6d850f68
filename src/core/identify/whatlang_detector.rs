//! Whatlang-based language detector.
//!
//! Trigram detection from the `whatlang` crate. Needs no model asset.
//!
//! whatlang speaks ISO 639-3 and sometimes names an individual language where
//! the language as a whole is meant (`cmn` for Chinese). Codes are reported the
//! way the fastText model labels them: the macrolanguage for those, ISO 639-1
//! where one exists, ISO 639-3 otherwise.

use isolang::Language;
use tracing::debug;
use whatlang::Detector;

use super::{LanguageIdentifier, UNDETERMINED_CODE};
use crate::core::{error::Result, types::Detection};

/// Individual languages whatlang reports, and the macrolanguage they belong to.
const MACROLANGUAGES: &[(&str, &str)] = &[
    ("arb", "ar"), // Standard Arabic
    ("cmn", "zh"), // Mandarin Chinese
    ("nob", "no"), // Norwegian Bokmål
    ("pes", "fa"), // Iranian Persian
];

pub struct WhatlangDetector {
    detector: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        debug!("Initializing whatlang language detector");
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageIdentifier for WhatlangDetector {
    fn identify(&self, text: &str) -> Result<Detection> {
        let detection = match self.detector.detect(text) {
            Some(info) => Detection {
                code: normalize_code(info.lang().code()),
                probability: info.confidence() as f32,
            },
            // Digits, placeholders, emoji and the like
            None => Detection {
                code: UNDETERMINED_CODE.to_string(),
                probability: 0.0,
            },
        };
        Ok(detection)
    }
}

fn normalize_code(code: &str) -> String {
    if let Some((_, macrolanguage)) = MACROLANGUAGES.iter().find(|(c, _)| *c == code) {
        return (*macrolanguage).to_string();
    }

    Language::from_639_3(code)
        .and_then(|language| language.to_639_1())
        .unwrap_or(code)
        .to_string()
}
