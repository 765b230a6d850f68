//! Language code to display name resolution.

use isolang::Language;

use super::error::{LidError, Result};

/// Resolves a detector language code to a human-readable name.
pub trait LanguageRegistry: Send + Sync {
    fn name_of(&self, code: &str) -> Result<String>;
}

/// Codes reserved by ISO 639-2/3 for special situations.
const RESERVED_CODES: &[(&str, &str)] = &[
    ("mis", "Uncoded languages"),
    ("mul", "Multiple languages"),
    ("und", "Undetermined"),
    ("zxx", "No linguistic content"),
];

/// Codes outside ISO 639-1/3 that language-ID models still emit: collective
/// ISO 639-2/5 codes and retired codes.
const SUPPLEMENTARY_CODES: &[(&str, &str)] = &[
    ("bh", "Bihari languages"),
    ("bih", "Bihari languages"),
    ("eml", "Emiliano-Romagnolo"),
    ("nah", "Nahuatl languages"),
];

/// Registry backed by the ISO 639 tables of the `isolang` crate.
///
/// Two-letter codes are looked up as ISO 639-1, everything else as ISO 639-3.
/// Names are the English reference names of the standard.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsoRegistry;

impl LanguageRegistry for IsoRegistry {
    fn name_of(&self, code: &str) -> Result<String> {
        let normalized = code.trim().to_ascii_lowercase();

        if let Some((_, name)) = RESERVED_CODES
            .iter()
            .chain(SUPPLEMENTARY_CODES)
            .find(|(c, _)| *c == normalized)
        {
            return Ok((*name).to_string());
        }

        let language = match normalized.len() {
            2 => Language::from_639_1(&normalized),
            3 => Language::from_639_3(&normalized),
            _ => None,
        };

        language
            .map(|language| language.to_name().to_string())
            .ok_or_else(|| LidError::UnknownLanguageCode {
                code: code.to_string(),
            })
    }
}
