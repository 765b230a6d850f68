use std::fmt;

/// One translatable `<string>` entry pulled out of a resource document.
///
/// `text` is always non-empty: entries whose normalized text is empty are
/// dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    pub identifier: String,
    pub text: String,
}

impl TextUnit {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}

/// Detector confidence as a percentage with two decimal places.
///
/// Stored as hundredths of a percent (`8743` is `87.43%`), so ordering always
/// agrees with the value that ends up in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percentage(u32);

impl Percentage {
    pub const MAX: Percentage = Percentage(10_000);

    /// Convert a model probability in `[0, 1]`. Out-of-range and NaN inputs
    /// are clamped.
    pub fn from_probability(probability: f32) -> Self {
        let hundredths = (f64::from(probability) * 10_000.0).round();
        if hundredths.is_nan() || hundredths <= 0.0 {
            Percentage(0)
        } else if hundredths >= 10_000.0 {
            Self::MAX
        } else {
            Percentage(hundredths as u32)
        }
    }

    pub fn from_hundredths(hundredths: u32) -> Self {
        Percentage(hundredths.min(Self::MAX.0))
    }

    pub fn hundredths(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

/// Output of the language identifier for a single text.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// ISO 639-1 or ISO 639-3 code, as reported by the backend.
    pub code: String,
    /// Top-1 probability in `[0, 1]`.
    pub probability: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub unit: TextUnit,
    pub language_code: String,
    pub language_name: String,
    pub confidence: Percentage,
}

/// A flagged entry as it appears in the CSV report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub identifier: String,
    pub text: String,
    pub language_name: String,
    pub confidence: Percentage,
}

impl From<ClassificationResult> for ReportRow {
    fn from(result: ClassificationResult) -> Self {
        Self {
            identifier: result.unit.identifier,
            text: result.unit.text,
            language_name: result.language_name,
            confidence: result.confidence,
        }
    }
}
