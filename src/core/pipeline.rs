//! Per-unit classification.
//!
//! Units are independent, so they are classified on the rayon pool; results
//! come back in input order.

use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    error::Result,
    identify::LanguageIdentifier,
    registry::LanguageRegistry,
    types::{ClassificationResult, Percentage, TextUnit},
};

/// Classify every unit. One result per unit, same order.
///
/// The first failing unit aborts the batch.
pub fn classify(
    units: &[TextUnit],
    identifier: &dyn LanguageIdentifier,
    registry: &dyn LanguageRegistry,
) -> Result<Vec<ClassificationResult>> {
    info!("Classifying {} strings", units.len());

    units
        .par_iter()
        .map(|unit| classify_unit(unit, identifier, registry))
        .collect()
}

pub fn classify_unit(
    unit: &TextUnit,
    identifier: &dyn LanguageIdentifier,
    registry: &dyn LanguageRegistry,
) -> Result<ClassificationResult> {
    let detection = identifier.identify(&unit.text)?;
    let confidence = Percentage::from_probability(detection.probability);
    let language_name = registry.name_of(&detection.code)?;

    debug!(
        "{}: {} ({}) {}",
        unit.identifier, language_name, detection.code, confidence
    );

    Ok(ClassificationResult {
        unit: unit.clone(),
        language_code: detection.code,
        language_name,
        confidence,
    })
}
