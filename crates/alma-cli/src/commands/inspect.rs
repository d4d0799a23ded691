//! `alma inspect`: show artifact metadata and coefficient summary.

use crate::error::Result;
use crate::output;
use almagemela::serialization::{load_alma, read_metadata};
use std::path::Path;

pub(crate) fn run(model_path: &Path) -> Result<()> {
    let metadata = read_metadata(model_path)?;

    output::section("Artifact");
    output::kv("Path", model_path.display());
    output::kv("Model type", &metadata.model_type);
    output::kv("Format version", metadata.format_version);
    output::kv("Features", metadata.feature_names.len());

    output::section("Expected columns");
    for (i, name) in metadata.feature_names.iter().enumerate() {
        println!("  {:2}  {name}", i + 1);
    }

    let model = load_alma(model_path)?;
    let coefficients = model.coefficients().as_slice();
    let min = coefficients.iter().copied().fold(f32::INFINITY, f32::min);
    let max = coefficients
        .iter()
        .copied()
        .fold(f32::NEG_INFINITY, f32::max);

    output::section("Coefficients");
    output::kv("Intercept", model.intercept());
    output::kv("Min", min);
    output::kv("Max", max);

    Ok(())
}
