//! `alma validate`: verify artifact integrity.
//!
//! Checks run in order: header structure, payload (coefficient count and
//! CRC32), finite values, and encoder coverage of the schema. The last
//! check only warns: a column the encoder never produces is silently
//! zero-filled at prediction time, which can hide schema drift.

use crate::error::{CliError, Result};
use crate::output;
use almagemela::encoding::{
    indicator_column, AGE_COLUMN, LOCATION_FIELD, PEOPLE_MET_COLUMN, PERSONALITY_FIELD,
    SOCIAL_EVENTS_COLUMN,
};
use almagemela::profile::{Location, PersonalityType};
use almagemela::serialization::{load_alma, read_metadata};
use std::path::Path;

pub(crate) fn run(model_path: &Path) -> Result<()> {
    let metadata = read_metadata(model_path)?;
    output::success(&format!(
        "header: format v{}, model type '{}', {} feature names",
        metadata.format_version,
        metadata.model_type,
        metadata.feature_names.len()
    ));

    let model = match load_alma(model_path) {
        Ok(model) => model,
        Err(e) => {
            let message = e.to_string();
            output::fail(&message);
            return Err(CliError::ValidationFailed(message));
        }
    };
    output::success("payload: coefficient count and checksum verified");

    let all_finite = model.intercept().is_finite()
        && model.coefficients().iter().all(|c| c.is_finite());
    if !all_finite {
        output::fail("non-finite coefficient or intercept");
        return Err(CliError::ValidationFailed(
            "non-finite coefficient or intercept".to_string(),
        ));
    }
    output::success("values: intercept and coefficients are finite");

    let unknown: Vec<&String> = model
        .expected_columns()
        .iter()
        .filter(|name| !encoder_produces(name))
        .collect();
    if unknown.is_empty() {
        output::success("schema: every column is producible by the encoder");
    } else {
        for name in unknown {
            output::warn(&format!(
                "schema column '{name}' is never produced by the encoder and will always be 0"
            ));
        }
    }

    Ok(())
}

/// Whether the feature encoder can ever emit a non-zero value for this
/// column name.
fn encoder_produces(name: &str) -> bool {
    if name == AGE_COLUMN || name == PEOPLE_MET_COLUMN || name == SOCIAL_EVENTS_COLUMN {
        return true;
    }
    PersonalityType::ALL
        .iter()
        .any(|p| indicator_column(PERSONALITY_FIELD, p.as_str()) == name)
        || Location::ALL
            .iter()
            .any(|l| indicator_column(LOCATION_FIELD, l.as_str()) == name)
}
