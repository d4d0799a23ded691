//! Result presentation: percentage formatting and user-facing error text.
//!
//! The prediction scalar is a probability; it is shown as a percentage
//! rounded to two decimal places, with trailing zeros trimmed down to at
//! least one decimal (`0.4567` -> `"45.67%"`, `1.0` -> `"100.0%"`).

use crate::error::AlmaError;

/// Fixed advisory shown when the model artifact is missing.
pub const MISSING_ARTIFACT_ADVICE: &str = "Model file 'soulmate_model.alma' not found. Please ensure the model is trained and saved.";

/// Formats a probability as a percentage string.
///
/// # Examples
///
/// ```
/// use almagemela::present::format_probability;
///
/// assert_eq!(format_probability(0.4567), "45.67%");
/// assert_eq!(format_probability(1.0), "100.0%");
/// ```
#[must_use]
pub fn format_probability(probability: f32) -> String {
    let percentage = f64::from(probability) * 100.0;
    let mut text = format!("{percentage:.2}");

    // Two-decimal rounding, then minimal decimals with at least one.
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.push('0');
    }
    format!("{text}%")
}

/// Renders an error as the user-visible message: a missing artifact gets
/// the fixed advisory, every other failure shows its own detail text.
#[must_use]
pub fn present_error(error: &AlmaError) -> String {
    match error {
        AlmaError::ArtifactNotFound { .. } => MISSING_ARTIFACT_ADVICE.to_string(),
        other => format!("An error occurred: {other}"),
    }
}
