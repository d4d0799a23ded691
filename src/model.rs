//! Linear regression artifact for soulmate probability prediction.
//!
//! A [`SoulmateModel`] is a pre-fitted model treated as opaque input: an
//! ordered feature schema, one coefficient per feature, and an intercept.
//! Fitting is out of scope; artifacts are produced elsewhere and loaded
//! from `.alma` files (see [`crate::serialization`]).
//!
//! # Example
//!
//! ```
//! use almagemela::model::SoulmateModel;
//! use almagemela::encoding::encode;
//! use almagemela::primitives::Vector;
//! use almagemela::profile::Profile;
//!
//! let model = SoulmateModel::new(
//!     vec!["age".to_string(), "people_met_per_year".to_string()],
//!     Vector::from_slice(&[0.001, 0.0005]),
//!     0.1,
//! ).unwrap();
//!
//! let row = encode(&Profile::default(), model.expected_columns());
//! let probability = model.predict(&row).unwrap();
//! assert!((probability - 0.175).abs() < 1e-6);
//! ```

use crate::encoding::FeatureRow;
use crate::error::{AlmaError, Result};
use crate::primitives::Vector;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Model type tag stored in artifact metadata.
pub const MODEL_TYPE: &str = "linear_regression";

/// A pre-fitted linear regression over an ordered feature schema.
///
/// The model equation is `y = intercept + coefficients · x`, where `x` is
/// a feature row aligned to [`SoulmateModel::expected_columns`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoulmateModel {
    feature_names: Vec<String>,
    coefficients: Vector<f32>,
    intercept: f32,
}

impl SoulmateModel {
    /// Creates a model from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema is empty, contains empty or
    /// duplicate names, or its length doesn't match the coefficients.
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vector<f32>,
        intercept: f32,
    ) -> Result<Self> {
        if feature_names.is_empty() {
            return Err("Model must have at least one feature".into());
        }
        for (i, name) in feature_names.iter().enumerate() {
            if name.is_empty() {
                return Err("Feature names cannot be empty".into());
            }
            if feature_names[..i].contains(name) {
                return Err(AlmaError::Other(format!("Duplicate feature name: {name}")));
            }
        }
        if feature_names.len() != coefficients.len() {
            return Err(AlmaError::dimension_mismatch(
                "coefficients",
                feature_names.len(),
                coefficients.len(),
            ));
        }
        Ok(Self {
            feature_names,
            coefficients,
            intercept,
        })
    }

    /// The ordered feature schema this model was fitted on. Every input
    /// row must carry exactly these columns, in this order.
    #[must_use]
    pub fn expected_columns(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of input features.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Coefficient vector (one per feature, schema order).
    #[must_use]
    pub fn coefficients(&self) -> &Vector<f32> {
        &self.coefficients
    }

    /// Intercept (bias) term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Predicts the probability for one encoded row.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if the row's column sequence differs
    /// from the model schema, or a prediction error if the result is not
    /// a finite number.
    pub fn predict(&self, row: &FeatureRow) -> Result<f32> {
        if row.len() != self.n_features() {
            return Err(AlmaError::dimension_mismatch(
                "columns",
                self.n_features(),
                row.len(),
            ));
        }
        for (expected, (actual, _)) in self.feature_names.iter().zip(row.iter()) {
            if expected != actual {
                return Err(AlmaError::DimensionMismatch {
                    expected: format!("column '{expected}'"),
                    actual: format!("column '{actual}'"),
                });
            }
        }

        let prediction = self.intercept + self.coefficients.dot(&row.to_vector());
        if !prediction.is_finite() {
            return Err(AlmaError::prediction(format!(
                "non-finite result: {prediction}"
            )));
        }
        Ok(prediction)
    }

    /// Loads a model from a `.alma` artifact file.
    ///
    /// # Errors
    ///
    /// Returns [`AlmaError::ArtifactNotFound`] if the path doesn't
    /// resolve to a readable file, or a format/checksum error if the
    /// bytes are not a valid artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::serialization::load_alma(path)
    }

    /// Saves the model to a `.alma` artifact file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::serialization::save_alma(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode;
    use crate::profile::{Location, PersonalityType, Profile};

    fn small_model() -> SoulmateModel {
        SoulmateModel::new(
            vec![
                "age".to_string(),
                "people_met_per_year".to_string(),
                "social_events_per_month".to_string(),
                "personality_type_ENFP".to_string(),
                "location_Urban".to_string(),
            ],
            Vector::from_slice(&[0.002, 0.0001, 0.01, 0.05, 0.03]),
            0.1,
        )
        .expect("valid model parts")
    }

    #[test]
    fn test_new_rejects_empty_schema() {
        let result = SoulmateModel::new(Vec::new(), Vector::from_vec(Vec::new()), 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let result = SoulmateModel::new(
            vec!["age".to_string(), "age".to_string()],
            Vector::from_slice(&[1.0, 2.0]),
            0.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = SoulmateModel::new(
            vec!["age".to_string()],
            Vector::from_slice(&[1.0, 2.0]),
            0.0,
        );
        assert!(matches!(
            result,
            Err(AlmaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_predict_known_value() {
        let model = small_model();
        let profile = Profile::new(25, 100, 4, PersonalityType::Enfp, Location::Urban);
        let row = encode(&profile, model.expected_columns());

        // 0.1 + 25*0.002 + 100*0.0001 + 4*0.01 + 1*0.05 + 1*0.03
        let prediction = model.predict(&row).expect("aligned row");
        assert!((prediction - 0.28).abs() < 1e-6);
    }

    #[test]
    fn test_predict_rejects_wrong_arity() {
        let model = small_model();
        let row = FeatureRow::from_pairs(vec![("age".to_string(), 25.0)])
            .expect("unique names");
        assert!(matches!(
            model.predict(&row),
            Err(AlmaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_predict_rejects_misordered_columns() {
        let model = small_model();
        let row = FeatureRow::from_pairs(vec![
            ("people_met_per_year".to_string(), 100.0),
            ("age".to_string(), 25.0),
            ("social_events_per_month".to_string(), 4.0),
            ("personality_type_ENFP".to_string(), 0.0),
            ("location_Urban".to_string(), 0.0),
        ])
        .expect("unique names");
        assert!(matches!(
            model.predict(&row),
            Err(AlmaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_predict_rejects_non_finite_result() {
        let model = SoulmateModel::new(
            vec!["age".to_string()],
            Vector::from_slice(&[f32::MAX]),
            0.0,
        )
        .expect("valid model parts");
        let row = FeatureRow::from_pairs(vec![("age".to_string(), f32::MAX)])
            .expect("unique names");
        assert!(matches!(
            model.predict(&row),
            Err(AlmaError::Prediction { .. })
        ));
    }
}
