//! Feature encoding: profile -> model-aligned numeric row.
//!
//! Reconstructs the feature layout the model was fitted on: numeric fields
//! pass through, categorical fields are one-hot encoded with the reference
//! (lexicographically first) level dropped, and the result is reconciled
//! and projected against the model's expected column list.
//!
//! # Example
//!
//! ```
//! use almagemela::encoding::encode;
//! use almagemela::profile::{Location, PersonalityType, Profile};
//!
//! let profile = Profile::new(25, 100, 4, PersonalityType::Enfp, Location::Urban);
//! let expected = vec![
//!     "age".to_string(),
//!     "people_met_per_year".to_string(),
//!     "social_events_per_month".to_string(),
//!     "personality_type_ENFP".to_string(),
//!     "location_Urban".to_string(),
//! ];
//! let row = encode(&profile, &expected);
//! assert_eq!(row.get("personality_type_ENFP"), Some(1.0));
//! assert_eq!(row.get("location_Urban"), Some(1.0));
//! ```

use crate::error::Result;
use crate::primitives::Vector;
use crate::profile::{Location, PersonalityType, Profile};

/// Column name for the age feature.
pub const AGE_COLUMN: &str = "age";
/// Column name for the people-met-per-year feature.
pub const PEOPLE_MET_COLUMN: &str = "people_met_per_year";
/// Column name for the social-events-per-month feature.
pub const SOCIAL_EVENTS_COLUMN: &str = "social_events_per_month";
/// Column-name prefix for personality indicator columns.
pub const PERSONALITY_FIELD: &str = "personality_type";
/// Column-name prefix for location indicator columns.
pub const LOCATION_FIELD: &str = "location";

/// Indicator column name for a categorical field value,
/// e.g. `personality_type_ENFP`.
#[must_use]
pub fn indicator_column(field: &str, value: &str) -> String {
    format!("{field}_{value}")
}

/// An ordered mapping from column name to numeric value.
///
/// This is a thin `Vec<(String, f32)>` wrapper: column order is
/// significant, names are unique, and lookup is by name.
///
/// # Examples
///
/// ```
/// use almagemela::encoding::FeatureRow;
///
/// let row = FeatureRow::from_pairs(vec![
///     ("age".to_string(), 25.0),
///     ("people_met_per_year".to_string(), 100.0),
/// ]).expect("unique non-empty names");
/// assert_eq!(row.len(), 2);
/// assert_eq!(row.get("age"), Some(25.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    columns: Vec<(String, f32)>,
}

impl FeatureRow {
    /// Creates a row from ordered (name, value) pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or duplicated.
    pub fn from_pairs(columns: Vec<(String, f32)>) -> Result<Self> {
        for (i, (name, _)) in columns.iter().enumerate() {
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
            if columns[..i].iter().any(|(n, _)| n == name) {
                return Err(format!("Duplicate column name: {name}").into());
            }
        }
        Ok(Self { columns })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column names, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Looks up a value by column name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f32> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, v)| v)
    }

    /// Iterates over (name, value) pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Returns the values as a dense vector, in column order.
    #[must_use]
    pub fn to_vector(&self) -> Vector<f32> {
        Vector::from_vec(self.columns.iter().map(|&(_, v)| v).collect())
    }
}

/// Encodes a profile into a row aligned to `expected_columns`.
///
/// The encoding mirrors the model's training-time layout:
///
/// 1. The three numeric fields are copied as-is.
/// 2. Each categorical field contributes at most one indicator column,
///    `<field>_<value>` = 1. The reference level (lexicographically
///    first) contributes nothing: a reference-valued field is the
///    all-zero indicator pattern.
/// 3. Every expected column the above did not produce is filled with 0.
/// 4. The result contains exactly `expected_columns`, in that order;
///    computed columns the model does not expect are dropped.
///
/// Categories the schema doesn't list disappear silently into zeros; the
/// caller sees no distinction between a dropped reference level and
/// schema drift.
#[must_use]
pub fn encode(profile: &Profile, expected_columns: &[String]) -> FeatureRow {
    let mut computed: Vec<(String, f32)> = vec![
        (AGE_COLUMN.to_string(), profile.age() as f32),
        (
            PEOPLE_MET_COLUMN.to_string(),
            profile.people_met_per_year() as f32,
        ),
        (
            SOCIAL_EVENTS_COLUMN.to_string(),
            profile.social_events_per_month() as f32,
        ),
    ];

    if profile.personality_type() != PersonalityType::reference() {
        computed.push((
            indicator_column(PERSONALITY_FIELD, profile.personality_type().as_str()),
            1.0,
        ));
    }
    if profile.location() != Location::reference() {
        computed.push((
            indicator_column(LOCATION_FIELD, profile.location().as_str()),
            1.0,
        ));
    }

    // Reconciliation and projection in one ordered pass: every expected
    // column takes its computed value or 0, and computed columns not in
    // the expected schema are dropped.
    let columns = expected_columns
        .iter()
        .map(|name| {
            let value = computed
                .iter()
                .find(|(n, _)| n == name)
                .map_or(0.0, |&(_, v)| v);
            (name.clone(), value)
        })
        .collect();

    FeatureRow { columns }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
