//! Almagemela: soulmate probability estimation from lifestyle attributes.
//!
//! Almagemela collects five lifestyle attributes, aligns them to a
//! pre-trained regression model's feature schema via drop-first one-hot
//! encoding, and presents the predicted probability as a percentage.
//!
//! # Quick Start
//!
//! ```
//! use almagemela::prelude::*;
//!
//! // A pre-fitted model (normally loaded from a .alma artifact).
//! let model = SoulmateModel::new(
//!     vec![
//!         "age".to_string(),
//!         "people_met_per_year".to_string(),
//!         "social_events_per_month".to_string(),
//!         "personality_type_ENFP".to_string(),
//!         "location_Urban".to_string(),
//!     ],
//!     Vector::from_slice(&[0.002, 0.0001, 0.01, 0.05, 0.03]),
//!     0.1,
//! ).unwrap();
//!
//! // One evaluation: profile -> encoded row -> prediction -> display.
//! let profile = Profile::new(25, 100, 4, PersonalityType::Enfp, Location::Urban);
//! let row = encode(&profile, model.expected_columns());
//! let probability = model.predict(&row).unwrap();
//! assert_eq!(format_probability(probability), "28.0%");
//! ```
//!
//! # Modules
//!
//! - [`profile`]: Input domain types (lifestyle record, categorical enums)
//! - [`encoding`]: Feature row construction and schema alignment
//! - [`model`]: The linear regression artifact and prediction
//! - [`serialization`]: The `.alma` artifact container
//! - [`present`]: Percentage formatting and user-facing error text
//! - [`primitives`]: Core Vector type
//! - [`error`]: Crate error type and `Result` alias

pub mod encoding;
pub mod error;
pub mod model;
pub mod prelude;
pub mod present;
pub mod primitives;
pub mod profile;
pub mod serialization;
