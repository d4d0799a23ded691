//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use almagemela::prelude::*;
//! ```

pub use crate::encoding::{encode, FeatureRow};
pub use crate::error::{AlmaError, Result};
pub use crate::model::SoulmateModel;
pub use crate::present::{format_probability, present_error};
pub use crate::primitives::Vector;
pub use crate::profile::{Location, PersonalityType, Profile};
