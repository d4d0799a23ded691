//! Input domain types: the lifestyle profile a prediction is made from.
//!
//! A [`Profile`] is one immutable record per evaluation. Numeric fields are
//! clamped into their control ranges at construction, so an out-of-range
//! record cannot be built.
//!
//! # Example
//!
//! ```
//! use almagemela::profile::{Location, PersonalityType, Profile};
//!
//! let profile = Profile::new(25, 100, 4, PersonalityType::Enfp, Location::Urban);
//! assert_eq!(profile.age(), 25);
//! assert_eq!(profile.location().as_str(), "Urban");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Valid age range (inclusive).
pub const AGE_RANGE: (u32, u32) = (18, 60);
/// Valid people-met-per-year range (inclusive).
pub const PEOPLE_MET_RANGE: (u32, u32) = (0, 1000);
/// Valid social-events-per-month range (inclusive).
pub const SOCIAL_EVENTS_RANGE: (u32, u32) = (0, 30);

/// Sixteen-code personality taxonomy.
///
/// `ALL` is the presentation order (the order the controls list the codes
/// in); the encoding reference category is determined by lexicographic
/// order, see [`PersonalityType::reference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityType {
    Intj,
    Entp,
    Infj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Infp,
    Enfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
    Intp,
    Entj,
}

impl PersonalityType {
    /// All personality types, in presentation order.
    pub const ALL: [PersonalityType; 16] = [
        Self::Intj,
        Self::Entp,
        Self::Infj,
        Self::Enfp,
        Self::Istj,
        Self::Isfj,
        Self::Estj,
        Self::Esfj,
        Self::Infp,
        Self::Enfj,
        Self::Istp,
        Self::Isfp,
        Self::Estp,
        Self::Esfp,
        Self::Intp,
        Self::Entj,
    ];

    /// Four-letter code for this personality type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intj => "INTJ",
            Self::Entp => "ENTP",
            Self::Infj => "INFJ",
            Self::Enfp => "ENFP",
            Self::Istj => "ISTJ",
            Self::Isfj => "ISFJ",
            Self::Estj => "ESTJ",
            Self::Esfj => "ESFJ",
            Self::Infp => "INFP",
            Self::Enfj => "ENFJ",
            Self::Istp => "ISTP",
            Self::Isfp => "ISFP",
            Self::Estp => "ESTP",
            Self::Esfp => "ESFP",
            Self::Intp => "INTP",
            Self::Entj => "ENTJ",
        }
    }

    /// The reference category: first code in lexicographic order, the
    /// level the training-time encoder dropped. Encoding the reference
    /// sets no indicator column.
    #[must_use]
    pub fn reference() -> Self {
        let mut reference = Self::ALL[0];
        for code in Self::ALL {
            if code.as_str() < reference.as_str() {
                reference = code;
            }
        }
        reference
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == code)
            .ok_or_else(|| format!("unknown personality type: {s}"))
    }
}

/// Residential location category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Urban,
    Suburban,
    Rural,
}

impl Location {
    /// All locations, in presentation order.
    pub const ALL: [Location; 3] = [Self::Urban, Self::Suburban, Self::Rural];

    /// Display name for this location.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urban => "Urban",
            Self::Suburban => "Suburban",
            Self::Rural => "Rural",
        }
    }

    /// The reference category: first name in lexicographic order, the
    /// level the training-time encoder dropped.
    #[must_use]
    pub fn reference() -> Self {
        let mut reference = Self::ALL[0];
        for location in Self::ALL {
            if location.as_str() < reference.as_str() {
                reference = location;
            }
        }
        reference
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("unknown location: {s}"))
    }
}

/// One lifestyle record, immutable once constructed.
///
/// Numeric fields are clamped into their control ranges, so every
/// `Profile` is in-domain by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    age: u32,
    people_met_per_year: u32,
    social_events_per_month: u32,
    personality_type: PersonalityType,
    location: Location,
}

impl Profile {
    /// Creates a profile, clamping numeric fields into their valid ranges.
    #[must_use]
    pub fn new(
        age: u32,
        people_met_per_year: u32,
        social_events_per_month: u32,
        personality_type: PersonalityType,
        location: Location,
    ) -> Self {
        Self {
            age: age.clamp(AGE_RANGE.0, AGE_RANGE.1),
            people_met_per_year: people_met_per_year
                .clamp(PEOPLE_MET_RANGE.0, PEOPLE_MET_RANGE.1),
            social_events_per_month: social_events_per_month
                .clamp(SOCIAL_EVENTS_RANGE.0, SOCIAL_EVENTS_RANGE.1),
            personality_type,
            location,
        }
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// New people met per year.
    #[must_use]
    pub fn people_met_per_year(&self) -> u32 {
        self.people_met_per_year
    }

    /// Social events attended per month.
    #[must_use]
    pub fn social_events_per_month(&self) -> u32 {
        self.social_events_per_month
    }

    /// Personality type.
    #[must_use]
    pub fn personality_type(&self) -> PersonalityType {
        self.personality_type
    }

    /// Residential location.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }
}

impl Default for Profile {
    /// The controls' default record: 25 / 100 / 4 / INTJ / Urban.
    fn default() -> Self {
        Self::new(25, 100, 4, PersonalityType::Intj, Location::Urban)
    }
}
