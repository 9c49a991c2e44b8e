//! Defuzzification rule used to reduce a fuzzy number to a scalar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{TriangularFuzzyNumber, ValidationError};

/// Rule for reducing a triangular fuzzy number to one representative scalar.
///
/// A single rule must be used for a whole computation: ranking, acceptance
/// thresholds and display all read the same reduced values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Defuzzification {
    /// Simple mean `(l + m + u) / 3`.
    #[default]
    Centroid,
    /// Mode-weighted mean `(l + 2m + u) / 4`.
    ModeWeighted,
}

impl Defuzzification {
    /// Applies the rule to a fuzzy number.
    pub fn apply(&self, value: &TriangularFuzzyNumber) -> f64 {
        match self {
            Defuzzification::Centroid => (value.lower + value.mode + value.upper) / 3.0,
            Defuzzification::ModeWeighted => {
                (value.lower + 2.0 * value.mode + value.upper) / 4.0
            }
        }
    }

    /// Returns the configuration key for this rule.
    pub fn key(&self) -> &'static str {
        match self {
            Defuzzification::Centroid => "centroid",
            Defuzzification::ModeWeighted => "mode_weighted",
        }
    }
}

impl FromStr for Defuzzification {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "centroid" | "mean" => Ok(Defuzzification::Centroid),
            "mode_weighted" => Ok(Defuzzification::ModeWeighted),
            other => Err(ValidationError::invalid_format(
                "defuzzification",
                format!("unknown rule '{}', expected centroid or mode_weighted", other),
            )),
        }
    }
}

impl fmt::Display for Defuzzification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
