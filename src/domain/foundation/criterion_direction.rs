//! Direction of preference for a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether higher values of a criterion are preferred (benefit) or lower ones (cost).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionDirection {
    #[default]
    Benefit,
    Cost,
}

impl CriterionDirection {
    /// Maps an `is_benefit` flag to a direction.
    pub fn from_is_benefit(is_benefit: bool) -> Self {
        if is_benefit {
            CriterionDirection::Benefit
        } else {
            CriterionDirection::Cost
        }
    }

    /// Returns true for a benefit criterion.
    pub fn is_benefit(&self) -> bool {
        matches!(self, CriterionDirection::Benefit)
    }

    /// Returns the opposite direction.
    pub fn toggled(&self) -> Self {
        match self {
            CriterionDirection::Benefit => CriterionDirection::Cost,
            CriterionDirection::Cost => CriterionDirection::Benefit,
        }
    }
}

impl fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionDirection::Benefit => write!(f, "benefit"),
            CriterionDirection::Cost => write!(f, "cost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_benefit() {
        assert!(CriterionDirection::default().is_benefit());
    }

    #[test]
    fn from_flag_round_trips() {
        assert_eq!(CriterionDirection::from_is_benefit(true), CriterionDirection::Benefit);
        assert_eq!(CriterionDirection::from_is_benefit(false), CriterionDirection::Cost);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(CriterionDirection::Benefit.toggled(), CriterionDirection::Cost);
        assert_eq!(CriterionDirection::Cost.toggled(), CriterionDirection::Benefit);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CriterionDirection::Cost).unwrap(), "\"cost\"");
    }
}
