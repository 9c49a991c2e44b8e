//! Strategy weight value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Trade-off between group utility (v -> 1) and individual regret (v -> 0).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct StrategyWeight(f64);

impl StrategyWeight {
    /// Consensus strategy, v = 0.5.
    pub const CONSENSUS: Self = Self(0.5);

    /// Creates a strategy weight, clamping to [0, 1]. NaN becomes the consensus value.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::CONSENSUS;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a strategy weight, returning error if outside [0, 1].
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("strategy_weight", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns v.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns 1 - v.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl Default for StrategyWeight {
    fn default() -> Self {
        Self::CONSENSUS
    }
}

impl TryFrom<f64> for StrategyWeight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<StrategyWeight> for f64 {
    fn from(weight: StrategyWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for StrategyWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_unit_interval() {
        assert_eq!(StrategyWeight::new(1.5).value(), 1.0);
        assert_eq!(StrategyWeight::new(-0.2).value(), 0.0);
        assert_eq!(StrategyWeight::new(0.25).value(), 0.25);
        assert_eq!(StrategyWeight::new(f64::NAN), StrategyWeight::CONSENSUS);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        match StrategyWeight::try_new(1.01) {
            Err(ValidationError::OutOfRange { field, min, max, .. }) => {
                assert_eq!(field, "strategy_weight");
                assert_eq!(min, 0.0);
                assert_eq!(max, 1.0);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(StrategyWeight::try_new(f64::NAN).is_err());
    }

    #[test]
    fn complement_sums_to_one() {
        let v = StrategyWeight::new(0.3);
        assert!((v.value() + v.complement() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_consensus() {
        assert_eq!(StrategyWeight::default().value(), 0.5);
    }

    #[test]
    fn deserializes_with_validation() {
        let v: StrategyWeight = serde_json::from_str("0.75").unwrap();
        assert_eq!(v.value(), 0.75);
        assert!(serde_json::from_str::<StrategyWeight>("2.0").is_err());
    }

    #[test]
    fn serializes_transparently() {
        assert_eq!(serde_json::to_string(&StrategyWeight::new(0.5)).unwrap(), "0.5");
    }
}
