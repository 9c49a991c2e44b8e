//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::{Defuzzification, StrategyWeight};
use crate::domain::vikor::EngineSettings;

/// Ranking engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Strategy weight v, used when neither the CLI nor the document sets one
    #[serde(default = "default_strategy_weight")]
    pub strategy_weight: f64,

    /// Defuzzification rule for every stage of a computation
    #[serde(default)]
    pub defuzzification: Defuzzification,
}

impl EngineConfig {
    /// Engine settings described by this configuration
    pub fn settings(&self) -> Result<EngineSettings, ValidationError> {
        let weight = StrategyWeight::try_new(self.strategy_weight)
            .map_err(|_| ValidationError::StrategyWeightOutOfRange(self.strategy_weight))?;
        Ok(EngineSettings::new(weight, self.defuzzification))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.settings().map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy_weight: default_strategy_weight(),
            defuzzification: Defuzzification::default(),
        }
    }
}

fn default_strategy_weight() -> f64 {
    StrategyWeight::CONSENSUS.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy_weight, 0.5);
        assert_eq!(config.defuzzification, Defuzzification::Centroid);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_settings_carry_values() {
        let config = EngineConfig {
            strategy_weight: 0.25,
            defuzzification: Defuzzification::ModeWeighted,
        };
        let settings = config.settings().unwrap();
        assert_eq!(settings.strategy_weight.value(), 0.25);
        assert_eq!(settings.defuzzification, Defuzzification::ModeWeighted);
    }

    #[test]
    fn test_validation_strategy_weight_out_of_range() {
        let config = EngineConfig {
            strategy_weight: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::StrategyWeightOutOfRange(v)) if v == 1.5
        ));
    }

    #[test]
    fn test_engine_config_deserialization() {
        let json = r#"{ "strategy_weight": 0.8, "defuzzification": "mode_weighted" }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.strategy_weight, 0.8);
        assert_eq!(config.defuzzification, Defuzzification::ModeWeighted);
    }
}
