//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FUZZY_VIKOR_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use fuzzy_vikor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Strategy weight v = {}", config.engine.strategy_weight);
//! ```

mod engine;
mod error;
mod logging;
mod report;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use report::{ReportConfig, ReportFormat};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ranking engine configuration (strategy weight, defuzzification)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report configuration (output format)
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `FUZZY_VIKOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FUZZY_VIKOR__ENGINE__STRATEGY_WEIGHT=0.7` -> `engine.strategy_weight = 0.7`
    /// - `FUZZY_VIKOR__ENGINE__DEFUZZIFICATION=mode_weighted`
    /// - `FUZZY_VIKOR__REPORT__FORMAT=json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FUZZY_VIKOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the strategy weight is outside [0, 1] or
    /// the log filter cannot be parsed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
