//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHPD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahpd::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Weighting with {:?}", config.weighting);
//! ```

mod error;
mod limits;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use limits::LimitsConfig;
pub use logging::LoggingConfig;
pub use output::OutputConfig;

use serde::Deserialize;

use crate::domain::analysis::WeightingMethod;

/// Root engine configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`EngineConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Result sections produced by default
    #[serde(default)]
    pub output: OutputConfig,

    /// Dataset size bounds
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Weighting law applied to criteria
    #[serde(default)]
    pub weighting: WeightingMethod,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHPD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `AHPD__LIMITS__MAX_OPTIONS=500` -> `limits.max_options = 500`
    /// - `AHPD__WEIGHTING=entropy` -> `weighting = entropy`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHPD")
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
    /// Returns `ValidationError` for zero limits or an empty log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.limits.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
