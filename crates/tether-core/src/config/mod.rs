pub mod estimator_config;
pub mod observability_config;

use serde::{Deserialize, Serialize};

pub use estimator_config::EstimatorConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::TetherResult;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TetherConfig {
    pub estimator: EstimatorConfig,
    pub observability: ObservabilityConfig,
}

impl TetherConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Parse and validate in one step.
    pub fn load(toml_str: &str) -> TetherResult<Self> {
        let config = Self::from_toml(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every subsystem's preconditions.
    pub fn validate(&self) -> TetherResult<()> {
        self.estimator.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}
