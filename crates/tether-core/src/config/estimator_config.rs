//! Attachment estimator configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Thresholds and window settings for the attachment estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Length of the observation window in days. Must be > 0.
    pub window_duration_days: u32,
    /// Minimum rollup confidence before a style can be confirmed.
    pub min_confirm_confidence: f64,
    /// Minimum observation count before a style can be confirmed.
    pub min_confirm_samples: u32,
    /// Ceiling on the onboarding prior's weight at day zero.
    pub max_prior_weight: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            window_duration_days: 7,
            min_confirm_confidence: 0.66,
            min_confirm_samples: 12,
            max_prior_weight: 1.0,
        }
    }
}

impl EstimatorConfig {
    /// Reject configurations that would make the estimator ill-defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_duration_days == 0 {
            return Err(ConfigError::ZeroWindow(self.window_duration_days));
        }
        check_unit("min_confirm_confidence", self.min_confirm_confidence)?;
        check_unit("max_prior_weight", self.max_prior_weight)?;
        Ok(())
    }

    /// Window length in seconds.
    pub fn window_seconds(&self) -> i64 {
        i64::from(self.window_duration_days) * crate::SECONDS_PER_DAY
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfUnitRange { field, value });
    }
    Ok(())
}
