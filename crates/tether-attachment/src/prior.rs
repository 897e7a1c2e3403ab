//! Blend the onboarding prior with observed evidence.
//!
//! Prior weight decays linearly with distinct observed days:
//! `max_prior_weight * max(0, 1 - days_observed / window_days)`.
//! It is 0 once the window's worth of days has been observed, and 0
//! whenever there is no usable prior.

use tether_core::models::{unit_clamp, Prior, StyleScores};
use tether_core::normalize::normalize;

#[derive(Debug, Clone)]
pub struct PriorBlender {
    max_prior_weight: f64,
}

impl PriorBlender {
    pub fn new(max_prior_weight: f64) -> Self {
        Self {
            max_prior_weight: unit_clamp(max_prior_weight),
        }
    }

    /// Effective prior weight in [0, 1]. Non-increasing in `days_observed`.
    pub fn prior_weight(&self, prior: Option<&Prior>, days_observed: u32, window_days: u32) -> f64 {
        let Some(prior) = prior else {
            return 0.0;
        };
        if window_days == 0 || normalize(&prior.scores).is_zero() {
            return 0.0;
        }
        let progress = f64::from(days_observed.min(window_days)) / f64::from(window_days);
        unit_clamp(self.max_prior_weight * (1.0 - progress))
    }

    /// Blend normalized evidence with the prior and renormalize.
    /// Returns the blended distribution and the weight used.
    pub fn blend(
        &self,
        evidence: &StyleScores,
        prior: Option<&Prior>,
        days_observed: u32,
        window_days: u32,
    ) -> (StyleScores, f64) {
        let weight = self.prior_weight(prior, days_observed, window_days);
        let blended = match prior {
            Some(prior) if weight > 0.0 => {
                normalize(&normalize(evidence).lerp(&normalize(&prior.scores), weight))
            }
            _ => normalize(evidence),
        };
        (blended, weight)
    }
}

impl Default for PriorBlender {
    fn default() -> Self {
        Self::new(1.0)
    }
}
