//! AttachmentEstimator: orchestrates scoring, normalization, prior blending,
//! confidence and window gating into a Rollup, and gates confirmation.

use tracing::debug;

use tether_core::config::EstimatorConfig;
use tether_core::errors::ConfigError;
use tether_core::models::{ConfirmationSource, ConfirmedStyle, Observation, Prior, Rollup};

use crate::accumulator;
use crate::confidence::compute_confidence;
use crate::prior::PriorBlender;
use crate::window::WindowGate;

/// Pure estimator. Holds only validated configuration; safe to share across threads.
#[derive(Debug, Clone)]
pub struct AttachmentEstimator {
    config: EstimatorConfig,
    blender: PriorBlender,
}

impl AttachmentEstimator {
    pub fn new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let blender = PriorBlender::new(config.max_prior_weight);
        Ok(Self { config, blender })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// A gate sized to this estimator's window.
    pub fn window(&self, start: Option<i64>) -> WindowGate {
        WindowGate::with_start(self.config.window_duration_days, start)
    }

    /// Compute a fresh Rollup over the in-window part of `observations`.
    ///
    /// No side effects; identical inputs give bit-identical output.
    pub fn estimate(
        &self,
        observations: &[Observation],
        prior: Option<&Prior>,
        window: &WindowGate,
        now: i64,
    ) -> Rollup {
        let in_window: Vec<Observation> = observations
            .iter()
            .filter(|o| window.contains(o))
            .cloned()
            .collect();

        let split = accumulator::split(&in_window);
        let raw = accumulator::accumulate(&split);
        let sample_count = u32::try_from(split.sample_count()).unwrap_or(u32::MAX);

        let days_observed = window.days_observed(&in_window);
        let window_complete = window.is_complete(now);

        let (scores, prior_weight) =
            self.blender.blend(&raw, prior, days_observed, window.duration_days());
        let confidence = compute_confidence(&scores, sample_count);
        let primary = scores.argmax();

        debug!(
            tone_events = split.tones.len(),
            interaction_events = split.interactions.len(),
            days_observed,
            window_complete,
            prior_weight,
            confidence,
            primary = %primary,
            scores = %scores,
            "attachment rollup computed"
        );

        Rollup {
            primary,
            scores,
            confidence,
            sample_count,
            window_complete,
            days_observed,
            prior_weight,
        }
    }

    /// Promote a rollup to a confirmed style when the window is complete and
    /// both the confidence and sample thresholds are met. Pure; persisting the
    /// result is the caller's job.
    pub fn maybe_confirm(&self, rollup: &Rollup) -> Option<ConfirmedStyle> {
        let confident = rollup.confidence >= self.config.min_confirm_confidence;
        let enough_samples = rollup.sample_count >= self.config.min_confirm_samples;

        if !(rollup.window_complete && confident && enough_samples) {
            debug!(
                window_complete = rollup.window_complete,
                confident,
                enough_samples,
                "confirmation gate not met"
            );
            return None;
        }

        Some(ConfirmedStyle {
            style: rollup.primary,
            source: ConfirmationSource::Learner,
            confidence: rollup.confidence,
            sample_count: rollup.sample_count,
            days_observed: rollup.days_observed,
        })
    }
}

impl Default for AttachmentEstimator {
    fn default() -> Self {
        let config = EstimatorConfig::default();
        Self {
            blender: PriorBlender::new(config.max_prior_weight),
            config,
        }
    }
}
