//! AttachmentLearner: per-request context wiring the estimator to the
//! store collaborators.
//!
//! Constructed per call with the stores injected; holds no cross-request
//! state. Reads are best-effort: a failed read degrades to an empty window or
//! a missing prior. The confirmation write is last-writer-wins and not
//! transactional with the read, so a stale confirmation is corrected on the
//! next refresh.

use tracing::{info, warn};

use tether_core::config::EstimatorConfig;
use tether_core::errors::{ConfigError, TetherResult};
use tether_core::models::{ConfirmedStyle, Rollup};
use tether_core::traits::{ILearnerStateStore, IObservationStore};

use crate::estimator::AttachmentEstimator;

/// Result of one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct LearnerSnapshot {
    pub rollup: Rollup,
    /// Confirmation produced (and written) by this refresh, if any.
    pub newly_confirmed: Option<ConfirmedStyle>,
    /// The persisted confirmation after this refresh. A confirmation whose
    /// write failed shows up in `newly_confirmed` only.
    pub confirmed: Option<ConfirmedStyle>,
}

pub struct AttachmentLearner<'a, O: ?Sized, S: ?Sized> {
    observations: &'a O,
    state: &'a S,
    estimator: AttachmentEstimator,
}

impl<'a, O, S> AttachmentLearner<'a, O, S>
where
    O: IObservationStore + ?Sized,
    S: ILearnerStateStore + ?Sized,
{
    pub fn new(
        observations: &'a O,
        state: &'a S,
        config: EstimatorConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            observations,
            state,
            estimator: AttachmentEstimator::new(config)?,
        })
    }

    pub fn estimator(&self) -> &AttachmentEstimator {
        &self.estimator
    }

    /// Explicitly open the learning window at `now` if it is not open yet.
    pub fn start_learning(&self, user_id: &str, now: i64) -> TetherResult<i64> {
        let mut window = self.estimator.window(self.state.window_start(user_id)?);
        let start = self.state.start_window(user_id, window.start_learning(now))?;
        info!(user_id, start, "learning window started");
        Ok(start)
    }

    /// Drop the window start and any confirmation.
    pub fn reset(&self, user_id: &str) -> TetherResult<()> {
        self.state.reset(user_id)?;
        info!(user_id, "learner state reset");
        Ok(())
    }

    /// Read the window, estimate, re-evaluate confirmation and persist it.
    pub fn refresh(&self, user_id: &str, now: i64) -> LearnerSnapshot {
        let start = self.state.window_start(user_id).unwrap_or_else(|e| {
            warn!(user_id, error = %e, "window start unavailable; treating window as unstarted");
            None
        });

        let observations = self
            .observations
            .list_observations(user_id, start.unwrap_or(i64::MIN))
            .unwrap_or_else(|e| {
                warn!(user_id, error = %e, "observation window unavailable; using empty window");
                Vec::new()
            });

        let mut window = self.estimator.window(start);
        if start.is_none() {
            if let Some(earliest) = window.observe_all(&observations) {
                match self.state.start_window(user_id, earliest) {
                    // Another caller won the set-once race.
                    Ok(effective) if effective != earliest => {
                        window = self.estimator.window(Some(effective));
                    }
                    Ok(_) => {}
                    Err(e) => warn!(user_id, error = %e, "failed to persist window start"),
                }
            }
        }

        let prior = self.observations.get_prior(user_id).unwrap_or_else(|e| {
            warn!(user_id, error = %e, "prior unavailable; estimating from evidence only");
            None
        });

        let rollup = self
            .estimator
            .estimate(&observations, prior.as_ref(), &window, now);
        let newly_confirmed = self.estimator.maybe_confirm(&rollup);

        let confirmed = match &newly_confirmed {
            Some(confirmation) => match self.state.put_confirmed_style(user_id, confirmation) {
                Ok(()) => {
                    info!(
                        user_id,
                        style = %confirmation.style,
                        confidence = confirmation.confidence,
                        sample_count = confirmation.sample_count,
                        "attachment style confirmed"
                    );
                    Some(confirmation.clone())
                }
                Err(e) => {
                    warn!(user_id, error = %e, "failed to persist confirmation");
                    self.stored_confirmation(user_id)
                }
            },
            None => self.stored_confirmation(user_id),
        };

        LearnerSnapshot {
            rollup,
            newly_confirmed,
            confirmed,
        }
    }

    fn stored_confirmation(&self, user_id: &str) -> Option<ConfirmedStyle> {
        self.state.confirmed_style(user_id).unwrap_or_else(|e| {
            warn!(user_id, error = %e, "confirmed style unavailable");
            None
        })
    }

    /// `refresh` at the current wall-clock time.
    pub fn refresh_now(&self, user_id: &str) -> LearnerSnapshot {
        self.refresh(user_id, chrono::Utc::now().timestamp())
    }
}
