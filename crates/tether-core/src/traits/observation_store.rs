use std::sync::Arc;

use crate::errors::TetherResult;
use crate::models::{Observation, Prior};

/// Read side of the observation log.
pub trait IObservationStore: Send + Sync {
    /// Normalized observations for `user_id` with `timestamp >= since`.
    fn list_observations(&self, user_id: &str, since: i64) -> TetherResult<Vec<Observation>>;

    /// The onboarding prior, if the user has one.
    fn get_prior(&self, user_id: &str) -> TetherResult<Option<Prior>>;
}

impl<T: IObservationStore + ?Sized> IObservationStore for Arc<T> {
    fn list_observations(&self, user_id: &str, since: i64) -> TetherResult<Vec<Observation>> {
        (**self).list_observations(user_id, since)
    }
    fn get_prior(&self, user_id: &str) -> TetherResult<Option<Prior>> {
        (**self).get_prior(user_id)
    }
}
