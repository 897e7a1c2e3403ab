//! DashMap-backed store. Every write is last-writer-wins per user document.

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use tether_core::errors::{StoreError, TetherResult};
use tether_core::models::{ConfirmedStyle, Observation, Prior, RawObservation};
use tether_core::traits::{ILearnerStateStore, IObservationStore};

use crate::document::{SyncEnvelope, UserDocument};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<String, UserDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observation to the user's log.
    pub fn record(&self, user_id: &str, observation: RawObservation) {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .observations
            .push(observation);
    }

    pub fn record_all(
        &self,
        user_id: &str,
        observations: impl IntoIterator<Item = RawObservation>,
    ) {
        let mut doc = self.users.entry(user_id.to_string()).or_default();
        doc.observations.extend(observations);
    }

    /// Store the onboarding prior. Priors are immutable: returns false and
    /// leaves the existing one in place if the user already has a prior.
    pub fn set_prior(&self, user_id: &str, prior: Prior) -> bool {
        let mut doc = self.users.entry(user_id.to_string()).or_default();
        if doc.prior.is_some() {
            return false;
        }
        doc.prior = Some(prior);
        true
    }

    pub fn observation_count(&self, user_id: &str) -> usize {
        self.users
            .get(user_id)
            .map(|doc| doc.observations.len())
            .unwrap_or(0)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Serialize a user's document for sync.
    pub fn export_json(&self, user_id: &str) -> TetherResult<String> {
        let document = self
            .users
            .get(user_id)
            .map(|doc| doc.value().clone())
            .ok_or_else(|| StoreError::UserNotFound {
                user_id: user_id.to_string(),
            })?;
        let envelope = SyncEnvelope {
            user_id: user_id.to_string(),
            exported_at: Utc::now(),
            document,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// Merge an exported document into the envelope's user. Returns that user id.
    ///
    /// Observations are append-only: incoming ones not already present are
    /// appended and local ones are never dropped. The prior and the window
    /// start are set-once, so existing values win. An incoming confirmation
    /// replaces the local one (last writer wins).
    pub fn import_json(&self, json: &str) -> TetherResult<String> {
        let envelope: SyncEnvelope =
            serde_json::from_str(json).map_err(|e| StoreError::DocumentDecode {
                user_id: "<unknown>".to_string(),
                reason: e.to_string(),
            })?;
        let SyncEnvelope {
            user_id,
            exported_at,
            document: incoming,
        } = envelope;

        let mut doc = self.users.entry(user_id.clone()).or_default();
        let mut appended = 0usize;
        for observation in incoming.observations {
            if !doc.observations.contains(&observation) {
                doc.observations.push(observation);
                appended += 1;
            }
        }
        if doc.prior.is_none() {
            doc.prior = incoming.prior;
        }
        if doc.window_start.is_none() {
            doc.window_start = incoming.window_start;
        }
        if incoming.confirmed.is_some() {
            doc.confirmed = incoming.confirmed;
        }

        debug!(
            user_id = %user_id,
            appended,
            total = doc.observations.len(),
            exported_at = %exported_at,
            "merged user document"
        );
        Ok(user_id)
    }
}

impl IObservationStore for MemoryStore {
    fn list_observations(&self, user_id: &str, since: i64) -> TetherResult<Vec<Observation>> {
        Ok(self
            .users
            .get(user_id)
            .map(|doc| {
                doc.observations
                    .iter()
                    .filter(|raw| raw.timestamp() >= since)
                    .map(RawObservation::normalize)
                    .collect()
            })
            .unwrap_or_default())
    }

    fn get_prior(&self, user_id: &str) -> TetherResult<Option<Prior>> {
        Ok(self.users.get(user_id).and_then(|doc| doc.prior.clone()))
    }
}

impl ILearnerStateStore for MemoryStore {
    fn window_start(&self, user_id: &str) -> TetherResult<Option<i64>> {
        Ok(self.users.get(user_id).and_then(|doc| doc.window_start))
    }

    fn start_window(&self, user_id: &str, at: i64) -> TetherResult<i64> {
        let mut doc = self.users.entry(user_id.to_string()).or_default();
        Ok(*doc.window_start.get_or_insert(at))
    }

    fn confirmed_style(&self, user_id: &str) -> TetherResult<Option<ConfirmedStyle>> {
        Ok(self.users.get(user_id).and_then(|doc| doc.confirmed.clone()))
    }

    fn put_confirmed_style(&self, user_id: &str, confirmed: &ConfirmedStyle) -> TetherResult<()> {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .confirmed = Some(confirmed.clone());
        Ok(())
    }

    fn reset(&self, user_id: &str) -> TetherResult<()> {
        if let Some(mut doc) = self.users.get_mut(user_id) {
            doc.window_start = None;
            doc.confirmed = None;
        }
        Ok(())
    }
}
