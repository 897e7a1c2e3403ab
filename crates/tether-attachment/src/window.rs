//! Observation window tracking.
//!
//! The start is set exactly once, from the first observation or an explicit
//! start-learning call, and is never moved by the gate afterwards.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use tether_core::models::Observation;
use tether_core::SECONDS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGate {
    start: Option<i64>,
    duration_days: u32,
}

impl WindowGate {
    /// # Panics
    /// If `duration_days` is zero. Validated configs never pass zero.
    pub fn new(duration_days: u32) -> Self {
        Self::with_start(duration_days, None)
    }

    /// Rehydrate a gate from persisted state.
    pub fn with_start(duration_days: u32, start: Option<i64>) -> Self {
        assert!(duration_days > 0, "window duration must be > 0 days");
        Self {
            start,
            duration_days,
        }
    }

    pub fn start(&self) -> Option<i64> {
        self.start
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn duration_seconds(&self) -> i64 {
        i64::from(self.duration_days) * SECONDS_PER_DAY
    }

    /// Start the window at `at` unless already started. Returns the effective start.
    pub fn start_learning(&mut self, at: i64) -> i64 {
        *self.start.get_or_insert(at)
    }

    /// Start the window at the earliest of `observations` unless already started.
    pub fn observe_all(&mut self, observations: &[Observation]) -> Option<i64> {
        if self.start.is_none() {
            if let Some(earliest) = observations.iter().map(Observation::timestamp).min() {
                self.start = Some(earliest);
            }
        }
        self.start
    }

    /// Whether the full window has elapsed at `now`. False before the start is set.
    pub fn is_complete(&self, now: i64) -> bool {
        match self.start {
            Some(start) => now.saturating_sub(start) >= self.duration_seconds(),
            None => false,
        }
    }

    /// Whether `observation` falls inside the current window.
    pub fn contains(&self, observation: &Observation) -> bool {
        self.start.map_or(true, |start| observation.timestamp() >= start)
    }

    /// Distinct day-buckets among in-window observations, clamped to the window length.
    pub fn days_observed(&self, observations: &[Observation]) -> u32 {
        let days: BTreeSet<i64> = observations
            .iter()
            .filter(|o| self.contains(o))
            .map(Observation::day_bucket)
            .collect();
        u32::try_from(days.len())
            .unwrap_or(u32::MAX)
            .min(self.duration_days)
    }
}
