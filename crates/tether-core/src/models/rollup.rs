//! Estimator output and the durable confirmation record.

use serde::{Deserialize, Serialize};

use super::style::{AttachmentStyle, StyleScores};

/// Snapshot produced by one estimation pass. Always replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    /// Argmax of `scores`, ties broken secure > anxious > avoidant > disorganized.
    pub primary: AttachmentStyle,
    /// Normalized, prior-blended distribution.
    pub scores: StyleScores,
    /// In [0, 1].
    pub confidence: f64,
    pub sample_count: u32,
    pub window_complete: bool,
    /// Distinct day-buckets seen, clamped to the window length.
    pub days_observed: u32,
    /// Effective weight the onboarding prior received in the blend.
    pub prior_weight: f64,
}

impl Rollup {
    /// The zero-evidence result.
    pub fn empty() -> Self {
        Self {
            primary: AttachmentStyle::Secure,
            scores: StyleScores::zeros(),
            confidence: 0.0,
            sample_count: 0,
            window_complete: false,
            days_observed: 0,
            prior_weight: 0.0,
        }
    }
}

/// Who produced a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ConfirmationSource {
    /// Gated promotion of an observed-behavior rollup.
    Learner,
}

/// A style treated as authoritative downstream until re-confirmed or reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedStyle {
    pub style: AttachmentStyle,
    pub source: ConfirmationSource,
    pub confidence: f64,
    pub sample_count: u32,
    pub days_observed: u32,
}
