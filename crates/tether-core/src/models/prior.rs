//! Onboarding-derived prior belief about a user's attachment style.

use serde::{Deserialize, Serialize};

use super::style::StyleScores;

/// Prior distribution from the onboarding questionnaire. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prior {
    pub scores: StyleScores,
    /// Questionnaire version that produced the scores.
    pub source_version: String,
    /// Seconds since epoch.
    pub created_at: i64,
}

impl Prior {
    pub fn new(scores: StyleScores, source_version: impl Into<String>, created_at: i64) -> Self {
        Self {
            scores,
            source_version: source_version.into(),
            created_at,
        }
    }
}
