//! UI-facing tone labels and buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::score_vector::{ScoreKey, ScoreVector};

/// The display tone shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiTone {
    Clear,
    Caution,
    Alert,
    Neutral,
}

impl UiTone {
    /// Parse a stored label. Anything unrecognized reads as `Neutral`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "clear" => Self::Clear,
            "caution" => Self::Caution,
            "alert" => Self::Alert,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Caution => "caution",
            Self::Alert => "alert",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for UiTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three coarse severity buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiBucket {
    Clear,
    Caution,
    Alert,
}

impl ScoreKey for UiBucket {
    // Exact ties resolve toward the more severe bucket.
    const PRECEDENCE: &'static [Self] = &[Self::Alert, Self::Caution, Self::Clear];

    fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Caution => "caution",
            Self::Alert => "alert",
        }
    }
}

impl From<UiBucket> for UiTone {
    fn from(bucket: UiBucket) -> Self {
        match bucket {
            UiBucket::Clear => UiTone::Clear,
            UiBucket::Caution => UiTone::Caution,
            UiBucket::Alert => UiTone::Alert,
        }
    }
}

/// Distribution over {clear, caution, alert}.
pub type BucketScores = ScoreVector<UiBucket>;
