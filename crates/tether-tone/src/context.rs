//! Conversation context hints.

use serde::{Deserialize, Serialize};

use tether_core::models::{BucketScores, UiBucket};

/// What the conversation is about, as tagged by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextHint {
    #[default]
    General,
    Conflict,
    Repair,
    Boundary,
    Planning,
    CoParenting,
    WorkSchool,
    Safety,
    Misunderstanding,
}

impl ContextHint {
    /// Parse a context tag. Unknown tags read as `General`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "conflict" => Self::Conflict,
            "repair" => Self::Repair,
            "boundary" => Self::Boundary,
            "planning" => Self::Planning,
            "co_parenting" | "coparenting" | "co-parenting" => Self::CoParenting,
            "work/school" | "work_school" | "work" | "school" => Self::WorkSchool,
            "safety" => Self::Safety,
            "misunderstanding" => Self::Misunderstanding,
            _ => Self::General,
        }
    }

    /// Additive shift applied to the bucket distribution before renormalizing.
    pub fn shift(self) -> BucketScores {
        let pairs: &[(UiBucket, f64)] = match self {
            Self::General => &[],
            Self::Conflict => &[(UiBucket::Caution, 0.05), (UiBucket::Alert, 0.10)],
            Self::Safety => &[(UiBucket::Alert, 0.15)],
            Self::Boundary | Self::Misunderstanding | Self::CoParenting => {
                &[(UiBucket::Caution, 0.05)]
            }
            Self::Repair => &[(UiBucket::Clear, 0.10)],
            Self::Planning | Self::WorkSchool => &[(UiBucket::Clear, 0.05)],
        };
        BucketScores::from_pairs(pairs.iter().copied())
    }
}
