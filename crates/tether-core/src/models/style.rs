//! The four attachment styles.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::score_vector::{ScoreKey, ScoreVector};

/// Behavioral-pattern category used to personalize coaching tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Disorganized,
}

impl AttachmentStyle {
    /// Parse a stored style label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "secure" => Some(Self::Secure),
            "anxious" => Some(Self::Anxious),
            "avoidant" => Some(Self::Avoidant),
            "disorganized" => Some(Self::Disorganized),
            _ => None,
        }
    }
}

impl ScoreKey for AttachmentStyle {
    const PRECEDENCE: &'static [Self] = &[
        Self::Secure,
        Self::Anxious,
        Self::Avoidant,
        Self::Disorganized,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Secure => "secure",
            Self::Anxious => "anxious",
            Self::Avoidant => "avoidant",
            Self::Disorganized => "disorganized",
        }
    }
}

impl fmt::Display for AttachmentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-style scores.
pub type StyleScores = ScoreVector<AttachmentStyle>;
