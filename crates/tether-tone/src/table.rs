//! Fixed tone-label lookup table.

use tether_core::models::{BucketScores, UiBucket};

/// Coarse family a classifier label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneFamily {
    Supportive,
    Neutral,
    Tense,
    Hostile,
}

const LABELS: &[(&str, ToneFamily)] = &[
    ("clear", ToneFamily::Supportive),
    ("supportive", ToneFamily::Supportive),
    ("positive", ToneFamily::Supportive),
    ("warm", ToneFamily::Supportive),
    ("calm", ToneFamily::Supportive),
    ("appreciative", ToneFamily::Supportive),
    ("gentle", ToneFamily::Supportive),
    ("neutral", ToneFamily::Neutral),
    ("informational", ToneFamily::Neutral),
    ("factual", ToneFamily::Neutral),
    ("caution", ToneFamily::Tense),
    ("frustrated", ToneFamily::Tense),
    ("anxious", ToneFamily::Tense),
    ("sad", ToneFamily::Tense),
    ("confused", ToneFamily::Tense),
    ("defensive", ToneFamily::Tense),
    ("sarcastic", ToneFamily::Tense),
    ("passive_aggressive", ToneFamily::Tense),
    ("alert", ToneFamily::Hostile),
    ("angry", ToneFamily::Hostile),
    ("hostile", ToneFamily::Hostile),
    ("aggressive", ToneFamily::Hostile),
    ("contemptuous", ToneFamily::Hostile),
    ("threatening", ToneFamily::Hostile),
];

impl ToneFamily {
    /// Look up a classifier label (case-insensitive, `-`/space folded to `_`).
    pub fn from_label(label: &str) -> Option<Self> {
        let folded: String = label
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
            .collect();
        LABELS
            .iter()
            .find(|(name, _)| *name == folded)
            .map(|(_, family)| *family)
    }

    /// Starting distribution for this family.
    pub fn buckets(self) -> BucketScores {
        let (clear, caution, alert) = match self {
            Self::Supportive => (0.80, 0.15, 0.05),
            Self::Neutral => (0.60, 0.30, 0.10),
            Self::Tense => (0.15, 0.65, 0.20),
            Self::Hostile => (0.05, 0.20, 0.75),
        };
        BucketScores::from_pairs([
            (UiBucket::Clear, clear),
            (UiBucket::Caution, caution),
            (UiBucket::Alert, alert),
        ])
    }
}
