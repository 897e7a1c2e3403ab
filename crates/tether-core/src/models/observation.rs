//! Behavioral observations: the raw storage shape and the normalized shape
//! the estimator consumes.
//!
//! Free-text tags are matched once, here, against a fixed vocabulary by
//! case-insensitive containment. Anything outside the vocabulary lands in an
//! `Unrecognized`/`Other` variant that scores zero.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::tone::UiTone;
use super::unit_clamp;
use crate::SECONDS_PER_DAY;

/// Recognized tone-event category tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTag {
    /// Reassurance seeking, connection bids.
    Reassurance,
    /// Withdrawal, distancing.
    Distancing,
    MixedSignals,
    Unrecognized,
}

/// Stems checked in order; the first hit wins.
const CATEGORY_VOCABULARY: &[(&str, CategoryTag)] = &[
    ("disconnect", CategoryTag::Distancing),
    ("reassurance", CategoryTag::Reassurance),
    ("connection", CategoryTag::Reassurance),
    ("withdraw", CategoryTag::Distancing),
    ("distanc", CategoryTag::Distancing),
    ("mixed_signal", CategoryTag::MixedSignals),
];

impl CategoryTag {
    pub fn from_tag(tag: &str) -> Self {
        let folded = fold(tag);
        CATEGORY_VOCABULARY
            .iter()
            .find(|(stem, _)| folded.contains(stem))
            .map(|(_, category)| *category)
            .unwrap_or(Self::Unrecognized)
    }
}

/// How the user pursued or avoided contact in an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationPattern {
    Pursuing,
    Withdrawing,
    Other,
}

impl CommunicationPattern {
    pub fn from_tag(tag: &str) -> Self {
        let folded = fold(tag);
        if folded.contains("pursu") {
            Self::Pursuing
        } else if folded.contains("withdraw") {
            Self::Withdrawing
        } else {
            Self::Other
        }
    }
}

/// State of the relationship the interaction happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipContext {
    Strained,
    Other,
}

impl RelationshipContext {
    pub fn from_tag(tag: &str) -> Self {
        if fold(tag).contains("strain") {
            Self::Strained
        } else {
            Self::Other
        }
    }
}

/// Kind of interaction recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Silence, silent treatment, unanswered messages.
    Silence,
    Other,
}

impl InteractionKind {
    pub fn from_tag(tag: &str) -> Self {
        if fold(tag).contains("silen") {
            Self::Silence
        } else {
            Self::Other
        }
    }
}

/// Lowercase and unify separators so "Mixed-Signals" and "mixed signals"
/// match the same stem.
fn fold(tag: &str) -> String {
    tag.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// A tone classification recorded for one analyzed message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneEvent {
    /// Seconds since epoch.
    pub timestamp: i64,
    pub ui_tone: UiTone,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
    pub categories: BTreeSet<CategoryTag>,
}

impl ToneEvent {
    pub fn new(
        timestamp: i64,
        ui_tone: UiTone,
        confidence: f64,
        categories: impl IntoIterator<Item = CategoryTag>,
    ) -> Self {
        Self {
            timestamp,
            ui_tone,
            confidence: unit_clamp(confidence),
            categories: categories.into_iter().collect(),
        }
    }
}

/// A user's response to a suggestion, plus the situation it happened in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Seconds since epoch.
    pub timestamp: i64,
    pub accepted: bool,
    pub kind: InteractionKind,
    pub pattern: CommunicationPattern,
    pub context: RelationshipContext,
}

/// One immutable observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "observation", rename_all = "snake_case")]
pub enum Observation {
    Tone(ToneEvent),
    Interaction(InteractionEvent),
}

impl Observation {
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Tone(e) => e.timestamp,
            Self::Interaction(e) => e.timestamp,
        }
    }

    /// Calendar day-bucket: `floor(timestamp / 86400)`.
    pub fn day_bucket(&self) -> i64 {
        self.timestamp().div_euclid(SECONDS_PER_DAY)
    }
}

/// Observation as written by the keyboard extension or the backend, with
/// free-text tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawObservation {
    Tone {
        timestamp: i64,
        ui_tone: String,
        confidence: f64,
        #[serde(default)]
        categories: Vec<String>,
    },
    Interaction {
        timestamp: i64,
        accepted: bool,
        #[serde(default)]
        interaction_type: String,
        #[serde(default)]
        communication_pattern: String,
        #[serde(default)]
        relationship_context: String,
    },
}

impl RawObservation {
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Tone { timestamp, .. } | Self::Interaction { timestamp, .. } => *timestamp,
        }
    }

    /// Map free-text fields onto the closed vocabularies.
    pub fn normalize(&self) -> Observation {
        match self {
            Self::Tone {
                timestamp,
                ui_tone,
                confidence,
                categories,
            } => Observation::Tone(ToneEvent::new(
                *timestamp,
                UiTone::from_label(ui_tone),
                *confidence,
                categories.iter().map(|c| CategoryTag::from_tag(c)),
            )),
            Self::Interaction {
                timestamp,
                accepted,
                interaction_type,
                communication_pattern,
                relationship_context,
            } => Observation::Interaction(InteractionEvent {
                timestamp: *timestamp,
                accepted: *accepted,
                kind: InteractionKind::from_tag(interaction_type),
                pattern: CommunicationPattern::from_tag(communication_pattern),
                context: RelationshipContext::from_tag(relationship_context),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_matching_is_case_insensitive_containment() {
        assert_eq!(CategoryTag::from_tag("Reassurance_Seeking"), CategoryTag::Reassurance);
        assert_eq!(CategoryTag::from_tag("connection_bid"), CategoryTag::Reassurance);
        assert_eq!(CategoryTag::from_tag("emotional withdrawal"), CategoryTag::Distancing);
        assert_eq!(CategoryTag::from_tag("DISTANCING"), CategoryTag::Distancing);
        assert_eq!(CategoryTag::from_tag("Disconnection"), CategoryTag::Distancing);
        assert_eq!(CategoryTag::from_tag("emotional_disconnect"), CategoryTag::Distancing);
        assert_eq!(CategoryTag::from_tag("Mixed-Signals"), CategoryTag::MixedSignals);
        assert_eq!(CategoryTag::from_tag("gratitude"), CategoryTag::Unrecognized);
        assert_eq!(CategoryTag::from_tag(""), CategoryTag::Unrecognized);
    }

    #[test]
    fn interaction_tags_fold_to_enums() {
        assert_eq!(CommunicationPattern::from_tag("Pursuing"), CommunicationPattern::Pursuing);
        assert_eq!(CommunicationPattern::from_tag("pursuit"), CommunicationPattern::Pursuing);
        assert_eq!(
            CommunicationPattern::from_tag("withdrawing"),
            CommunicationPattern::Withdrawing
        );
        assert_eq!(CommunicationPattern::from_tag("direct"), CommunicationPattern::Other);
        assert_eq!(RelationshipContext::from_tag("strained"), RelationshipContext::Strained);
        assert_eq!(RelationshipContext::from_tag("stable"), RelationshipContext::Other);
        assert_eq!(InteractionKind::from_tag("silent_treatment"), InteractionKind::Silence);
        assert_eq!(InteractionKind::from_tag("suggestion_tap"), InteractionKind::Other);
    }

    #[test]
    fn raw_tone_normalizes_and_dedups_categories() {
        let raw = RawObservation::Tone {
            timestamp: 100,
            ui_tone: "ALERT".to_string(),
            confidence: 1.7,
            categories: vec![
                "reassurance_seeking".to_string(),
                "connection".to_string(),
                "sarcasm".to_string(),
            ],
        };
        let Observation::Tone(event) = raw.normalize() else {
            panic!("expected tone event");
        };
        assert_eq!(event.ui_tone, UiTone::Alert);
        assert_eq!(event.confidence, 1.0);
        assert_eq!(event.categories.len(), 2);
        assert!(event.categories.contains(&CategoryTag::Reassurance));
        assert!(event.categories.contains(&CategoryTag::Unrecognized));
    }

    #[test]
    fn nan_confidence_becomes_zero() {
        let event = ToneEvent::new(0, UiTone::Clear, f64::NAN, []);
        assert_eq!(event.confidence, 0.0);
    }

    #[test]
    fn day_bucket_floors_negative_timestamps() {
        let obs = RawObservation::Interaction {
            timestamp: -1,
            accepted: true,
            interaction_type: String::new(),
            communication_pattern: String::new(),
            relationship_context: String::new(),
        }
        .normalize();
        assert_eq!(obs.day_bucket(), -1);
    }

    #[test]
    fn raw_observation_deserializes_with_missing_tags() {
        let json = r#"{"kind":"interaction","timestamp":5,"accepted":false}"#;
        let raw: RawObservation = serde_json::from_str(json).unwrap();
        assert_eq!(raw.timestamp(), 5);
        let Observation::Interaction(event) = raw.normalize() else {
            panic!("expected interaction");
        };
        assert_eq!(event.kind, InteractionKind::Other);
    }

    #[test]
    fn interaction_kind_field_survives_observation_tag() {
        let obs = Observation::Interaction(InteractionEvent {
            timestamp: 7,
            accepted: false,
            kind: InteractionKind::Silence,
            pattern: CommunicationPattern::Withdrawing,
            context: RelationshipContext::Other,
        });
        let value = serde_json::to_value(&obs).unwrap();
        assert_eq!(value["observation"], "interaction");
        assert_eq!(value["kind"], "silence");
        let back: Observation = serde_json::from_value(value).unwrap();
        assert_eq!(back, obs);
    }
}
