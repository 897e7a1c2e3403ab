//! Observation builders and canned user scenarios shared by tether tests
//! and benches.

use tether_core::models::{
    AttachmentStyle, CategoryTag, CommunicationPattern, InteractionEvent, InteractionKind,
    Observation, Prior, RawObservation, RelationshipContext, StyleScores, ToneEvent, UiTone,
};
use tether_core::SECONDS_PER_DAY;

/// 2024-01-01T00:00:00Z, a day boundary.
pub const EPOCH_DAY0: i64 = 1_704_067_200;

/// Timestamp `hours` into day `day` after [`EPOCH_DAY0`].
pub fn ts(day: i64, hours: i64) -> i64 {
    EPOCH_DAY0 + day * SECONDS_PER_DAY + hours * 3_600
}

pub fn tone(timestamp: i64, ui_tone: UiTone, confidence: f64, tags: &[CategoryTag]) -> Observation {
    Observation::Tone(ToneEvent::new(
        timestamp,
        ui_tone,
        confidence,
        tags.iter().copied(),
    ))
}

pub fn interaction(
    timestamp: i64,
    accepted: bool,
    kind: InteractionKind,
    pattern: CommunicationPattern,
    context: RelationshipContext,
) -> Observation {
    Observation::Interaction(InteractionEvent {
        timestamp,
        accepted,
        kind,
        pattern,
        context,
    })
}

/// Accepted suggestion in a calm context.
pub fn accepted(timestamp: i64) -> Observation {
    interaction(
        timestamp,
        true,
        InteractionKind::Other,
        CommunicationPattern::Other,
        RelationshipContext::Other,
    )
}

pub fn raw_tone(timestamp: i64, ui_tone: &str, confidence: f64, tags: &[&str]) -> RawObservation {
    RawObservation::Tone {
        timestamp,
        ui_tone: ui_tone.to_string(),
        confidence,
        categories: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn raw_interaction(
    timestamp: i64,
    accepted: bool,
    interaction_type: &str,
    communication_pattern: &str,
    relationship_context: &str,
) -> RawObservation {
    RawObservation::Interaction {
        timestamp,
        accepted,
        interaction_type: interaction_type.to_string(),
        communication_pattern: communication_pattern.to_string(),
        relationship_context: relationship_context.to_string(),
    }
}

/// `per_day` anxious-leaning tone events, a minute apart from 09:00, on each
/// of `days` consecutive days.
pub fn anxious_week(days: i64, per_day: i64) -> Vec<Observation> {
    (0..days)
        .flat_map(|d| {
            (0..per_day).map(move |i| {
                tone(
                    ts(d, 9) + i * 60,
                    UiTone::Alert,
                    0.9,
                    &[CategoryTag::Reassurance],
                )
            })
        })
        .collect()
}

/// Same scenario in storage form.
pub fn raw_anxious_week(days: i64, per_day: i64) -> Vec<RawObservation> {
    (0..days)
        .flat_map(|d| {
            (0..per_day).map(move |i| {
                raw_tone(ts(d, 9) + i * 60, "alert", 0.9, &["reassurance_seeking"])
            })
        })
        .collect()
}

/// A prior putting all mass on `style`.
pub fn prior_for(style: AttachmentStyle, created_at: i64) -> Prior {
    Prior::new(
        StyleScores::from_pairs([(style, 1.0)]),
        "onboarding-v1",
        created_at,
    )
}
