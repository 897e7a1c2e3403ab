//! Raw per-style scoring from observations.
//!
//! Weights are fixed constants. Each observation yields a list of
//! (style, weight) contributions; contributions are summed per style in
//! sorted order so the result is bit-identical for any permutation of the
//! input.

use std::collections::BTreeMap;

use tether_core::models::{
    unit_clamp, AttachmentStyle, CategoryTag, CommunicationPattern, InteractionEvent,
    InteractionKind, Observation, RelationshipContext, StyleScores, ToneEvent, UiTone,
};

/// Category tag → style, scaled by classifier confidence.
pub const CATEGORY_WEIGHT: f64 = 0.6;
/// `clear` UI tone → secure, scaled by confidence.
pub const CLEAR_TONE_WEIGHT: f64 = 0.30;
/// `alert` UI tone → anxious, scaled by confidence.
pub const ALERT_TONE_WEIGHT: f64 = 0.20;
/// Accepted suggestion → secure, flat.
pub const ACCEPTED_WEIGHT: f64 = 0.40;
/// Pursuing pattern or strained context → anxious, flat.
pub const PURSUIT_WEIGHT: f64 = 0.20;
/// Withdrawing pattern or silence → avoidant, flat.
pub const WITHDRAWAL_WEIGHT: f64 = 0.25;

/// Observations split by kind.
#[derive(Debug, Default)]
pub struct ObservationSplit<'a> {
    pub tones: Vec<&'a ToneEvent>,
    pub interactions: Vec<&'a InteractionEvent>,
}

impl ObservationSplit<'_> {
    pub fn sample_count(&self) -> usize {
        self.tones.len() + self.interactions.len()
    }
}

pub fn split<'a>(observations: impl IntoIterator<Item = &'a Observation>) -> ObservationSplit<'a> {
    let mut split = ObservationSplit::default();
    for observation in observations {
        match observation {
            Observation::Tone(e) => split.tones.push(e),
            Observation::Interaction(e) => split.interactions.push(e),
        }
    }
    split
}

/// Style a category tag points at. `Unrecognized` points nowhere.
pub fn category_style(tag: CategoryTag) -> Option<AttachmentStyle> {
    match tag {
        CategoryTag::Reassurance => Some(AttachmentStyle::Anxious),
        CategoryTag::Distancing => Some(AttachmentStyle::Avoidant),
        CategoryTag::MixedSignals => Some(AttachmentStyle::Disorganized),
        CategoryTag::Unrecognized => None,
    }
}

pub fn tone_contributions(event: &ToneEvent) -> Vec<(AttachmentStyle, f64)> {
    // Fields are public and deserializable; never trust the stored value.
    let c = unit_clamp(event.confidence);
    let mut out: Vec<(AttachmentStyle, f64)> = event
        .categories
        .iter()
        .filter_map(|tag| category_style(*tag))
        .map(|style| (style, CATEGORY_WEIGHT * c))
        .collect();

    match event.ui_tone {
        UiTone::Clear => out.push((AttachmentStyle::Secure, CLEAR_TONE_WEIGHT * c)),
        UiTone::Alert => out.push((AttachmentStyle::Anxious, ALERT_TONE_WEIGHT * c)),
        UiTone::Caution | UiTone::Neutral => {}
    }
    out
}

pub fn interaction_contributions(event: &InteractionEvent) -> Vec<(AttachmentStyle, f64)> {
    let mut out = Vec::with_capacity(3);
    if event.accepted {
        out.push((AttachmentStyle::Secure, ACCEPTED_WEIGHT));
    }
    if event.pattern == CommunicationPattern::Pursuing
        || event.context == RelationshipContext::Strained
    {
        out.push((AttachmentStyle::Anxious, PURSUIT_WEIGHT));
    }
    if event.pattern == CommunicationPattern::Withdrawing || event.kind == InteractionKind::Silence
    {
        out.push((AttachmentStyle::Avoidant, WITHDRAWAL_WEIGHT));
    }
    out
}

/// Unnormalized scores for a split. Empty input gives the zero vector.
pub fn accumulate(split: &ObservationSplit<'_>) -> StyleScores {
    let mut terms: BTreeMap<AttachmentStyle, Vec<f64>> = BTreeMap::new();
    let contributions = split
        .tones
        .iter()
        .flat_map(|e| tone_contributions(e))
        .chain(split.interactions.iter().flat_map(|e| interaction_contributions(e)));
    for (style, weight) in contributions {
        terms.entry(style).or_default().push(weight);
    }

    let mut scores = StyleScores::zeros();
    for (style, mut weights) in terms {
        weights.sort_by(f64::total_cmp);
        scores.set(style, weights.iter().sum());
    }
    scores
}

/// Convenience: split and accumulate.
pub fn accumulate_all(observations: &[Observation]) -> StyleScores {
    accumulate(&split(observations))
}
