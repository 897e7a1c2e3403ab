//! ToneBucketMapper: tone classification → bucket distribution → display tone.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use tether_core::models::{unit_clamp, BucketScores, UiTone};
use tether_core::normalize::normalize;

use crate::context::ContextHint;
use crate::picker::pick_ui_tone;
use crate::table::ToneFamily;

/// Upstream classifier output for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneClassification {
    pub label: String,
    #[serde(default = "full_confidence")]
    pub confidence: f64,
}

fn full_confidence() -> f64 {
    1.0
}

impl ToneClassification {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Final distribution plus the tone to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneBucketResult {
    pub buckets: BucketScores,
    pub ui_tone: UiTone,
}

/// Stateless mapper. Safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneBucketMapper;

impl ToneBucketMapper {
    pub fn new() -> Self {
        Self
    }

    /// Base distribution for a tone in a context.
    ///
    /// Unknown labels map to the uniform distribution regardless of context.
    /// Classifier confidence shrinks the table row toward uniform before the
    /// context shift is applied.
    pub fn map_tone_to_buckets(
        &self,
        tone: &ToneClassification,
        context: ContextHint,
    ) -> BucketScores {
        let Some(family) = ToneFamily::from_label(&tone.label) else {
            trace!(label = %tone.label, "unknown tone label; using uniform buckets");
            return BucketScores::uniform();
        };

        let confidence = unit_clamp(tone.confidence);
        let shrunk = BucketScores::uniform().lerp(&family.buckets(), confidence);

        let mut shifted = shrunk;
        for (bucket, delta) in context.shift().iter() {
            shifted.add(bucket, delta);
        }
        normalize(&shifted)
    }

    /// Add non-negative severity deltas and renormalize. Negative or
    /// non-finite deltas count as zero.
    pub fn apply_severity_nudges(
        &self,
        buckets: &BucketScores,
        severity: &BucketScores,
    ) -> BucketScores {
        let mut nudged = buckets.clone();
        for (bucket, delta) in severity.iter() {
            let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
            nudged.add(bucket, delta);
        }
        normalize(&nudged)
    }

    pub fn pick_ui_tone(&self, buckets: &BucketScores) -> UiTone {
        pick_ui_tone(buckets)
    }

    /// Full pipeline for one message.
    pub fn analyze(
        &self,
        tone: &ToneClassification,
        context: ContextHint,
        severity: Option<&BucketScores>,
    ) -> ToneBucketResult {
        let base = self.map_tone_to_buckets(tone, context);
        let buckets = match severity {
            Some(severity) => self.apply_severity_nudges(&base, severity),
            None => base,
        };
        let ui_tone = pick_ui_tone(&buckets);
        debug!(
            label = %tone.label,
            context = ?context,
            %buckets,
            %ui_tone,
            "tone analyzed"
        );
        ToneBucketResult { buckets, ui_tone }
    }
}
