mod observation;
mod prior;
mod rollup;
mod score_vector;
mod style;
mod tone;

pub use observation::{
    CategoryTag, CommunicationPattern, InteractionEvent, InteractionKind, Observation,
    RawObservation, RelationshipContext, ToneEvent,
};
pub use prior::Prior;
pub use rollup::{ConfirmationSource, ConfirmedStyle, Rollup};
pub use score_vector::{ScoreKey, ScoreVector};
pub use style::{AttachmentStyle, StyleScores};
pub use tone::{BucketScores, UiBucket, UiTone};

/// Clamp a caller-supplied probability into [0, 1]. Non-finite input becomes 0.
pub fn unit_clamp(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
