//! Display-tone selection.

use tether_core::models::{BucketScores, UiTone};

/// Spread (max - min) at or below which the buckets are too close to call.
pub const NEUTRAL_BAND: f64 = 0.05;

// Absorbs representation error so that a spread of exactly 0.05 in decimal
// terms still reads as neutral.
const BAND_EPSILON: f64 = 1e-12;

/// Pick the display tone. `Neutral` when all three buckets lie within
/// [`NEUTRAL_BAND`]; otherwise the top bucket, exact ties resolving
/// alert before caution before clear.
pub fn pick_ui_tone(buckets: &BucketScores) -> UiTone {
    let sanitized = buckets.map(|v| if v.is_finite() { v } else { 0.0 });
    let sorted = sanitized.sorted_desc();
    let spread = sorted[0] - sorted[sorted.len() - 1];
    if spread <= NEUTRAL_BAND + BAND_EPSILON {
        return UiTone::Neutral;
    }
    UiTone::from(sanitized.argmax())
}
