//! Scalar confidence from the top-two margin and sample count.
//!
//! `clamp(margin * 0.9, 0, 1) * ln(n + 1)`, clamped to [0, 1]. Near zero when
//! the leading styles are close or when there is almost no evidence.

use tether_core::models::{unit_clamp, StyleScores};

/// Scale applied to the top-two margin.
pub const MARGIN_SCALE: f64 = 0.9;

/// Gap between the two highest scores.
pub fn top_two_margin(scores: &StyleScores) -> f64 {
    let sorted = scores.sorted_desc();
    match sorted.as_slice() {
        [top, second, ..] => top - second,
        [top] => *top,
        [] => 0.0,
    }
}

pub fn compute_confidence(scores: &StyleScores, sample_count: u32) -> f64 {
    if sample_count == 0 {
        return 0.0;
    }
    let margin_term = (top_two_margin(scores) * MARGIN_SCALE).clamp(0.0, 1.0);
    let sample_term = (f64::from(sample_count) + 1.0).ln();
    unit_clamp(margin_term * sample_term)
}
