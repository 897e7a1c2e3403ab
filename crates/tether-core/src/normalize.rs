//! Score normalization.
//!
//! Clamp → divide by total → clamp to [0, 1] → divide by total again.
//! The second pass restores the sum-to-one invariant that clamping can
//! perturb. A zero-total input yields the all-zero vector; callers read its
//! argmax through `ScoreKey::PRECEDENCE`, so the attachment fallback is
//! `secure` with weight 0.

use crate::models::{ScoreKey, ScoreVector};

/// Tolerance for the sum-to-one invariant.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Normalize `scores` into a distribution. Never fails and never returns NaN
/// or negative components.
pub fn normalize<K: ScoreKey>(scores: &ScoreVector<K>) -> ScoreVector<K> {
    let clamped = scores.map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 });
    let first = divide_by_total(&rescale_if_overflowing(clamped));
    let reclamped = first.map(|v| v.clamp(0.0, 1.0));
    divide_by_total(&reclamped)
}

/// True when `scores` is a distribution within [`SUM_TOLERANCE`].
pub fn is_distribution<K: ScoreKey>(scores: &ScoreVector<K>) -> bool {
    scores.iter().all(|(_, v)| v.is_finite() && v >= 0.0)
        && (scores.total() - 1.0).abs() <= SUM_TOLERANCE
}

fn divide_by_total<K: ScoreKey>(scores: &ScoreVector<K>) -> ScoreVector<K> {
    let total = scores.total();
    let denominator = if total > 0.0 { total } else { 1.0 };
    scores.map(|v| v / denominator)
}

// Large finite components can sum to +inf; bring them into range first.
fn rescale_if_overflowing<K: ScoreKey>(scores: ScoreVector<K>) -> ScoreVector<K> {
    if scores.total().is_finite() {
        return scores;
    }
    let max = scores.iter().map(|(_, v)| v).fold(0.0_f64, f64::max);
    scores.map(|v| v / max)
}
