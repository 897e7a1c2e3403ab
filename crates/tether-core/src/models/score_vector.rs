//! Fixed-key score vectors shared by the attachment estimator and the tone mapper.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed set of keys a ScoreVector is defined over.
pub trait ScoreKey: Copy + Ord + fmt::Debug + 'static {
    /// Every key, in tie-break precedence order. Earlier keys win exact ties.
    const PRECEDENCE: &'static [Self];

    fn as_str(self) -> &'static str;
}

/// Mapping from every key of `K` to a real score. Missing keys read as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "K: Serialize", deserialize = "K: Deserialize<'de>"))]
pub struct ScoreVector<K: ScoreKey> {
    values: BTreeMap<K, f64>,
}

impl<K: ScoreKey> ScoreVector<K> {
    /// All keys present, all zero.
    pub fn zeros() -> Self {
        Self {
            values: K::PRECEDENCE.iter().map(|k| (*k, 0.0)).collect(),
        }
    }

    /// Equal mass on every key.
    pub fn uniform() -> Self {
        let share = 1.0 / K::PRECEDENCE.len() as f64;
        Self {
            values: K::PRECEDENCE.iter().map(|k| (*k, share)).collect(),
        }
    }

    /// Build from explicit pairs; unspecified keys are zero.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (K, f64)>) -> Self {
        let mut vector = Self::zeros();
        for (key, value) in pairs {
            vector.set(key, value);
        }
        vector
    }

    pub fn get(&self, key: K) -> f64 {
        self.values.get(&key).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, key: K, value: f64) {
        self.values.insert(key, value);
    }

    pub fn add(&mut self, key: K, delta: f64) {
        *self.values.entry(key).or_insert(0.0) += delta;
    }

    /// Iterate every key of `K` (including ones never set) in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        let mut keys: Vec<K> = K::PRECEDENCE.to_vec();
        keys.sort();
        keys.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Sum of all components, in key order.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// Apply `f` to every component.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            values: self.iter().map(|(k, v)| (k, f(v))).collect(),
        }
    }

    /// Component-wise `self * (1 - weight) + other * weight`.
    pub fn lerp(&self, other: &Self, weight: f64) -> Self {
        Self {
            values: self
                .iter()
                .map(|(k, v)| (k, v * (1.0 - weight) + other.get(k) * weight))
                .collect(),
        }
    }

    /// Values sorted descending.
    pub fn sorted_desc(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.iter().map(|(_, v)| v).collect();
        values.sort_by(|a, b| b.total_cmp(a));
        values
    }

    /// Highest-scoring key. Exact ties go to the key earliest in `K::PRECEDENCE`.
    pub fn argmax(&self) -> K {
        let mut best = K::PRECEDENCE[0];
        let mut best_value = self.get(best);
        for key in &K::PRECEDENCE[1..] {
            let value = self.get(*key);
            if value > best_value {
                best = *key;
                best_value = value;
            }
        }
        best
    }

    /// True when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| v == 0.0)
    }
}

impl<K: ScoreKey> Default for ScoreVector<K> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<K: ScoreKey> fmt::Display for ScoreVector<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(k, v)| format!("{}={:.3}", k.as_str(), v))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
