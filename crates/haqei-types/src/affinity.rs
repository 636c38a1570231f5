use serde::{Deserialize, Serialize};

use crate::trigram::Trigram;

/// Per-trigram scores, slot `i` holding trigram id `i + 1`.
///
/// Produced by the scorer as a distribution (non-negative, summing to 1.0),
/// but the type itself only carries eight numbers; consumers that require
/// the distribution invariant check it themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffinityVector([f64; 8]);

impl AffinityVector {
    pub fn new(values: [f64; 8]) -> Self {
        Self(values)
    }

    pub fn zero() -> Self {
        Self([0.0; 8])
    }

    pub fn get(&self, trigram: Trigram) -> f64 {
        self.0[trigram.index()]
    }

    pub fn add(&mut self, trigram: Trigram, amount: f64) {
        self.0[trigram.index()] += amount;
    }

    pub fn values(&self) -> &[f64; 8] {
        &self.0
    }

    /// Entries paired with their trigram, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Trigram, f64)> + '_ {
        Trigram::ALL.into_iter().map(move |t| (t, self.0[t.index()]))
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl From<[f64; 8]> for AffinityVector {
    fn from(values: [f64; 8]) -> Self {
        Self(values)
    }
}
