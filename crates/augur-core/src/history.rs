//! Guess history for repeat detection.

use std::collections::HashSet;

use num_bigint::BigInt;

/// A guess as submitted, with the turn it was spent on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    /// The raw guess value.
    pub value: BigInt,
    /// 1-based turn index.
    pub turn: u32,
}

/// Every guess submitted during one level.
#[derive(Debug, Clone, Default)]
pub struct GuessHistory {
    records: Vec<GuessRecord>,
    seen: HashSet<BigInt>,
}

impl GuessHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess. Returns `false` if the value was already submitted.
    pub fn record(&mut self, value: &BigInt, turn: u32) -> bool {
        let fresh = self.seen.insert(value.clone());
        self.records.push(GuessRecord {
            value: value.clone(),
            turn,
        });
        fresh
    }

    /// Whether a value has been submitted before.
    pub fn contains(&self, value: &BigInt) -> bool {
        self.seen.contains(value)
    }

    /// All submissions in order, repeats included.
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Number of submissions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget everything, for the next level.
    pub fn clear(&mut self) {
        self.records.clear();
        self.seen.clear();
    }
}
