//! Higher/lower feedback.

use std::cmp::Ordering;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Direction the player should move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// The target is above the guess.
    Higher,
    /// The target is below the guess.
    Lower,
    /// The guess is the target.
    Correct,
}

impl Feedback {
    /// Compare a guess with the target.
    pub fn compare(guess: &BigInt, target: &BigInt) -> Self {
        match guess.cmp(target) {
            Ordering::Less => Self::Higher,
            Ordering::Greater => Self::Lower,
            Ordering::Equal => Self::Correct,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Higher => write!(f, "Higher"),
            Self::Lower => write!(f, "Lower"),
            Self::Correct => write!(f, "Correct"),
        }
    }
}
