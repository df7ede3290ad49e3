//! Ritual escalation: the exponent state machine behind `base^exponent`
//! targets.
//!
//! The exponent starts at 1. A miss that lands inside the gliding tolerance
//! drops it by one (never below 1); any other miss raises it by one (never
//! above the configured maximum). Whether hitting the ceiling ends the game
//! is decided by the caller through [`RitualEvaluation::cap_exceeded`].

use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::AugurError;
use crate::tolerance::{ToleranceConfig, gliding_tolerance};

/// `base^exponent`.
pub fn ritual_target(base: &BigInt, exponent: u32) -> BigInt {
    num_traits::pow(base.clone(), exponent as usize)
}

/// Outcome of comparing a wrong guess against the current ritual target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RitualEvaluation {
    /// `|guess - target|`.
    pub diff: BigInt,
    /// The tolerance window that was applied.
    pub tolerance: BigInt,
    /// The guess was close enough to relax the ritual.
    pub within_tolerance: bool,
    /// Exponent after the transition, inside `[1, max_exponent]`.
    pub next_exponent: u32,
    /// The unclamped increment would have passed `max_exponent`.
    pub cap_exceeded: bool,
}

/// Evaluate a guess against `target` at `exponent` using the tolerance and
/// ceiling from `config`.
pub fn evaluate_guess_against_ritual(
    guess: &BigInt,
    target: &BigInt,
    exponent: u32,
    config: &EngineConfig,
) -> RitualEvaluation {
    evaluate(guess, target, exponent, config.max_exponent, &config.tolerance)
}

fn evaluate(
    guess: &BigInt,
    target: &BigInt,
    exponent: u32,
    max_exponent: u32,
    tolerance_config: &ToleranceConfig,
) -> RitualEvaluation {
    let max_exponent = max_exponent.max(1);
    let exponent = exponent.clamp(1, max_exponent);
    let diff = (guess - target).abs();
    let tolerance = gliding_tolerance(target, exponent, tolerance_config);
    let within_tolerance = exponent > 1 && diff <= tolerance;

    let (next_exponent, cap_exceeded) = if within_tolerance {
        (exponent - 1, false)
    } else if exponent >= max_exponent {
        (max_exponent, true)
    } else {
        (exponent + 1, false)
    };

    RitualEvaluation {
        diff,
        tolerance,
        within_tolerance,
        next_exponent,
        cap_exceeded,
    }
}

#[derive(Deserialize)]
struct RawEscalation {
    exponent: u32,
    max_exponent: u32,
}

/// Current ritual exponent and its ceiling.
///
/// Invariant: `1 <= exponent <= max_exponent`, also enforced when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEscalation")]
pub struct Escalation {
    exponent: u32,
    max_exponent: u32,
}

impl TryFrom<RawEscalation> for Escalation {
    type Error = AugurError;

    fn try_from(raw: RawEscalation) -> Result<Self, Self::Error> {
        if raw.max_exponent == 0 {
            return Err(AugurError::InvalidConfig(
                "max_exponent must be at least 1".to_string(),
            ));
        }
        if raw.exponent == 0 || raw.exponent > raw.max_exponent {
            return Err(AugurError::InvalidConfig(format!(
                "exponent {} outside [1, {}]",
                raw.exponent, raw.max_exponent
            )));
        }
        Ok(Self::at(raw.exponent, raw.max_exponent))
    }
}

impl Escalation {
    /// Start at exponent 1 with the given ceiling (at least 1).
    pub fn new(max_exponent: u32) -> Self {
        Self::at(1, max_exponent)
    }

    /// Start at a specific exponent, clamped to `[1, max_exponent]`.
    pub fn at(exponent: u32, max_exponent: u32) -> Self {
        let max_exponent = max_exponent.max(1);
        Self {
            exponent: exponent.clamp(1, max_exponent),
            max_exponent,
        }
    }

    /// The current exponent.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The exponent ceiling.
    pub fn max_exponent(&self) -> u32 {
        self.max_exponent
    }

    /// The current target for a base.
    pub fn target(&self, base: &BigInt) -> BigInt {
        ritual_target(base, self.exponent)
    }

    /// Evaluate a wrong guess and move to the next exponent.
    pub fn step(
        &mut self,
        guess: &BigInt,
        target: &BigInt,
        tolerance: &ToleranceConfig,
    ) -> RitualEvaluation {
        let eval = evaluate(guess, target, self.exponent, self.max_exponent, tolerance);
        self.exponent = eval.next_exponent;
        eval
    }
}
