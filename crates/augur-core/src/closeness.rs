//! Relative closeness scoring and clue-tier gain.
//!
//! Closeness is `1 - |guess - answer| / max(|answer|, 1)`, clamped to
//! `[0, 1]`. A [`TierThresholds`] table turns a closeness score into a
//! number of clue tiers to unlock, with an absolute-distance mercy rule for
//! small targets.

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{AugurError, AugurResult};

/// Tiers granted by the mercy rule. Never more, however close the guess is.
pub const MERCY_GAIN: u32 = 1;

/// Operands wider than this are shifted down before converting to `f64`.
const MAX_FLOAT_BITS: u64 = 1000;

/// Score how close `guess` is to `answer`, from 0.0 (100% or more off) to
/// 1.0 (exact).
pub fn relative_closeness(guess: &BigInt, answer: &BigInt) -> f64 {
    let denom = answer.abs().max(BigInt::one());
    let diff = (guess - answer).abs();

    if diff.is_zero() {
        return 1.0;
    }
    if diff >= denom {
        return 0.0;
    }

    // Same shift on both sides keeps the ratio and stays monotonic.
    let shift = denom.bits().saturating_sub(MAX_FLOAT_BITS);
    let diff = diff >> shift;
    let denom = denom >> shift;

    let ratio = match (diff.to_f64(), denom.to_f64()) {
        (Some(d), Some(n)) if n > 0.0 => d / n,
        _ => 1.0,
    };
    (1.0 - ratio).clamp(0.0, 1.0)
}

/// One row of a tier table: closeness at or above `min_closeness` grants
/// `gain` tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierStep {
    /// Lowest closeness that qualifies for this row.
    pub min_closeness: f64,
    /// Tiers unlocked by this row.
    pub gain: u32,
}

impl TierStep {
    /// Create a tier step.
    pub fn new(min_closeness: f64, gain: u32) -> Self {
        Self {
            min_closeness,
            gain,
        }
    }
}

#[derive(Deserialize)]
struct RawTierThresholds {
    steps: Vec<TierStep>,
    mercy_abs_diff: u64,
}

/// Closeness thresholds plus the absolute mercy distance.
///
/// Rows are kept in strictly decreasing `min_closeness` order with
/// non-increasing gains, so a closer guess never earns fewer tiers. The
/// same checks run when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTierThresholds")]
pub struct TierThresholds {
    steps: Vec<TierStep>,
    mercy_abs_diff: u64,
}

impl TryFrom<RawTierThresholds> for TierThresholds {
    type Error = AugurError;

    fn try_from(raw: RawTierThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.steps, raw.mercy_abs_diff)
    }
}

impl TierThresholds {
    /// Build a table from unordered steps. Fails if the ordering contract
    /// cannot hold.
    pub fn new(mut steps: Vec<TierStep>, mercy_abs_diff: u64) -> AugurResult<Self> {
        steps.sort_by(|a, b| b.min_closeness.total_cmp(&a.min_closeness));
        let thresholds = Self {
            steps,
            mercy_abs_diff,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// The table rows, strictest first.
    pub fn steps(&self) -> &[TierStep] {
        &self.steps
    }

    /// Absolute distance at or below which the mercy rule applies.
    pub fn mercy_abs_diff(&self) -> u64 {
        self.mercy_abs_diff
    }

    /// Set the mercy distance.
    pub fn with_mercy_abs_diff(mut self, mercy_abs_diff: u64) -> Self {
        self.mercy_abs_diff = mercy_abs_diff;
        self
    }

    /// Check the ordering contract.
    pub fn validate(&self) -> AugurResult<()> {
        for step in &self.steps {
            if !(step.min_closeness > 0.0 && step.min_closeness <= 1.0) {
                return Err(AugurError::InvalidConfig(format!(
                    "tier closeness {} outside (0, 1]",
                    step.min_closeness
                )));
            }
            if step.gain < MERCY_GAIN {
                return Err(AugurError::InvalidConfig(format!(
                    "tier at closeness {} grants {} tiers, below the mercy gain",
                    step.min_closeness, step.gain
                )));
            }
        }
        for pair in self.steps.windows(2) {
            let (stricter, looser) = (pair[0], pair[1]);
            if stricter.min_closeness <= looser.min_closeness {
                return Err(AugurError::InvalidConfig(format!(
                    "tier closeness {} is listed twice or out of order",
                    looser.min_closeness
                )));
            }
            if stricter.gain < looser.gain {
                return Err(AugurError::InvalidConfig(format!(
                    "closeness {} grants fewer tiers than {}",
                    stricter.min_closeness, looser.min_closeness
                )));
            }
        }
        Ok(())
    }

    /// Tier gain for a closeness score and the absolute distance behind it.
    pub fn gain(&self, rel_closeness: f64, abs_diff: &BigInt) -> u32 {
        if let Some(step) = self
            .steps
            .iter()
            .find(|step| rel_closeness >= step.min_closeness)
        {
            return step.gain;
        }
        if *abs_diff <= BigInt::from(self.mercy_abs_diff) {
            return MERCY_GAIN;
        }
        0
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            steps: vec![
                TierStep::new(0.98, 3),
                TierStep::new(0.94, 2),
                TierStep::new(0.88, 1),
            ],
            mercy_abs_diff: 3,
        }
    }
}

/// Map a closeness score to a tier increment using `thresholds`.
pub fn tier_gain(rel_closeness: f64, abs_diff: &BigInt, thresholds: &TierThresholds) -> u32 {
    thresholds.gain(rel_closeness, abs_diff)
}
