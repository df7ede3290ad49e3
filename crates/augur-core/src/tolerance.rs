//! Gliding tolerance: a "close enough" window that widens as the ritual
//! exponent climbs and scales with the magnitude of the target.

use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::error::{AugurError, AugurResult};

/// Percent schedule and floor for the gliding tolerance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    /// Window at exponent 1, in percent of the target.
    pub base_percent: u32,
    /// Extra percent per exponent step above 1.
    pub step_percent: u32,
    /// Upper bound on the percent window.
    pub cap_percent: u32,
    /// The window is never narrower than this.
    pub min_tolerance: u64,
}

impl ToleranceConfig {
    /// 5% rising by 2% per step, capped at 25%, never below 10.
    pub fn gliding() -> Self {
        Self {
            base_percent: 5,
            step_percent: 2,
            cap_percent: 25,
            min_tolerance: 10,
        }
    }

    /// 4% rising by 2% per step, capped at 22%, never below 10.
    pub fn oracle() -> Self {
        Self {
            base_percent: 4,
            step_percent: 2,
            cap_percent: 22,
            min_tolerance: 10,
        }
    }

    /// 6% rising by 3% per step, capped at 30%, never below 15.
    pub fn ritual() -> Self {
        Self {
            base_percent: 6,
            step_percent: 3,
            cap_percent: 30,
            min_tolerance: 15,
        }
    }

    /// Percent window for an exponent (clamped to at least 1).
    pub fn percent(&self, exponent: u32) -> u32 {
        let steps = exponent.max(1) - 1;
        self.base_percent
            .saturating_add(steps.saturating_mul(self.step_percent))
            .min(self.cap_percent)
    }

    /// Check that the schedule is coherent.
    pub fn validate(&self) -> AugurResult<()> {
        if self.cap_percent < self.base_percent {
            return Err(AugurError::InvalidConfig(format!(
                "tolerance cap {}% is below the base {}%",
                self.cap_percent, self.base_percent
            )));
        }
        Ok(())
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self::gliding()
    }
}

/// Tolerance around `target` at `exponent`:
/// `max(min_tolerance, floor(|target| * percent / 100))`.
pub fn gliding_tolerance(target: &BigInt, exponent: u32, config: &ToleranceConfig) -> BigInt {
    let percent = config.percent(exponent);
    let window = target.abs() * BigInt::from(percent) / BigInt::from(100u32);
    window.max(BigInt::from(config.min_tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn percent_schedule() {
        let cfg = ToleranceConfig::gliding();
        assert_eq!(cfg.percent(1), 5);
        assert_eq!(cfg.percent(2), 7);
        assert_eq!(cfg.percent(3), 9);
        assert_eq!(cfg.percent(11), 25);
        assert_eq!(cfg.percent(12), 25);
        assert_eq!(cfg.percent(400), 25);
    }

    #[test]
    fn percent_treats_zero_exponent_as_one() {
        assert_eq!(ToleranceConfig::oracle().percent(0), 4);
    }

    #[test]
    fn small_target_hits_floor() {
        let cfg = ToleranceConfig::gliding();
        assert_eq!(gliding_tolerance(&big(100), 1, &cfg), big(10));
        assert_eq!(gliding_tolerance(&big(7), 5, &cfg), big(10));
    }

    #[test]
    fn large_target_scales() {
        let cfg = ToleranceConfig::gliding();
        // 10_000 at exponent 2 -> 7%
        assert_eq!(gliding_tolerance(&big(10_000), 2, &cfg), big(700));
        // floor division
        assert_eq!(gliding_tolerance(&big(1_001), 1, &cfg), big(50));
    }

    #[test]
    fn beyond_sixty_four_bits() {
        let cfg = ToleranceConfig::oracle();
        let target = num_traits::pow(big(100), 12);
        let tol = gliding_tolerance(&target, 12, &cfg);
        // capped at 22%
        assert_eq!(tol, &target * big(22) / big(100));
        assert!(tol > BigInt::from(u64::MAX));
    }

    #[test]
    fn validate_rejects_cap_below_base() {
        let cfg = ToleranceConfig {
            base_percent: 10,
            step_percent: 1,
            cap_percent: 5,
            min_tolerance: 0,
        };
        assert!(cfg.validate().is_err());
        assert!(ToleranceConfig::ritual().validate().is_ok());
    }
}
