//! Per-variant engine configuration.

use serde::{Deserialize, Serialize};

use crate::closeness::TierThresholds;
use crate::error::{AugurError, AugurResult};
use crate::tolerance::ToleranceConfig;

/// Rules for one game variant or level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Gliding tolerance schedule.
    pub tolerance: ToleranceConfig,
    /// Ceiling for the ritual exponent.
    pub max_exponent: u32,
    /// Guesses allowed per level.
    pub max_turns: u32,
    /// Closeness thresholds for clue tiers.
    pub tiers: TierThresholds,
    /// A failure at `max_exponent` ends the game instead of saturating.
    pub end_on_cap: bool,
    /// A repeated guess burns a turn and earns nothing.
    pub penalize_repeats: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::daily()
    }
}

impl EngineConfig {
    /// Tiered clue puzzle: five guesses, repeats penalised.
    pub fn daily() -> Self {
        Self {
            tolerance: ToleranceConfig::gliding(),
            max_exponent: 12,
            max_turns: 5,
            tiers: TierThresholds::default(),
            end_on_cap: false,
            penalize_repeats: true,
        }
    }

    /// Exponent guessing: fifty turns, the game ends past exponent 12.
    pub fn gliding() -> Self {
        Self {
            tolerance: ToleranceConfig::gliding(),
            max_exponent: 12,
            max_turns: 50,
            tiers: TierThresholds::default(),
            end_on_cap: true,
            penalize_repeats: false,
        }
    }

    /// Omen oracle: five turns, hidden ritual saturates at 12.
    pub fn oracle() -> Self {
        Self {
            tolerance: ToleranceConfig::oracle(),
            max_exponent: 12,
            max_turns: 5,
            tiers: TierThresholds::default(),
            end_on_cap: false,
            penalize_repeats: false,
        }
    }

    /// Banded clue ritual: ten turns, the game ends past exponent 8.
    pub fn ritual() -> Self {
        Self {
            tolerance: ToleranceConfig::ritual(),
            max_exponent: 8,
            max_turns: 10,
            tiers: TierThresholds::default(),
            end_on_cap: true,
            penalize_repeats: true,
        }
    }

    /// Set the turn budget.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the exponent ceiling.
    pub fn with_max_exponent(mut self, max_exponent: u32) -> Self {
        self.max_exponent = max_exponent;
        self
    }

    /// Set the tolerance schedule.
    pub fn with_tolerance(mut self, tolerance: ToleranceConfig) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the tier thresholds.
    pub fn with_tiers(mut self, tiers: TierThresholds) -> Self {
        self.tiers = tiers;
        self
    }

    /// Choose whether exceeding the exponent ceiling ends the game.
    pub fn with_end_on_cap(mut self, end_on_cap: bool) -> Self {
        self.end_on_cap = end_on_cap;
        self
    }

    /// Choose whether repeated guesses are penalised.
    pub fn with_penalize_repeats(mut self, penalize_repeats: bool) -> Self {
        self.penalize_repeats = penalize_repeats;
        self
    }

    /// Reject configurations the engine cannot honour.
    pub fn validate(&self) -> AugurResult<()> {
        if self.max_turns == 0 {
            return Err(AugurError::InvalidConfig(
                "max_turns must be at least 1".to_string(),
            ));
        }
        if self.max_exponent == 0 {
            return Err(AugurError::InvalidConfig(
                "max_exponent must be at least 1".to_string(),
            ));
        }
        self.tolerance.validate()?;
        self.tiers.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for cfg in [
            EngineConfig::daily(),
            EngineConfig::gliding(),
            EngineConfig::oracle(),
            EngineConfig::ritual(),
        ] {
            cfg.validate().unwrap();
        }
    }

    #[test]
    fn preset_values() {
        let g = EngineConfig::gliding();
        assert_eq!(g.max_turns, 50);
        assert_eq!(g.max_exponent, 12);
        assert!(g.end_on_cap);
        assert!(!g.penalize_repeats);

        let d = EngineConfig::daily();
        assert_eq!(d.max_turns, 5);
        assert!(d.penalize_repeats);

        let o = EngineConfig::oracle();
        assert_eq!(o.tolerance, ToleranceConfig::oracle());
        assert!(!o.end_on_cap);
    }

    #[test]
    fn builder_chain() {
        let cfg = EngineConfig::gliding()
            .with_max_turns(7)
            .with_max_exponent(4)
            .with_end_on_cap(false)
            .with_penalize_repeats(true);
        assert_eq!(cfg.max_turns, 7);
        assert_eq!(cfg.max_exponent, 4);
        assert!(!cfg.end_on_cap);
        assert!(cfg.penalize_repeats);
    }

    #[test]
    fn zero_budgets_rejected() {
        assert!(EngineConfig::daily().with_max_turns(0).validate().is_err());
        assert!(EngineConfig::daily().with_max_exponent(0).validate().is_err());
    }

    #[test]
    fn bad_tolerance_rejected() {
        let cfg = EngineConfig::gliding().with_tolerance(ToleranceConfig {
            base_percent: 30,
            step_percent: 2,
            cap_percent: 25,
            min_tolerance: 10,
        });
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn round_trip_serde() {
        let cfg = EngineConfig::ritual();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
