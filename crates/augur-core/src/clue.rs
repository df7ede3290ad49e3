//! Clue pools, gating, and selection.
//!
//! Every clue carries an unlock level. A [`ClueGate`] turns the current tier
//! or exponent band into a level, and every clue at or below that level is
//! permitted. A lower exponent maps to a higher level, so relaxing the ritual
//! always unlocks a superset of the clues available before. Clues that were
//! already shown are never offered again.

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A piece of clue text and the level that unlocks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Text shown to the player.
    pub text: String,
    /// Minimum gate level at which this clue is permitted.
    pub level: u32,
}

impl Clue {
    /// Create a clue.
    pub fn new(text: impl Into<String>, level: u32) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// The clues available for one level or game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluePool {
    clues: Vec<Clue>,
}

impl CluePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool where each clue's level is its position, vaguest first.
    pub fn from_tiers<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let clues = texts
            .into_iter()
            .zip(0u32..)
            .map(|(text, level)| Clue::new(text, level))
            .collect();
        Self { clues }
    }

    /// Add a clue.
    pub fn push(&mut self, clue: Clue) {
        self.clues.push(clue);
    }

    /// All clues in insertion order.
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Number of clues.
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    /// Whether the pool has no clues.
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Clues permitted at a gate, used or not.
    pub fn permitted(&self, gate: ClueGate) -> impl Iterator<Item = &Clue> {
        let level = gate.level();
        self.clues.iter().filter(move |c| c.level <= level)
    }
}

/// What currently limits which clues may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueGate {
    /// Clues up to and including this tier.
    Tier(u32),
    /// Clues unlocked by the current ritual exponent.
    ExponentBand {
        /// Current exponent.
        exponent: u32,
        /// Exponent ceiling.
        max_exponent: u32,
    },
}

impl ClueGate {
    /// The unlock level this gate admits.
    pub fn level(self) -> u32 {
        match self {
            Self::Tier(tier) => tier,
            Self::ExponentBand {
                exponent,
                max_exponent,
            } => max_exponent.saturating_sub(exponent),
        }
    }
}

/// How to pick among the permitted, unused clues.
#[derive(Debug)]
pub enum Selection<'a> {
    /// Uniformly at random.
    Random(&'a mut StdRng),
    /// The highest unlock level, earliest in the pool on ties.
    HighestLevel,
}

/// Pick a clue permitted by `gate` that is not in `used`.
///
/// Returns `None` once every permitted clue has been shown.
pub fn select_clue<'p>(
    pool: &'p CluePool,
    gate: ClueGate,
    used: &HashSet<String>,
    selection: Selection<'_>,
) -> Option<&'p Clue> {
    let candidates: Vec<&Clue> = pool
        .permitted(gate)
        .filter(|c| !used.contains(&c.text))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    match selection {
        Selection::Random(rng) => {
            let idx = rng.random_range(0..candidates.len());
            Some(candidates[idx])
        }
        Selection::HighestLevel => candidates.iter().rev().max_by_key(|c| c.level).copied(),
    }
}

/// Unlocked tier and shown clues for one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueState {
    unlocked_tier: u32,
    used: HashSet<String>,
}

impl ClueState {
    /// Start at tier 0 with nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The highest tier unlocked so far.
    pub fn unlocked_tier(&self) -> u32 {
        self.unlocked_tier
    }

    /// Texts already shown.
    pub fn used(&self) -> &HashSet<String> {
        &self.used
    }

    /// Whether a clue text has been shown.
    pub fn is_used(&self, text: &str) -> bool {
        self.used.contains(text)
    }

    /// Unlock `gain` more tiers, clamped to the last tier of a pool holding
    /// `tier_count` clues. Returns the new tier.
    pub fn advance(&mut self, gain: u32, tier_count: usize) -> u32 {
        let last = u32::try_from(tier_count.saturating_sub(1)).unwrap_or(u32::MAX);
        self.unlocked_tier = self.unlocked_tier.saturating_add(gain).min(last);
        self.unlocked_tier
    }

    /// Select a clue and mark it shown.
    pub fn draw(
        &mut self,
        pool: &CluePool,
        gate: ClueGate,
        selection: Selection<'_>,
    ) -> Option<String> {
        let text = select_clue(pool, gate, &self.used, selection)?.text.clone();
        self.used.insert(text.clone());
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn tiers() -> CluePool {
        CluePool::from_tiers(["vague", "hazy", "clear", "sharp", "exact"])
    }

    #[test]
    fn from_tiers_levels_by_position() {
        let pool = tiers();
        let levels: Vec<u32> = pool.clues().iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn tier_gate_permits_up_to_tier() {
        let pool = tiers();
        let texts: Vec<&str> = pool
            .permitted(ClueGate::Tier(2))
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(texts, vec!["vague", "hazy", "clear"]);
    }

    #[test]
    fn lower_exponent_unlocks_superset() {
        let mut pool = CluePool::new();
        pool.push(Clue::new("weak", 2));
        pool.push(Clue::new("medium", 5));
        pool.push(Clue::new("strong", 7));

        let mut previous = 0;
        for exponent in (1..=8).rev() {
            let gate = ClueGate::ExponentBand {
                exponent,
                max_exponent: 8,
            };
            let count = pool.permitted(gate).count();
            assert!(count >= previous, "exponent {exponent}: {count} < {previous}");
            previous = count;
        }
        assert_eq!(previous, 3);
    }

    #[test]
    fn highest_level_is_deterministic() {
        let pool = tiers();
        let used = HashSet::new();
        let clue = select_clue(&pool, ClueGate::Tier(3), &used, Selection::HighestLevel);
        assert_eq!(clue.map(|c| c.text.as_str()), Some("sharp"));
    }

    #[test]
    fn highest_level_prefers_earliest_on_ties() {
        let mut pool = CluePool::new();
        pool.push(Clue::new("first", 1));
        pool.push(Clue::new("second", 1));
        let clue = select_clue(&pool, ClueGate::Tier(1), &HashSet::new(), Selection::HighestLevel);
        assert_eq!(clue.map(|c| c.text.as_str()), Some("first"));
    }

    #[test]
    fn used_clues_are_skipped() {
        let pool = tiers();
        let used: HashSet<String> = ["sharp".to_string()].into();
        let clue = select_clue(&pool, ClueGate::Tier(3), &used, Selection::HighestLevel);
        assert_eq!(clue.map(|c| c.text.as_str()), Some("clear"));
    }

    #[test]
    fn random_selection_is_seeded() {
        let pool = tiers();
        let used = HashSet::new();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let ca = select_clue(&pool, ClueGate::Tier(4), &used, Selection::Random(&mut a));
        let cb = select_clue(&pool, ClueGate::Tier(4), &used, Selection::Random(&mut b));
        assert_eq!(ca, cb);
        assert!(ca.is_some());
    }

    #[test]
    fn draw_exhausts_band() {
        let pool = tiers();
        let mut state = ClueState::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..3 {
            let text = state
                .draw(&pool, ClueGate::Tier(2), Selection::Random(&mut rng))
                .unwrap();
            assert!(seen.insert(text));
        }
        assert_eq!(state.draw(&pool, ClueGate::Tier(2), Selection::Random(&mut rng)), None);
        assert_eq!(state.used().len(), 3);
        // widening the gate offers the rest
        assert!(state.draw(&pool, ClueGate::Tier(4), Selection::HighestLevel).is_some());
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let mut state = ClueState::new();
        assert_eq!(
            state.draw(&CluePool::new(), ClueGate::Tier(9), Selection::HighestLevel),
            None
        );
    }

    #[test]
    fn advance_clamps_to_pool() {
        let mut state = ClueState::new();
        assert_eq!(state.advance(2, 5), 2);
        assert_eq!(state.advance(3, 5), 4);
        assert_eq!(state.advance(1, 5), 4);
        assert_eq!(state.unlocked_tier(), 4);

        let mut empty = ClueState::new();
        assert_eq!(empty.advance(3, 0), 0);
    }
}
