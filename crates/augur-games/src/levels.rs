//! Built-in levels for the daily puzzle.

use augur_core::CluePool;

/// One master number with its clues and the fact it reveals.
#[derive(Debug, Clone)]
pub struct Level {
    /// The hidden number.
    pub master_number: i64,
    /// Category shown to the player.
    pub category: String,
    /// Clues ordered from vaguest (tier 0) to sharpest.
    pub clues: CluePool,
    /// Fact revealed on a win or at the end of the level.
    pub reveal: String,
}

impl Level {
    /// Create a level from tier-ordered clue texts.
    pub fn new(
        master_number: i64,
        category: impl Into<String>,
        clues: &[&str],
        reveal: impl Into<String>,
    ) -> Self {
        Self {
            master_number,
            category: category.into(),
            clues: CluePool::from_tiers(clues.iter().copied()),
            reveal: reveal.into(),
        }
    }
}

/// The four daily levels.
pub fn daily_levels() -> Vec<Level> {
    vec![
        Level::new(
            42,
            "Pop Culture",
            &[
                "A cultural pebble that caused an outsized ripple.",
                "It is even, and unusually famous for being an answer.",
                "It is not a round number, but it's oddly satisfying.",
                "It equals the product of two small, familiar integers.",
                "A certain guidebook would call this... definitive.",
            ],
            "42: in The Hitchhiker's Guide to the Galaxy, it's the Answer to the Ultimate \
             Question of Life, the Universe, and Everything.",
        ),
        Level::new(
            1969,
            "Science / Space",
            &[
                "A year that made the sky feel closer.",
                "20th century. Not late-century.",
                "It involves a journey where cameras mattered.",
                "A mission number becomes legendary here.",
                "A giant leap happened: Apollo 11, Moon landing.",
            ],
            "1969: the year humans first landed on the Moon (Apollo 11).",
        ),
        Level::new(
            1066,
            "History",
            &[
                "A date that rewired a nation's story.",
                "A four-digit year, medieval-adjacent.",
                "This year is taught as a 'you must know this' milestone.",
                "A decisive battle is the usual shorthand.",
                "The Norman Conquest; Battle of Hastings.",
            ],
            "1066: the Norman Conquest of England (Battle of Hastings).",
        ),
        Level::new(
            299_792_458,
            "Physics",
            &[
                "A number that behaves like a ceiling.",
                "It's defined exactly, not measured approximately.",
                "It's tied to how we define a unit of length.",
                "It's a speed limit with a very famous letter nearby.",
                "The speed of light in vacuum, in metres per second.",
            ],
            "299,792,458: the speed of light in vacuum, in metres per second.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_levels_with_five_tiers() {
        let levels = daily_levels();
        assert_eq!(levels.len(), 4);
        for level in &levels {
            assert_eq!(level.clues.len(), 5, "{}", level.category);
            let tiers: Vec<u32> = level.clues.clues().iter().map(|c| c.level).collect();
            assert_eq!(tiers, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn master_numbers() {
        let numbers: Vec<i64> = daily_levels().iter().map(|l| l.master_number).collect();
        assert_eq!(numbers, vec![42, 1969, 1066, 299_792_458]);
    }
}
