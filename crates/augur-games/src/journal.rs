//! Turn journal: every accepted guess and what it produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnEntry {
    /// Level number (1-based). Always 1 for single-level games.
    pub round: u32,
    /// Turn number within the level (1-based).
    pub turn: u32,
    /// The guess as entered.
    pub guess: String,
    /// Rendered outcome.
    pub outcome: String,
    /// When the guess was made.
    pub timestamp: DateTime<Utc>,
}

/// Chronological list of turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnLog {
    entries: Vec<TurnEntry>,
}

impl TurnLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a turn stamped with the current time.
    pub fn record(
        &mut self,
        round: u32,
        turn: u32,
        guess: impl Into<String>,
        outcome: impl Into<String>,
    ) {
        self.entries.push(TurnEntry {
            round,
            turn,
            guess: guess.into(),
            outcome: outcome.into(),
            timestamp: Utc::now(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[TurnEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
