//! The interface every game variant exposes to a frontend.

use serde::{Deserialize, Serialize};

use crate::error::GameResult;
use crate::journal::TurnLog;

/// Why a game ended without a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// The turn budget ran out.
    OutOfTurns,
    /// The ritual exponent was pushed past its ceiling.
    CapExceeded,
}

impl std::fmt::Display for LossReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfTurns => write!(f, "out of turns"),
            Self::CapExceeded => write!(f, "exponent cap exceeded"),
        }
    }
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Still accepting guesses.
    InProgress,
    /// The player found the number.
    Won,
    /// The game ended without a win.
    Lost(LossReason),
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost(reason) => write!(f, "lost ({reason})"),
        }
    }
}

/// Summary of a finished (or abandoned) game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameReport {
    /// Variant name.
    pub game: String,
    /// Final status.
    pub status: GameStatus,
    /// Turns consumed across all levels.
    pub turns_used: u32,
    /// What the hidden numbers were, and how the player did.
    pub summary: String,
    /// Every accepted turn.
    pub journal: TurnLog,
}

/// A playable number-guessing session.
///
/// Frontends loop: show [`Game::prompt`], read a line, pass it to
/// [`Game::submit`], print the result, stop once [`Game::status`] is over.
pub trait Game {
    /// Short variant name.
    fn name(&self) -> &'static str;

    /// Rules shown before the first guess.
    fn intro(&self) -> String;

    /// Prompt for the next guess.
    fn prompt(&self) -> String;

    /// Play one line of input and return the rendered outcome.
    ///
    /// Unparseable input returns [`crate::GameError::InvalidGuess`] and
    /// leaves the session untouched.
    fn submit(&mut self, input: &str) -> GameResult<String>;

    /// Current status.
    fn status(&self) -> GameStatus;

    /// Summary so far.
    fn report(&self) -> GameReport;

    /// Whether the game has ended.
    fn is_over(&self) -> bool {
        self.status().is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost(LossReason::OutOfTurns).is_over());
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::Won.to_string(), "won");
        assert_eq!(
            GameStatus::Lost(LossReason::CapExceeded).to_string(),
            "lost (exponent cap exceeded)"
        );
    }
}
