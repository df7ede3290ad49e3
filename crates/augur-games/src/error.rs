//! Error types for game sessions.

use thiserror::Error;

use augur_core::AugurError;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum GameError {
    /// The input did not parse as a whole number. No turn is consumed.
    #[error("not a whole number: {0:?}")]
    InvalidGuess(String),

    /// A guess was submitted after the game ended.
    #[error("the game is over")]
    GameOver,

    /// A level index outside the level list.
    #[error("unknown level: {0}")]
    UnknownLevel(usize),

    /// A secret base outside the playable range.
    #[error("base {0} outside 1..=100")]
    BaseOutOfRange(String),

    /// A session was built without any levels.
    #[error("no levels to play")]
    NoLevels,

    /// Engine configuration error.
    #[error("{0}")]
    Config(#[from] AugurError),
}
