//! Playable number-guessing sessions on top of the Augur closeness engine.
//!
//! Four variants share the [`Game`] interface: the tiered daily puzzle,
//! gliding powers, the brutal oracle, and the banded-clue ritual. Each
//! session keeps a turn journal and produces a serializable [`GameReport`].

pub mod daily;
pub mod error;
pub mod game;
pub mod gliding;
pub mod input;
pub mod journal;
pub mod levels;
pub mod oracle;
pub mod ritual;

pub use daily::{DailySession, DailyTurn};
pub use error::{GameError, GameResult};
pub use game::{Game, GameReport, GameStatus, LossReason};
pub use gliding::{GlidingSession, GlidingTurn};
pub use journal::{TurnEntry, TurnLog};
pub use levels::{Level, daily_levels};
pub use oracle::{OracleSession, OracleTurn};
pub use ritual::{RitualSession, RitualTurn};
