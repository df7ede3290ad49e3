//! Closeness engine for the Augur number-guessing games.
//!
//! Provides relative closeness scoring, clue-tier gain thresholds, an
//! exponent-driven gliding tolerance, the ritual escalation state machine,
//! clue pools gated by tier or exponent band, and guess-derived omens.
//! All arithmetic on targets uses arbitrary-precision integers.

pub mod closeness;
pub mod clue;
pub mod config;
pub mod error;
pub mod escalation;
pub mod feedback;
pub mod history;
pub mod omen;
pub mod tolerance;

pub use closeness::{TierStep, TierThresholds, relative_closeness, tier_gain};
pub use clue::{Clue, ClueGate, CluePool, ClueState, Selection, select_clue};
pub use config::EngineConfig;
pub use error::{AugurError, AugurResult};
pub use escalation::{Escalation, RitualEvaluation, evaluate_guess_against_ritual, ritual_target};
pub use feedback::Feedback;
pub use history::{GuessHistory, GuessRecord};
pub use omen::{Omen, read_omens};
pub use tolerance::{ToleranceConfig, gliding_tolerance};

pub use num_bigint::BigInt;
