//! The brutal oracle: divine a fixed master number from omens.
//!
//! Each wrong guess is read for omens (properties of the number itself), and
//! a hidden ritual over a secret `base^exponent` reacts in the background. The
//! ritual never decides the game; it only colours the oracle's mood.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use augur_core::{BigInt, EngineConfig, Escalation, Omen, RitualEvaluation, read_omens};

use crate::error::{GameError, GameResult};
use crate::game::{Game, GameReport, GameStatus, LossReason};
use crate::gliding::{check_base, draw_base};
use crate::input::parse_guess;
use crate::journal::TurnLog;

/// The number the oracle hides.
pub const MASTER_NUMBER: i64 = 42;

const DEFAULT_SEEKER: &str = "Seeker";

/// What one guess drew from the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleOutcome {
    /// The master number.
    Divined,
    /// A wrong guess.
    Miss {
        /// Omens read from the guess. Empty means static.
        omens: Vec<Omen>,
        /// The hidden ritual's reaction.
        ritual: RitualEvaluation,
    },
}

/// One turn with the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleTurn {
    /// Turn number (1-based).
    pub turn: u32,
    /// What happened.
    pub outcome: OracleOutcome,
    /// Final status when this turn ended the game.
    pub ending: Option<GameStatus>,
    seeker: String,
}

impl std::fmt::Display for OracleTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            OracleOutcome::Divined => {
                return write!(
                    f,
                    "{}... the Oracle stops resisting.\n\
                     The ritual collapses into a single, quiet truth.\n\n\
                     YOU WIN: THE MASTER NUMBER IS {MASTER_NUMBER}\n\n\
                     In Douglas Adams' The Hitchhiker's Guide to the Galaxy, a supercomputer\n\
                     named Deep Thought is asked for the Answer to the Ultimate Question of\n\
                     Life, the Universe, and Everything. After an absurdly long calculation\n\
                     it delivers the answer: {MASTER_NUMBER}.\n\
                     The Answer is meaningless without knowing the right Question, so the\n\
                     search continues.",
                    self.seeker
                );
            }
            OracleOutcome::Miss { omens, ritual } => {
                if omens.is_empty() {
                    writeln!(f, "Omen: Only static. No pattern holds.")?;
                }
                for omen in omens {
                    writeln!(f, "Omen: {omen}")?;
                }
                if ritual.within_tolerance {
                    write!(f, "The air stills for a moment. The ritual slackens.")?;
                } else {
                    write!(f, "The pressure increases. The ritual intensifies.")?;
                }
            }
        }

        if let Some(GameStatus::Lost(reason)) = self.ending {
            if reason == LossReason::CapExceeded {
                write!(f, "\nThe ritual breaks its bounds.")?;
            }
            write!(f, "\nThe Oracle closes its eye. You leave with fragments, not truth.")?;
        }
        Ok(())
    }
}

/// A session with the brutal oracle.
pub struct OracleSession {
    config: EngineConfig,
    seeker: String,
    base: BigInt,
    escalation: Escalation,
    turn: u32,
    status: GameStatus,
    journal: TurnLog,
}

impl OracleSession {
    /// Start a session, drawing the hidden ritual base from `seed`.
    pub fn new(config: EngineConfig, seed: u64, seeker: Option<&str>) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = draw_base(&mut rng);
        Self::with_base(config, base, seeker)
    }

    /// Start a session with a known ritual base.
    pub fn with_base(config: EngineConfig, base: BigInt, seeker: Option<&str>) -> GameResult<Self> {
        config.validate()?;
        check_base(&base)?;
        let seeker = seeker
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEEKER)
            .to_string();
        let escalation = Escalation::new(config.max_exponent);
        Ok(Self {
            config,
            seeker,
            base,
            escalation,
            turn: 0,
            status: GameStatus::InProgress,
            journal: TurnLog::new(),
        })
    }

    /// The seeker's name.
    pub fn seeker(&self) -> &str {
        &self.seeker
    }

    /// Current ritual exponent.
    pub fn exponent(&self) -> u32 {
        self.escalation.exponent()
    }

    /// The turn journal.
    pub fn journal(&self) -> &TurnLog {
        &self.journal
    }

    /// Speak a number to the oracle.
    pub fn guess(&mut self, value: BigInt) -> GameResult<OracleTurn> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        self.turn += 1;
        let turn = self.turn;

        let outcome = if value == BigInt::from(MASTER_NUMBER) {
            self.status = GameStatus::Won;
            OracleOutcome::Divined
        } else {
            let omens = read_omens(&value);
            let target = self.escalation.target(&self.base);
            let ritual = self
                .escalation
                .step(&value, &target, &self.config.tolerance);
            debug!(
                turn,
                omens = omens.len(),
                exponent = ritual.next_exponent,
                "oracle ritual"
            );
            if ritual.cap_exceeded && self.config.end_on_cap {
                self.status = GameStatus::Lost(LossReason::CapExceeded);
            } else if turn >= self.config.max_turns {
                self.status = GameStatus::Lost(LossReason::OutOfTurns);
            }
            OracleOutcome::Miss { omens, ritual }
        };

        let ending = self.status.is_over().then_some(self.status);
        if ending.is_some() {
            info!(turns = turn, status = %self.status, "oracle session finished");
        }
        let result = OracleTurn {
            turn,
            outcome,
            ending,
            seeker: self.seeker.clone(),
        };
        self.journal.record(1, turn, value.to_string(), result.to_string());
        Ok(result)
    }
}

impl Game for OracleSession {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn intro(&self) -> String {
        format!(
            "THE BRUTAL ORACLE\nYou have {} guesses to divine the Master Number.\n\n\
             Welcome, {}. The Oracle listens. The ritual escalates.",
            self.config.max_turns, self.seeker
        )
    }

    fn prompt(&self) -> String {
        format!(
            "Turn {}/{} | Ritual Exponent: {}\nSpeak a number: ",
            self.turn + 1,
            self.config.max_turns,
            self.exponent()
        )
    }

    fn submit(&mut self, input: &str) -> GameResult<String> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let value = parse_guess(input)?;
        self.guess(value).map(|turn| turn.to_string())
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn report(&self) -> GameReport {
        let summary = match self.status {
            GameStatus::Won => format!("{} divined {MASTER_NUMBER}.", self.seeker),
            _ => format!(
                "{} reached ritual exponent {}.",
                self.seeker,
                self.exponent()
            ),
        };
        GameReport {
            game: self.name().to_string(),
            status: self.status,
            turns_used: self.turn,
            summary,
            journal: self.journal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn session(base: i64) -> OracleSession {
        OracleSession::with_base(EngineConfig::oracle(), big(base), Some("Arthur")).unwrap()
    }

    #[test]
    fn divining_wins() {
        let mut s = session(3);
        let turn = s.guess(big(42)).unwrap();
        assert_eq!(turn.outcome, OracleOutcome::Divined);
        assert_eq!(turn.ending, Some(GameStatus::Won));
        let text = turn.to_string();
        assert!(text.starts_with("Arthur... the Oracle stops resisting."));
        assert!(text.contains("Deep Thought"));
    }

    #[test]
    fn omens_follow_the_guess() {
        let mut s = session(3);
        let turn = s.guess(big(24)).unwrap();
        let OracleOutcome::Miss { omens, .. } = &turn.outcome else {
            panic!("expected a miss");
        };
        assert_eq!(omens, &Omen::all().to_vec());

        let turn = s.guess(big(7)).unwrap();
        assert!(turn.to_string().starts_with("Omen: Only static."));
    }

    #[test]
    fn ritual_reacts_without_deciding() {
        let mut s = session(10);
        // exponent 1, target 10: cannot slacken at the floor
        let turn = s.guess(big(10)).unwrap();
        assert!(turn.to_string().contains("The ritual intensifies."));
        assert_eq!(s.exponent(), 2);
        // exponent 2, target 100, window 10
        let turn = s.guess(big(95)).unwrap();
        assert!(turn.to_string().contains("The ritual slackens."));
        assert_eq!(s.exponent(), 1);
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[test]
    fn five_misses_lose() {
        let mut s = session(50);
        for g in 1..=4 {
            assert!(s.guess(big(g)).unwrap().ending.is_none());
        }
        let last = s.guess(big(5)).unwrap();
        assert_eq!(last.ending, Some(GameStatus::Lost(LossReason::OutOfTurns)));
        assert!(last.to_string().contains("fragments, not truth"));
        assert!(matches!(s.guess(big(42)), Err(GameError::GameOver)));
    }

    #[test]
    fn ritual_saturates_at_cap() {
        let cfg = EngineConfig::oracle().with_max_exponent(2).with_max_turns(10);
        let mut s = OracleSession::with_base(cfg, big(90), None).unwrap();
        for _ in 0..5 {
            s.guess(big(-5)).unwrap();
        }
        assert_eq!(s.exponent(), 2);
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.seeker(), "Seeker");
    }

    #[test]
    fn invalid_input_is_free() {
        let mut s = session(2);
        assert!(matches!(s.submit("the answer"), Err(GameError::InvalidGuess(_))));
        assert!(s.journal().is_empty());
        assert!(s.prompt().starts_with("Turn 1/5"));
    }

    #[test]
    fn blank_name_falls_back() {
        let s = OracleSession::new(EngineConfig::oracle(), 1, Some("   ")).unwrap();
        assert_eq!(s.seeker(), "Seeker");
    }

    #[test]
    fn ritual_base_must_be_in_range() {
        let err = OracleSession::with_base(EngineConfig::oracle(), big(101), None);
        assert!(matches!(err, Err(GameError::BaseOutOfRange(_))));
    }
}
