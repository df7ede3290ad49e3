//! Ritual of powers: escalating targets with clues gated by exponent band.
//!
//! The target is `base^exponent` for a secret base. After every miss the
//! ritual moves, and one unshown clue about the base is drawn at random from
//! those the new exponent permits. Keeping the exponent low unlocks the
//! sharper clues.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use augur_core::{
    BigInt, Clue, ClueGate, CluePool, ClueState, EngineConfig, Escalation, Feedback, GuessHistory,
    RitualEvaluation, Selection,
};

use crate::error::{GameError, GameResult};
use crate::game::{Game, GameReport, GameStatus, LossReason};
use crate::gliding::{MAX_BASE, MIN_BASE, check_base};
use crate::input::parse_guess;
use crate::journal::TurnLog;

/// Clues about a base in `MIN_BASE..=MAX_BASE`, weakest (always
/// permitted) to sharpest.
fn base_clues(base: u32) -> CluePool {
    let mut pool = CluePool::new();

    let parity = if base % 2 == 0 { "even" } else { "odd" };
    pool.push(Clue::new(format!("The base is {parity}."), 0));

    let divisors = (1..=base).filter(|d| base % d == 0).count();
    pool.push(Clue::new(format!("The base has {divisors} divisor(s)."), 1));

    let half = if base <= MAX_BASE / 2 {
        format!("The base is at most {}.", MAX_BASE / 2)
    } else {
        format!("The base is above {}.", MAX_BASE / 2)
    };
    pool.push(Clue::new(half, 2));

    let wide = u64::from(base);
    let square = (1..=wide).take_while(|r| r * r <= wide).any(|r| r * r == wide);
    let square = if square {
        "The base is a perfect square."
    } else {
        "The base is not a perfect square."
    };
    pool.push(Clue::new(square, 3));

    pool.push(Clue::new(format!("The base ends in {}.", base % 10), 5));

    let low = (base.saturating_sub(1) / 10) * 10 + 1;
    pool.push(Clue::new(
        format!("The base lies between {low} and {}.", low + 9),
        6,
    ));

    pool
}

/// What one guess did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RitualOutcome {
    /// The current target.
    Correct {
        /// The exponent it was hit at.
        exponent: u32,
        /// The target value.
        target: BigInt,
    },
    /// A wrong guess.
    Miss {
        /// Direction to the current target.
        feedback: Feedback,
        /// The ritual transition.
        eval: RitualEvaluation,
        /// A clue drawn from the new band, or `None` if nothing new is in
        /// reach.
        clue: Option<String>,
    },
    /// A repeated value. Burns the turn.
    Repeat,
}

/// One turn of the ritual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RitualTurn {
    /// Turn number (1-based).
    pub turn: u32,
    /// What happened.
    pub outcome: RitualOutcome,
    /// Final status when this turn ended the game.
    pub ending: Option<GameStatus>,
    /// The secret base, once the game is over.
    pub revealed_base: Option<u32>,
}

impl std::fmt::Display for RitualTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            RitualOutcome::Correct { exponent, target } => {
                write!(f, "The ritual completes at exponent {exponent}: {target}.")?;
            }
            RitualOutcome::Repeat => {
                write!(f, "That number was already offered. The turn is spent.")?;
            }
            RitualOutcome::Miss {
                feedback,
                eval,
                clue,
            } => {
                writeln!(f, "Feedback: {feedback}.")?;
                if eval.within_tolerance {
                    writeln!(f, "The ritual slackens to exponent {}.", eval.next_exponent)?;
                } else {
                    writeln!(f, "The ritual climbs to exponent {}.", eval.next_exponent)?;
                }
                match clue {
                    Some(text) => write!(f, "Clue: {text}")?,
                    None => write!(f, "No new clue surfaces at this depth.")?,
                }
            }
        }

        match self.ending {
            Some(GameStatus::Lost(LossReason::CapExceeded)) => {
                write!(f, "\nThe ritual breaks its bounds.")?;
            }
            Some(GameStatus::Lost(LossReason::OutOfTurns)) => {
                write!(f, "\nThe ritual fades. Out of turns.")?;
            }
            _ => {}
        }
        if let Some(base) = self.revealed_base {
            write!(f, "\nBase was {base}.")?;
        }
        Ok(())
    }
}

/// A banded-clue ritual game.
pub struct RitualSession {
    config: EngineConfig,
    base: u32,
    escalation: Escalation,
    pool: CluePool,
    clues: ClueState,
    history: GuessHistory,
    rng: StdRng,
    turn: u32,
    status: GameStatus,
    journal: TurnLog,
}

impl RitualSession {
    /// Start a game; `seed` drives both the base and the clue draws.
    pub fn new(config: EngineConfig, seed: u64) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = rng.random_range(MIN_BASE..=MAX_BASE);
        Self::build(config, base, rng)
    }

    /// Start a game with a known base; `seed` drives the clue draws.
    pub fn with_base(config: EngineConfig, base: u32, seed: u64) -> GameResult<Self> {
        Self::build(config, base, StdRng::seed_from_u64(seed))
    }

    fn build(config: EngineConfig, base: u32, rng: StdRng) -> GameResult<Self> {
        config.validate()?;
        check_base(&BigInt::from(base))?;
        Ok(Self {
            escalation: Escalation::new(config.max_exponent),
            config,
            base,
            pool: base_clues(base),
            clues: ClueState::new(),
            history: GuessHistory::new(),
            rng,
            turn: 0,
            status: GameStatus::InProgress,
            journal: TurnLog::new(),
        })
    }

    /// Current exponent.
    pub fn exponent(&self) -> u32 {
        self.escalation.exponent()
    }

    /// The target the next guess must hit.
    pub fn current_target(&self) -> BigInt {
        self.escalation.target(&BigInt::from(self.base))
    }

    /// Clues shown so far.
    pub fn clue_state(&self) -> &ClueState {
        &self.clues
    }

    /// The turn journal.
    pub fn journal(&self) -> &TurnLog {
        &self.journal
    }

    /// Play one guess.
    pub fn guess(&mut self, value: BigInt) -> GameResult<RitualTurn> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        self.turn += 1;
        let turn = self.turn;
        let exponent = self.exponent();
        let target = self.current_target();
        let fresh = self.history.record(&value, turn);

        // A hit wins even if the value missed at an earlier exponent.
        let outcome = if value == target {
            self.status = GameStatus::Won;
            RitualOutcome::Correct { exponent, target }
        } else if self.config.penalize_repeats && !fresh {
            RitualOutcome::Repeat
        } else {
            let feedback = Feedback::compare(&value, &target);
            let eval = self
                .escalation
                .step(&value, &target, &self.config.tolerance);

            let clue = if eval.cap_exceeded && self.config.end_on_cap {
                self.status = GameStatus::Lost(LossReason::CapExceeded);
                None
            } else {
                let gate = ClueGate::ExponentBand {
                    exponent: eval.next_exponent,
                    max_exponent: self.escalation.max_exponent(),
                };
                self.clues
                    .draw(&self.pool, gate, Selection::Random(&mut self.rng))
            };
            debug!(
                turn,
                exponent,
                next = eval.next_exponent,
                clue = clue.is_some(),
                "ritual transition"
            );
            RitualOutcome::Miss {
                feedback,
                eval,
                clue,
            }
        };

        if !self.status.is_over() && turn >= self.config.max_turns {
            self.status = GameStatus::Lost(LossReason::OutOfTurns);
        }

        let ending = self.status.is_over().then_some(self.status);
        if ending.is_some() {
            info!(turns = turn, status = %self.status, "ritual finished");
        }
        let result = RitualTurn {
            turn,
            outcome,
            ending,
            revealed_base: ending.map(|_| self.base),
        };
        self.journal.record(1, turn, value.to_string(), result.to_string());
        Ok(result)
    }
}

impl Game for RitualSession {
    fn name(&self) -> &'static str {
        "ritual"
    }

    fn intro(&self) -> String {
        format!(
            "RITUAL OF POWERS\n\
             A secret base between {MIN_BASE} and {MAX_BASE}; each turn the target is base^exponent.\n\
             Close misses lower the exponent, and a lower exponent unlocks sharper clues.\n\
             {} turns. Pushing past exponent {} ends the ritual.",
            self.config.max_turns, self.config.max_exponent
        )
    }

    fn prompt(&self) -> String {
        format!(
            "Turn {}/{} | Exponent: {}\nOffer a number: ",
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
        let summary = if self.status.is_over() {
            format!(
                "Base was {}; {} clue(s) revealed.",
                self.base,
                self.clues.used().len()
            )
        } else {
            format!(
                "Exponent {}; {} clue(s) revealed.",
                self.exponent(),
                self.clues.used().len()
            )
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
