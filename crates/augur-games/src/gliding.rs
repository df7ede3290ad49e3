//! Exponent guessing with a gliding tolerance.
//!
//! A secret base is drawn once; the target each turn is `base^exponent`.
//! A wrong guess that lands inside the close window lowers the exponent,
//! anything else raises it. Pushing the exponent past its ceiling ends the
//! game when the configuration says so.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use augur_core::{
    BigInt, EngineConfig, Escalation, Feedback, GuessHistory, RitualEvaluation, gliding_tolerance,
};

use crate::error::{GameError, GameResult};
use crate::game::{Game, GameReport, GameStatus, LossReason};
use crate::input::parse_guess;
use crate::journal::TurnLog;

/// Smallest secret base.
pub const MIN_BASE: u32 = 1;
/// Largest secret base.
pub const MAX_BASE: u32 = 100;

const DEFAULT_PLAYER: &str = "Player";

/// Draw a secret base in `MIN_BASE..=MAX_BASE`.
pub fn draw_base(rng: &mut StdRng) -> BigInt {
    BigInt::from(rng.random_range(MIN_BASE..=MAX_BASE))
}

/// Reject a base outside `MIN_BASE..=MAX_BASE`.
pub fn check_base(base: &BigInt) -> GameResult<()> {
    if *base < BigInt::from(MIN_BASE) || *base > BigInt::from(MAX_BASE) {
        return Err(GameError::BaseOutOfRange(base.to_string()));
    }
    Ok(())
}

/// What a guess did to the ritual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlidingOutcome {
    /// The current target.
    Correct {
        /// The exponent it was hit at.
        exponent: u32,
        /// The target value.
        target: BigInt,
    },
    /// A wrong guess and the resulting transition.
    Miss {
        /// Direction to the current target.
        feedback: Feedback,
        /// The exponent before the transition.
        exponent: u32,
        /// The transition.
        eval: RitualEvaluation,
    },
    /// A repeated value, when repeats are penalised.
    Repeat,
}

/// One turn of the gliding game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlidingTurn {
    /// Turn number (1-based).
    pub turn: u32,
    /// What happened.
    pub outcome: GlidingOutcome,
    /// Final status when this turn ended the game.
    pub ending: Option<GameStatus>,
    /// The secret base, once the game is over.
    pub revealed_base: Option<BigInt>,
}

impl std::fmt::Display for GlidingTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            GlidingOutcome::Correct { exponent, target } => {
                write!(f, "Correct! You win! Exponent was {exponent}, target was {target}.")?;
            }
            GlidingOutcome::Repeat => write!(f, "You already tried that number. Turn lost.")?,
            GlidingOutcome::Miss { feedback, eval, .. } => {
                if eval.within_tolerance {
                    write!(
                        f,
                        "Wrong, but close (|guess-target|={} <= {}). Exponent drops to {}.",
                        eval.diff, eval.tolerance, eval.next_exponent
                    )?;
                } else {
                    write!(
                        f,
                        "Wrong, not close enough (|guess-target|={}, window {}). Exponent rises to {}.",
                        eval.diff, eval.tolerance, eval.next_exponent
                    )?;
                }
                write!(f, "\nFeedback: {feedback}.")?;
            }
        }

        match self.ending {
            Some(GameStatus::Lost(LossReason::CapExceeded)) => {
                write!(f, "\nExponent hit the cap. Game over!")?;
            }
            Some(GameStatus::Lost(LossReason::OutOfTurns)) => {
                write!(f, "\nOut of turns. Game over!")?;
            }
            _ => {}
        }
        if let Some(base) = &self.revealed_base {
            write!(f, "\nBase was {base}.")?;
        }
        Ok(())
    }
}

/// A gliding-tolerance exponent game.
pub struct GlidingSession {
    config: EngineConfig,
    player: String,
    base: BigInt,
    escalation: Escalation,
    history: GuessHistory,
    turn: u32,
    status: GameStatus,
    journal: TurnLog,
}

impl GlidingSession {
    /// Start a game with a base drawn from `seed`.
    pub fn new(config: EngineConfig, seed: u64) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = draw_base(&mut rng);
        Self::with_base(config, base)
    }

    /// Start a game with a known base.
    pub fn with_base(config: EngineConfig, base: BigInt) -> GameResult<Self> {
        config.validate()?;
        check_base(&base)?;
        let escalation = Escalation::new(config.max_exponent);
        Ok(Self {
            config,
            player: DEFAULT_PLAYER.to_string(),
            base,
            escalation,
            history: GuessHistory::new(),
            turn: 0,
            status: GameStatus::InProgress,
            journal: TurnLog::new(),
        })
    }

    /// Set the player's name. Blank names keep the default.
    pub fn with_player(mut self, name: Option<&str>) -> Self {
        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            self.player = name.to_string();
        }
        self
    }

    /// The player's name.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Current exponent.
    pub fn exponent(&self) -> u32 {
        self.escalation.exponent()
    }

    /// The target the next guess must hit.
    pub fn current_target(&self) -> BigInt {
        self.escalation.target(&self.base)
    }

    /// The close window for the current target.
    pub fn current_tolerance(&self) -> BigInt {
        gliding_tolerance(
            &self.current_target(),
            self.exponent(),
            &self.config.tolerance,
        )
    }

    /// Turns consumed.
    pub fn turns_used(&self) -> u32 {
        self.turn
    }

    /// The turn journal.
    pub fn journal(&self) -> &TurnLog {
        &self.journal
    }

    /// Play one guess.
    pub fn guess(&mut self, value: BigInt) -> GameResult<GlidingTurn> {
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
            GlidingOutcome::Correct { exponent, target }
        } else if self.config.penalize_repeats && !fresh {
            GlidingOutcome::Repeat
        } else {
            let feedback = Feedback::compare(&value, &target);
            let eval = self
                .escalation
                .step(&value, &target, &self.config.tolerance);
            debug!(
                turn,
                exponent,
                next = eval.next_exponent,
                within = eval.within_tolerance,
                "gliding transition"
            );
            if eval.cap_exceeded && self.config.end_on_cap {
                self.status = GameStatus::Lost(LossReason::CapExceeded);
            }
            GlidingOutcome::Miss {
                feedback,
                exponent,
                eval,
            }
        };

        if !self.status.is_over() && turn >= self.config.max_turns {
            self.status = GameStatus::Lost(LossReason::OutOfTurns);
        }

        let ending = self.status.is_over().then_some(self.status);
        if ending.is_some() {
            info!(turns = turn, status = %self.status, "gliding game finished");
        }
        let result = GlidingTurn {
            turn,
            outcome,
            ending,
            revealed_base: ending.map(|_| self.base.clone()),
        };
        self.journal.record(1, turn, value.to_string(), result.to_string());
        Ok(result)
    }
}

impl Game for GlidingSession {
    fn name(&self) -> &'static str {
        "gliding"
    }

    fn intro(&self) -> String {
        format!(
            "EXPONENT GUESSING GAME (gliding tolerance)\n\
             Alright {}!\n\
             The base is between {MIN_BASE} and {MAX_BASE}. The target each turn is base^exponent.\n\
             Wrong but close to the current target: exponent drops by 1 (min 1).\n\
             Otherwise the exponent rises by 1. {} turns, exponent cap {}.",
            self.player, self.config.max_turns, self.config.max_exponent
        )
    }

    fn prompt(&self) -> String {
        format!(
            "Turn {} | Exponent: {} (close window: ±{})\nYour guess: ",
            self.turn + 1,
            self.exponent(),
            self.current_tolerance()
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
                "Base was {}, final exponent {}.",
                self.base,
                self.exponent()
            )
        } else {
            format!("Exponent {} after {} turn(s).", self.exponent(), self.turn)
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
