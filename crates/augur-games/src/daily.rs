//! Daily puzzle: fixed master numbers, clues earned by closeness.
//!
//! Each level allows a handful of guesses. Every wrong guess gets
//! higher/lower feedback; a close one also unlocks clue tiers, and the
//! sharpest unshown clue at the unlocked tier is revealed. Repeating a guess
//! burns the turn.

use tracing::{debug, info};

use augur_core::{
    BigInt, ClueGate, ClueState, EngineConfig, Feedback, GuessHistory, Selection,
    relative_closeness, tier_gain,
};

use crate::error::{GameError, GameResult};
use crate::game::{Game, GameReport, GameStatus, LossReason};
use crate::input::parse_guess_i64;
use crate::journal::TurnLog;
use crate::levels::{Level, daily_levels};

/// What the clue channel produced for a wrong guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueDraw {
    /// Too far off to earn a tier.
    Static,
    /// A newly revealed clue.
    Revealed(String),
    /// A tier was earned but every clue in reach was already shown.
    Exhausted,
}

/// Result of one accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyOutcome {
    /// The value was already guessed this level.
    Repeat,
    /// A wrong guess.
    Miss {
        /// Direction to the master number.
        feedback: Feedback,
        /// Tiers earned by closeness.
        gain: u32,
        /// Clue shown, if any.
        clue: ClueDraw,
    },
    /// The master number.
    Correct,
}

/// How a level ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEnd {
    /// Whether the number was found.
    pub won: bool,
    /// The level's fact.
    pub reveal: String,
    /// Category of the next level, if any.
    pub next_category: Option<String>,
}

/// One turn of the daily puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTurn {
    /// Level number (1-based).
    pub round: u32,
    /// Turn within the level (1-based).
    pub turn: u32,
    /// What the guess produced.
    pub outcome: DailyOutcome,
    /// Set when this turn closed the level.
    pub level_end: Option<LevelEnd>,
}

impl DailyTurn {
    /// Higher/lower/correct, or `None` for a repeat.
    pub fn feedback(&self) -> Option<Feedback> {
        match &self.outcome {
            DailyOutcome::Repeat => None,
            DailyOutcome::Miss { feedback, .. } => Some(*feedback),
            DailyOutcome::Correct => Some(Feedback::Correct),
        }
    }
}

impl std::fmt::Display for DailyTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            DailyOutcome::Repeat => write!(
                f,
                "You already spoke that number. The Oracle does not repeat itself."
            )?,
            DailyOutcome::Correct => write!(f, "Correct!")?,
            DailyOutcome::Miss { feedback, clue, .. } => {
                writeln!(f, "Feedback: {feedback}.")?;
                match clue {
                    ClueDraw::Static => {
                        write!(f, "Clue: Static. You're not in the right neighborhood.")?
                    }
                    ClueDraw::Revealed(text) => write!(f, "Clue: {text}")?,
                    ClueDraw::Exhausted => {
                        write!(f, "Clue: Nothing new stirs. Every clue in reach is spoken.")?
                    }
                }
            }
        }

        if let Some(end) = &self.level_end {
            if end.won {
                write!(f, "\n{}", end.reveal)?;
            } else {
                write!(f, "\nThe Oracle closes its eye.\nTruth: {}", end.reveal)?;
            }
            match &end.next_category {
                Some(category) => write!(f, "\n\nCategory: {category}")?,
                None => write!(f, "\n\nAll levels complete.")?,
            }
        }
        Ok(())
    }
}

/// A run through one or more daily levels.
pub struct DailySession {
    levels: Vec<Level>,
    config: EngineConfig,
    current: usize,
    turn: u32,
    clues: ClueState,
    history: GuessHistory,
    results: Vec<bool>,
    turns_used: u32,
    journal: TurnLog,
}

impl DailySession {
    /// Play all built-in levels.
    pub fn new(config: EngineConfig) -> GameResult<Self> {
        Self::with_levels(daily_levels(), config)
    }

    /// Play a single built-in level (0-based index).
    pub fn single(index: usize, config: EngineConfig) -> GameResult<Self> {
        let mut levels = daily_levels();
        if index >= levels.len() {
            return Err(GameError::UnknownLevel(index));
        }
        let level = levels.swap_remove(index);
        Self::with_levels(vec![level], config)
    }

    /// Play custom levels.
    pub fn with_levels(levels: Vec<Level>, config: EngineConfig) -> GameResult<Self> {
        config.validate()?;
        if levels.is_empty() {
            return Err(GameError::NoLevels);
        }
        Ok(Self {
            levels,
            config,
            current: 0,
            turn: 0,
            clues: ClueState::new(),
            history: GuessHistory::new(),
            results: Vec::new(),
            turns_used: 0,
            journal: TurnLog::new(),
        })
    }

    /// The level being played, or `None` once all are done.
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.current)
    }

    /// Clue progress in the current level.
    pub fn clue_state(&self) -> &ClueState {
        &self.clues
    }

    /// Turns consumed in the current level.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Number of levels won so far.
    pub fn levels_won(&self) -> usize {
        self.results.iter().filter(|won| **won).count()
    }

    /// The turn journal.
    pub fn journal(&self) -> &TurnLog {
        &self.journal
    }

    /// Play one guess against the current level.
    pub fn guess(&mut self, value: i64) -> GameResult<DailyTurn> {
        let Some(level) = self.levels.get(self.current) else {
            return Err(GameError::GameOver);
        };

        self.turn += 1;
        self.turns_used += 1;
        let turn = self.turn;
        let round = u32::try_from(self.current + 1).unwrap_or(u32::MAX);

        let guess = BigInt::from(value);
        let fresh = self.history.record(&guess, turn);

        let outcome = if self.config.penalize_repeats && !fresh {
            debug!(round, turn, guess = value, "repeated guess");
            DailyOutcome::Repeat
        } else if value == level.master_number {
            DailyOutcome::Correct
        } else {
            let master = BigInt::from(level.master_number);
            let feedback = Feedback::compare(&guess, &master);
            let rel = relative_closeness(&guess, &master);
            let distance = (i128::from(value) - i128::from(level.master_number)).unsigned_abs();
            let gain = tier_gain(rel, &BigInt::from(distance), &self.config.tiers);

            let clue = if gain == 0 {
                ClueDraw::Static
            } else {
                let tier = self.clues.advance(gain, level.clues.len());
                match self
                    .clues
                    .draw(&level.clues, ClueGate::Tier(tier), Selection::HighestLevel)
                {
                    Some(text) => ClueDraw::Revealed(text),
                    None => ClueDraw::Exhausted,
                }
            };

            debug!(
                round,
                turn,
                guess = value,
                closeness = rel,
                gain,
                tier = self.clues.unlocked_tier(),
                "daily guess"
            );
            DailyOutcome::Miss {
                feedback,
                gain,
                clue,
            }
        };

        let won = outcome == DailyOutcome::Correct;
        let level_end = if won || turn >= self.config.max_turns {
            Some(self.finish_level(won))
        } else {
            None
        };

        let result = DailyTurn {
            round,
            turn,
            outcome,
            level_end,
        };
        self.journal
            .record(round, turn, value.to_string(), result.to_string());
        Ok(result)
    }

    fn finish_level(&mut self, won: bool) -> LevelEnd {
        let reveal = self.levels[self.current].reveal.clone();
        info!(round = self.current + 1, won, turns = self.turn, "level finished");

        self.results.push(won);
        self.current += 1;
        self.turn = 0;
        self.clues = ClueState::new();
        self.history.clear();

        LevelEnd {
            won,
            reveal,
            next_category: self.current_level().map(|l| l.category.clone()),
        }
    }
}

impl Game for DailySession {
    fn name(&self) -> &'static str {
        "daily"
    }

    fn intro(&self) -> String {
        let mut out = format!(
            "DAILY NUMBER ORACLE\n{} level(s), {} guesses each. Clues must be earned by closeness.\n\
             Feedback is always Higher/Lower. Repeating a guess burns a turn.",
            self.levels.len(),
            self.config.max_turns
        );
        if let Some(level) = self.current_level() {
            out.push_str(&format!("\n\nCategory: {}", level.category));
        }
        out
    }

    fn prompt(&self) -> String {
        format!("Guess {}/{}: ", self.turn + 1, self.config.max_turns)
    }

    fn submit(&mut self, input: &str) -> GameResult<String> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let value = parse_guess_i64(input)?;
        self.guess(value).map(|turn| turn.to_string())
    }

    fn status(&self) -> GameStatus {
        if self.current < self.levels.len() {
            GameStatus::InProgress
        } else if self.results.iter().all(|won| *won) {
            GameStatus::Won
        } else {
            GameStatus::Lost(LossReason::OutOfTurns)
        }
    }

    fn report(&self) -> GameReport {
        let reveals: Vec<String> = self
            .levels
            .iter()
            .take(self.results.len())
            .map(|l| l.reveal.clone())
            .collect();
        let mut summary = format!(
            "{}/{} level(s) divined",
            self.levels_won(),
            self.levels.len()
        );
        for reveal in reveals {
            summary.push_str(&format!("\n{reveal}"));
        }
        GameReport {
            game: self.name().to_string(),
            status: self.status(),
            turns_used: self.turns_used,
            summary,
            journal: self.journal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_level() -> DailySession {
        DailySession::single(0, EngineConfig::daily()).unwrap()
    }

    #[test]
    fn win_on_fourth_guess() {
        let mut s = answer_level();
        let feedback: Vec<Option<Feedback>> = [10, 30, 40, 42]
            .into_iter()
            .map(|g| s.guess(g).unwrap().feedback())
            .collect();
        assert_eq!(
            feedback,
            vec![
                Some(Feedback::Higher),
                Some(Feedback::Higher),
                Some(Feedback::Higher),
                Some(Feedback::Correct),
            ]
        );
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.report().turns_used, 4);
        assert!(matches!(s.guess(1), Err(GameError::GameOver)));
    }

    #[test]
    fn far_guesses_are_static() {
        let mut s = answer_level();
        let turn = s.guess(10).unwrap();
        assert_eq!(
            turn.outcome,
            DailyOutcome::Miss {
                feedback: Feedback::Higher,
                gain: 0,
                clue: ClueDraw::Static,
            }
        );
        assert_eq!(s.clue_state().unlocked_tier(), 0);
    }

    #[test]
    fn close_guess_unlocks_tier_clue() {
        let mut s = answer_level();
        // 40 vs 42: closeness 0.952 -> +2 tiers
        let turn = s.guess(40).unwrap();
        let DailyOutcome::Miss { gain, clue, .. } = turn.outcome else {
            panic!("expected a miss");
        };
        assert_eq!(gain, 2);
        assert_eq!(
            clue,
            ClueDraw::Revealed("It is not a round number, but it's oddly satisfying.".into())
        );
        assert_eq!(s.clue_state().unlocked_tier(), 2);
    }

    #[test]
    fn mercy_on_small_targets() {
        let mut levels = vec![Level::new(10, "Tiny", &["a", "b", "c"], "ten")];
        levels.push(Level::new(11, "Next", &["x"], "eleven"));
        let mut s = DailySession::with_levels(levels, EngineConfig::daily()).unwrap();
        // 7 vs 10: closeness 0.7, distance 3 -> mercy
        let turn = s.guess(7).unwrap();
        let DailyOutcome::Miss { gain, clue, .. } = turn.outcome else {
            panic!("expected a miss");
        };
        assert_eq!(gain, 1);
        assert_eq!(clue, ClueDraw::Revealed("b".into()));
    }

    #[test]
    fn repeat_burns_turn_without_tier() {
        let mut s = answer_level();
        s.guess(41).unwrap();
        let tier = s.clue_state().unlocked_tier();
        assert!(tier > 0);

        let turn = s.guess(41).unwrap();
        assert_eq!(turn.outcome, DailyOutcome::Repeat);
        assert_eq!(turn.turn, 2);
        assert_eq!(s.turn(), 2);
        assert_eq!(s.clue_state().unlocked_tier(), tier);
    }

    #[test]
    fn clues_never_repeat_at_top_tier() {
        let mut s = answer_level();
        let mut shown = Vec::new();
        for g in [41, 43, 44, 40] {
            let turn = s.guess(g).unwrap();
            if let DailyOutcome::Miss {
                clue: ClueDraw::Revealed(text),
                ..
            } = turn.outcome
            {
                assert!(!shown.contains(&text), "{text} shown twice");
                shown.push(text);
            }
        }
        assert!(shown.len() >= 3);
    }

    #[test]
    fn exhausting_turns_loses_level_and_advances() {
        let mut s = DailySession::new(EngineConfig::daily()).unwrap();
        for g in 1..=4 {
            assert!(s.guess(g).unwrap().level_end.is_none());
        }
        let last = s.guess(5).unwrap();
        let end = last.level_end.clone().unwrap();
        assert!(!end.won);
        assert_eq!(end.next_category.as_deref(), Some("Science / Space"));
        assert!(last.to_string().contains("The Oracle closes its eye."));

        assert_eq!(s.current_level().unwrap().master_number, 1969);
        assert_eq!(s.turn(), 0);
        assert_eq!(s.clue_state().unlocked_tier(), 0);
        // history is per level
        assert_ne!(s.guess(1).unwrap().outcome, DailyOutcome::Repeat);
    }

    #[test]
    fn all_levels_status() {
        let mut s = DailySession::new(EngineConfig::daily()).unwrap();
        for number in [42, 1969, 1066, 299_792_458] {
            s.guess(number).unwrap();
        }
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.levels_won(), 4);
        assert!(s.report().summary.starts_with("4/4"));
    }

    #[test]
    fn one_lost_level_loses_the_run() {
        let mut s = DailySession::single(1, EngineConfig::daily().with_max_turns(1)).unwrap();
        s.guess(2000).unwrap();
        assert_eq!(s.status(), GameStatus::Lost(LossReason::OutOfTurns));
    }

    #[test]
    fn invalid_input_costs_nothing() {
        let mut s = answer_level();
        assert!(matches!(s.submit("forty"), Err(GameError::InvalidGuess(_))));
        assert!(matches!(
            s.submit("99999999999999999999"),
            Err(GameError::InvalidGuess(_))
        ));
        assert_eq!(s.turn(), 0);
        assert!(s.journal().is_empty());
        assert_eq!(s.prompt(), "Guess 1/5: ");
    }

    #[test]
    fn submit_renders_feedback() {
        let mut s = answer_level();
        let out = s.submit("10").unwrap();
        assert!(out.starts_with("Feedback: Higher."));
        let out = s.submit("42").unwrap();
        assert!(out.starts_with("Correct!"));
        assert!(out.contains("All levels complete."));
        assert_eq!(s.journal().len(), 2);
    }

    #[test]
    fn unknown_level_rejected() {
        assert!(matches!(
            DailySession::single(9, EngineConfig::daily()),
            Err(GameError::UnknownLevel(9))
        ));
        assert!(matches!(
            DailySession::with_levels(Vec::new(), EngineConfig::daily()),
            Err(GameError::NoLevels)
        ));
    }
}
