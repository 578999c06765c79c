//! Scoreboard and level-up detection.
//!
//! Levels only move forward. A level-up is checked right after a correct
//! answer and fires when the correct count *equals* the threshold for the
//! current level, so each threshold triggers at most once.

use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultyLevel;
use crate::error::{QuizError, QuizResult};

/// Correct-answer counts at which the player moves up a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpThresholds {
    /// Correct answers needed to reach level 2.
    pub level2: u32,
    /// Correct answers needed to reach level 3.
    pub level3: u32,
}

impl Default for LevelUpThresholds {
    fn default() -> Self {
        Self {
            level2: 10,
            level3: 20,
        }
    }
}

impl LevelUpThresholds {
    /// Thresholds must be positive and strictly increasing.
    pub fn validate(&self) -> QuizResult<()> {
        if self.level2 == 0 {
            return Err(QuizError::InvalidThresholds(
                "level 2 threshold must be at least 1".to_string(),
            ));
        }
        if self.level3 <= self.level2 {
            return Err(QuizError::InvalidThresholds(format!(
                "level 3 threshold ({}) must be greater than level 2 threshold ({})",
                self.level3, self.level2
            )));
        }
        Ok(())
    }

    /// The threshold that leaves `level`, if any.
    pub fn for_level(&self, level: DifficultyLevel) -> Option<u32> {
        match level {
            DifficultyLevel::One => Some(self.level2),
            DifficultyLevel::Two => Some(self.level3),
            DifficultyLevel::Three => None,
        }
    }
}

/// The result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The answer was right and no level-up happened.
    Correct,
    /// The answer was wrong; carries the correct answer.
    Wrong(u32),
    /// The answer was right and the player reached a new level.
    LevelUp(DifficultyLevel),
}

impl Outcome {
    /// Whether the submitted answer was right.
    pub fn is_correct(&self) -> bool {
        !matches!(self, Self::Wrong(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correct => write!(f, "Correct!"),
            Self::Wrong(answer) => write!(f, "Wrong! The answer was {answer}"),
            Self::LevelUp(level) => write!(f, "You've reached Level {level}!"),
        }
    }
}

/// Decide whether `correct` correct answers move the player past `level`.
pub fn check_level_up(
    correct: u32,
    level: DifficultyLevel,
    thresholds: &LevelUpThresholds,
) -> Option<DifficultyLevel> {
    match thresholds.for_level(level) {
        Some(threshold) if correct == threshold => level.next(),
        _ => None,
    }
}

/// Running score and current level for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    correct: u32,
    wrong: u32,
    level: DifficultyLevel,
}

impl Scoreboard {
    /// A fresh scoreboard at the given level.
    pub fn new(level: DifficultyLevel) -> Self {
        Self {
            correct: 0,
            wrong: 0,
            level,
        }
    }

    /// A scoreboard picked up mid-session.
    pub fn resume(correct: u32, wrong: u32, level: DifficultyLevel) -> Self {
        Self {
            correct,
            wrong,
            level,
        }
    }

    /// Correct answers so far.
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Wrong answers so far.
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    /// Current difficulty level.
    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    /// Total answers submitted.
    pub fn answered(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Fraction of answers that were right, or `None` before the first answer.
    pub fn accuracy(&self) -> Option<f64> {
        match self.answered() {
            0 => None,
            n => Some(f64::from(self.correct) / f64::from(n)),
        }
    }

    /// Score `selected` against `answer`, promoting the level when a
    /// threshold is hit exactly.
    pub fn record(
        &mut self,
        selected: u32,
        answer: u32,
        thresholds: &LevelUpThresholds,
    ) -> Outcome {
        if selected != answer {
            self.wrong += 1;
            return Outcome::Wrong(answer);
        }

        self.correct += 1;
        match check_level_up(self.correct, self.level, thresholds) {
            Some(next) => {
                log::info!("level up: {} -> {next} at {} correct", self.level, self.correct);
                self.level = next;
                Outcome::LevelUp(next)
            }
            None => Outcome::Correct,
        }
    }
}
