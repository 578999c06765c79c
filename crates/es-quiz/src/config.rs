//! Configuration for a quiz session.

use crate::difficulty::DifficultyLevel;
use crate::error::QuizResult;
use crate::scoring::LevelUpThresholds;

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// RNG seed for reproducible questions.
    pub seed: u64,
    /// Difficulty level the session starts at.
    pub starting_level: DifficultyLevel,
    /// Correct-answer counts that trigger a level-up.
    pub thresholds: LevelUpThresholds,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_level: DifficultyLevel::One,
            thresholds: LevelUpThresholds::default(),
        }
    }
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting level from its number (anything past 2 is level 3).
    pub fn with_level(mut self, level: u32) -> Self {
        self.starting_level = DifficultyLevel::from_number(level);
        self
    }

    /// Set the level-up thresholds.
    pub fn with_thresholds(mut self, level2: u32, level3: u32) -> Self {
        self.thresholds = LevelUpThresholds { level2, level3 };
        self
    }

    /// Check that the configuration describes a playable session.
    pub fn validate(&self) -> QuizResult<()> {
        self.thresholds.validate()
    }
}
