//! Addition question generation.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultySettings;

/// A single addition question: `operand1 + operand2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    operand1: u32,
    operand2: u32,
}

impl Question {
    /// Create a question from two operands.
    pub fn new(operand1: u32, operand2: u32) -> Self {
        Self { operand1, operand2 }
    }

    /// The number on the first card.
    pub fn operand1(&self) -> u32 {
        self.operand1
    }

    /// The number on the second card.
    pub fn operand2(&self) -> u32 {
        self.operand2
    }

    /// The correct sum.
    pub fn answer(&self) -> u32 {
        self.operand1 + self.operand2
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.operand1, self.operand2)
    }
}

/// Draw a question whose operands are at least 1 and whose sum stays within
/// `settings.max_sum`.
///
/// The first operand is drawn from `1..=max1`; the second from
/// `1..=min(max2, max_sum - operand1)`. Bounds are clamped so hand-built
/// settings never produce an empty range.
pub fn generate_question(settings: &DifficultySettings, rng: &mut StdRng) -> Question {
    let max1 = settings.max1.min(settings.max_sum.saturating_sub(1)).max(1);
    let operand1 = rng.random_range(1..=max1);

    let max2 = settings
        .max2
        .min(settings.max_sum.saturating_sub(operand1))
        .max(1);
    let operand2 = rng.random_range(1..=max2);

    let question = Question::new(operand1, operand2);
    debug_assert!(settings.max_sum < 2 || question.answer() <= settings.max_sum);
    log::debug!("generated question {question} (max sum {})", settings.max_sum);
    question
}
