//! The display sink the session renders through.

use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultyLevel;

/// Feedback shown after a non-level-up answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// The pick was right.
    Correct,
    /// The pick was wrong; carries the correct answer.
    Wrong(u32),
}

/// Receives every visible change a session makes.
pub trait QuizDisplay {
    /// Show the two cards of a new question.
    fn render_question(&mut self, operand1: u32, operand2: u32);

    /// Show the answer buttons, in display order.
    fn render_choices(&mut self, choices: [u32; 2]);

    /// Show the running score.
    fn render_scores(&mut self, correct: u32, wrong: u32);

    /// Show the current level.
    fn render_level(&mut self, level: DifficultyLevel);

    /// Show correct/wrong feedback for the last answer.
    fn render_feedback(&mut self, feedback: Feedback);

    /// Show the level-up celebration.
    fn render_level_up(&mut self, level: DifficultyLevel);
}

/// One call made on a [`QuizDisplay`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayEvent {
    /// `render_question`
    Question(u32, u32),
    /// `render_choices`
    Choices([u32; 2]),
    /// `render_scores`
    Scores {
        /// Correct count.
        correct: u32,
        /// Wrong count.
        wrong: u32,
    },
    /// `render_level`
    Level(DifficultyLevel),
    /// `render_feedback`
    Feedback(Feedback),
    /// `render_level_up`
    LevelUp(DifficultyLevel),
}

/// A display that records every call, for tests and headless play.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl QuizDisplay for RecordingDisplay {
    fn render_question(&mut self, operand1: u32, operand2: u32) {
        self.events.push(DisplayEvent::Question(operand1, operand2));
    }

    fn render_choices(&mut self, choices: [u32; 2]) {
        self.events.push(DisplayEvent::Choices(choices));
    }

    fn render_scores(&mut self, correct: u32, wrong: u32) {
        self.events.push(DisplayEvent::Scores { correct, wrong });
    }

    fn render_level(&mut self, level: DifficultyLevel) {
        self.events.push(DisplayEvent::Level(level));
    }

    fn render_feedback(&mut self, feedback: Feedback) {
        self.events.push(DisplayEvent::Feedback(feedback));
    }

    fn render_level_up(&mut self, level: DifficultyLevel) {
        self.events.push(DisplayEvent::LevelUp(level));
    }
}
