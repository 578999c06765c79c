//! Question, scoring and level-up state machine for the Eggsum flashcard quiz.
//!
//! Each turn shows two egg cards, offers two candidate sums and scores the
//! player's pick. Correct answers push the player through three difficulty
//! levels. All rendering goes through the [`QuizDisplay`] sink so the logic
//! runs the same under a terminal, a GUI or a test harness.

pub mod card;
pub mod choices;
pub mod config;
pub mod difficulty;
pub mod display;
pub mod error;
pub mod question;
pub mod scoring;
pub mod session;

pub use choices::{ChoiceSet, generate_choices};
pub use config::QuizConfig;
pub use difficulty::{DifficultyLevel, DifficultySettings};
pub use display::{DisplayEvent, Feedback, QuizDisplay, RecordingDisplay};
pub use error::{QuizError, QuizResult};
pub use question::{Question, generate_question};
pub use scoring::{LevelUpThresholds, Outcome, Scoreboard, check_level_up};
pub use session::{Phase, QuizEvent, QuizSession, SessionSnapshot};
