//! Error types for the quiz engine.

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while driving a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A choice was submitted while feedback or a level-up was on screen.
    #[error("not waiting for an answer")]
    NotAwaitingAnswer,

    /// Advance was requested with no answer feedback on screen.
    #[error("no answer feedback to dismiss")]
    NoFeedbackShown,

    /// A level-up was acknowledged with no level-up on screen.
    #[error("no level-up to acknowledge")]
    NoLevelUpShown,

    /// The selected value is not one of the offered choices.
    #[error("{0} is not one of the offered choices")]
    ChoiceNotOffered(u32),

    /// Level-up thresholds are out of order or zero.
    #[error("invalid level-up thresholds: {0}")]
    InvalidThresholds(String),
}
