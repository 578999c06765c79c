//! Quiz session: the turn controller.
//!
//! `QuizSession` owns the scoreboard, the current question and its choices,
//! and the RNG. It accepts one input at a time and only generates a new
//! question when the player dismisses the feedback (or level-up) for the
//! previous one.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::choices::{ChoiceSet, generate_choices};
use crate::config::QuizConfig;
use crate::difficulty::DifficultyLevel;
use crate::display::{Feedback, QuizDisplay};
use crate::error::{QuizError, QuizResult};
use crate::question::{Question, generate_question};
use crate::scoring::{LevelUpThresholds, Outcome, Scoreboard};

/// What the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A question is on screen and a choice is expected.
    AwaitingAnswer,
    /// Correct/wrong feedback is on screen until the player advances.
    ShowingFeedback(Feedback),
    /// The level-up celebration is on screen until acknowledged.
    ShowingLevelUp(DifficultyLevel),
}

/// Discrete inputs from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    /// The player picked one of the offered answers.
    ChoiceSelected(u32),
    /// The player dismissed answer feedback.
    AdvanceRequested,
    /// The player dismissed the level-up celebration.
    LevelUpAcknowledged,
}

/// Serializable view of a session at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// 1-based turn number.
    pub turn: u32,
    /// Current level.
    pub level: DifficultyLevel,
    /// Correct answers so far.
    pub correct: u32,
    /// Wrong answers so far.
    pub wrong: u32,
    /// The question on screen.
    pub question: Question,
    /// The offered choices, in display order.
    pub choices: [u32; 2],
    /// What the session is waiting for.
    pub phase: Phase,
}

/// An interactive quiz session.
pub struct QuizSession {
    scores: Scoreboard,
    starting_level: DifficultyLevel,
    thresholds: LevelUpThresholds,
    question: Question,
    choices: ChoiceSet,
    phase: Phase,
    turn: u32,
    rng: StdRng,
}

impl QuizSession {
    /// Create a session and draw its first question.
    ///
    /// Nothing is rendered until [`start`](Self::start) is called.
    pub fn new(config: QuizConfig) -> QuizResult<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let (question, choices) = draw_turn(config.starting_level, &mut rng);

        Ok(Self {
            scores: Scoreboard::new(config.starting_level),
            starting_level: config.starting_level,
            thresholds: config.thresholds,
            question,
            choices,
            phase: Phase::AwaitingAnswer,
            turn: 1,
            rng,
        })
    }

    /// The scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// The current level.
    pub fn level(&self) -> DifficultyLevel {
        self.scores.level()
    }

    /// The level-up thresholds in effect.
    pub fn thresholds(&self) -> &LevelUpThresholds {
        &self.thresholds
    }

    /// The question on screen.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// The choices on screen.
    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    /// What the session is waiting for.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 1-based turn number.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            turn: self.turn,
            level: self.scores.level(),
            correct: self.scores.correct(),
            wrong: self.scores.wrong(),
            question: self.question,
            choices: self.choices.options(),
            phase: self.phase,
        }
    }

    /// Render the initial board: level, scores and the first question.
    pub fn start(&self, display: &mut dyn QuizDisplay) {
        display.render_level(self.scores.level());
        display.render_scores(self.scores.correct(), self.scores.wrong());
        self.present(display);
    }

    /// Throw away all progress and begin again at the starting level.
    pub fn restart(&mut self, display: &mut dyn QuizDisplay) {
        self.scores = Scoreboard::new(self.starting_level);
        self.turn = 0;
        self.next_turn();
        self.start(display);
    }

    /// Dispatch a player input. Returns the outcome for a submitted choice.
    pub fn handle(
        &mut self,
        event: QuizEvent,
        display: &mut dyn QuizDisplay,
    ) -> QuizResult<Option<Outcome>> {
        match event {
            QuizEvent::ChoiceSelected(value) => self.submit(value, display).map(Some),
            QuizEvent::AdvanceRequested => self.advance(display).map(|_| None),
            QuizEvent::LevelUpAcknowledged => self.acknowledge_level_up(display).map(|_| None),
        }
    }

    /// Score the player's pick.
    pub fn submit(&mut self, selected: u32, display: &mut dyn QuizDisplay) -> QuizResult<Outcome> {
        if self.phase != Phase::AwaitingAnswer {
            return Err(QuizError::NotAwaitingAnswer);
        }
        if !self.choices.contains(selected) {
            return Err(QuizError::ChoiceNotOffered(selected));
        }

        let outcome = self
            .scores
            .record(selected, self.question.answer(), &self.thresholds);
        display.render_scores(self.scores.correct(), self.scores.wrong());

        self.phase = match outcome {
            Outcome::LevelUp(level) => {
                display.render_level(level);
                display.render_level_up(level);
                Phase::ShowingLevelUp(level)
            }
            Outcome::Correct => {
                display.render_feedback(Feedback::Correct);
                Phase::ShowingFeedback(Feedback::Correct)
            }
            Outcome::Wrong(answer) => {
                display.render_feedback(Feedback::Wrong(answer));
                Phase::ShowingFeedback(Feedback::Wrong(answer))
            }
        };

        Ok(outcome)
    }

    /// Dismiss answer feedback and show the next question.
    pub fn advance(&mut self, display: &mut dyn QuizDisplay) -> QuizResult<()> {
        if !matches!(self.phase, Phase::ShowingFeedback(_)) {
            return Err(QuizError::NoFeedbackShown);
        }
        self.next_turn();
        self.present(display);
        Ok(())
    }

    /// Dismiss the level-up celebration and show the next question.
    pub fn acknowledge_level_up(&mut self, display: &mut dyn QuizDisplay) -> QuizResult<()> {
        if !matches!(self.phase, Phase::ShowingLevelUp(_)) {
            return Err(QuizError::NoLevelUpShown);
        }
        self.next_turn();
        self.present(display);
        Ok(())
    }

    fn next_turn(&mut self) {
        let (question, choices) = draw_turn(self.scores.level(), &mut self.rng);
        self.question = question;
        self.choices = choices;
        self.phase = Phase::AwaitingAnswer;
        self.turn += 1;
    }

    fn present(&self, display: &mut dyn QuizDisplay) {
        display.render_question(self.question.operand1(), self.question.operand2());
        display.render_choices(self.choices.options());
    }
}

/// Resolve the level's bounds, then draw a question and its choices.
fn draw_turn(level: DifficultyLevel, rng: &mut StdRng) -> (Question, ChoiceSet) {
    let settings = level.settings();
    let question = generate_question(&settings, rng);
    let choices = generate_choices(question.answer(), &settings, rng);
    (question, choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayEvent, RecordingDisplay};

    fn test_session() -> QuizSession {
        QuizSession::new(QuizConfig::default()).unwrap()
    }

    fn wrong_choice(s: &QuizSession) -> u32 {
        let answer = s.question().answer();
        let [a, b] = s.choices().options();
        if a == answer { b } else { a }
    }

    /// Answer correctly and dismiss whatever is shown; returns the outcome.
    fn play_correct(s: &mut QuizSession, d: &mut RecordingDisplay) -> Outcome {
        let outcome = s.submit(s.question().answer(), d).unwrap();
        match s.phase() {
            Phase::ShowingLevelUp(_) => s.acknowledge_level_up(d).unwrap(),
            _ => s.advance(d).unwrap(),
        }
        outcome
    }

    #[test]
    fn create_session() {
        let s = test_session();
        assert_eq!(s.level(), DifficultyLevel::One);
        assert_eq!(s.turn(), 1);
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        assert!(s.choices().contains(s.question().answer()));
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = QuizConfig::default().with_thresholds(5, 2);
        assert!(matches!(
            QuizSession::new(cfg),
            Err(QuizError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn start_renders_board() {
        let s = test_session();
        let mut d = RecordingDisplay::new();
        s.start(&mut d);
        let q = s.question();
        assert_eq!(
            d.events(),
            &[
                DisplayEvent::Level(DifficultyLevel::One),
                DisplayEvent::Scores {
                    correct: 0,
                    wrong: 0
                },
                DisplayEvent::Question(q.operand1(), q.operand2()),
                DisplayEvent::Choices(s.choices().options()),
            ]
        );
    }

    #[test]
    fn correct_answer_shows_feedback() {
        let mut s = test_session();
        let mut d = RecordingDisplay::new();
        let outcome = s.submit(s.question().answer(), &mut d).unwrap();
        assert_eq!(outcome, Outcome::Correct);
        assert_eq!(s.phase(), Phase::ShowingFeedback(Feedback::Correct));
        assert_eq!(
            d.take(),
            vec![
                DisplayEvent::Scores {
                    correct: 1,
                    wrong: 0
                },
                DisplayEvent::Feedback(Feedback::Correct),
            ]
        );
    }

    #[test]
    fn wrong_answer_reports_correct_sum() {
        let mut s = test_session();
        let mut d = RecordingDisplay::new();
        let answer = s.question().answer();
        let outcome = s.submit(wrong_choice(&s), &mut d).unwrap();
        assert_eq!(outcome, Outcome::Wrong(answer));
        assert_eq!(s.scores().wrong(), 1);
        assert_eq!(s.scores().correct(), 0);
        assert_eq!(s.phase(), Phase::ShowingFeedback(Feedback::Wrong(answer)));
    }

    #[test]
    fn choice_not_offered_changes_nothing() {
        let mut s = test_session();
        let mut d = RecordingDisplay::new();
        let before = s.snapshot();
        let err = s.submit(99, &mut d).unwrap_err();
        assert_eq!(err, QuizError::ChoiceNotOffered(99));
        assert_eq!(s.snapshot(), before);
        assert!(d.is_empty());
    }

    #[test]
    fn no_new_question_while_feedback_pending() {
        let mut s = test_session();
        let mut d = RecordingDisplay::new();
        let question = *s.question();
        s.submit(question.answer(), &mut d).unwrap();

        assert_eq!(
            s.submit(question.answer(), &mut d),
            Err(QuizError::NotAwaitingAnswer)
        );
        assert_eq!(
            s.acknowledge_level_up(&mut d),
            Err(QuizError::NoLevelUpShown)
        );
        assert_eq!(*s.question(), question);
        assert_eq!(s.scores().correct(), 1);
    }

    #[test]
    fn advance_requires_feedback() {
        let mut s = test_session();
        let mut d = RecordingDisplay::new();
        assert_eq!(s.advance(&mut d), Err(QuizError::NoFeedbackShown));
        assert_eq!(s.turn(), 1);
    }

    #[test]
    fn advance_presents_next_question() {
        let mut s = test_session();
        let mut d = RecordingDisplay::new();
        s.submit(s.question().answer(), &mut d).unwrap();
        d.take();
        s.advance(&mut d).unwrap();
        assert_eq!(s.turn(), 2);
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
        let q = s.question();
        assert_eq!(
            d.events(),
            &[
                DisplayEvent::Question(q.operand1(), q.operand2()),
                DisplayEvent::Choices(s.choices().options()),
            ]
        );
    }

    #[test]
    fn tenth_correct_answer_levels_up_once() {
        let mut s = test_session();
        let mut d = RecordingDisplay::new();
        for n in 1..=11 {
            let outcome = play_correct(&mut s, &mut d);
            if n == 10 {
                assert_eq!(outcome, Outcome::LevelUp(DifficultyLevel::Two));
            } else {
                assert_eq!(outcome, Outcome::Correct, "turn {n}");
            }
        }
        let level_ups = d
            .events()
            .iter()
            .filter(|e| matches!(e, DisplayEvent::LevelUp(_)))
            .count();
        assert_eq!(level_ups, 1);
        // Level-up and plain feedback are mutually exclusive.
        let feedbacks = d
            .events()
            .iter()
            .filter(|e| matches!(e, DisplayEvent::Feedback(_)))
            .count();
        assert_eq!(feedbacks, 10);
        assert_eq!(s.level(), DifficultyLevel::Two);
    }

    #[test]
    fn questions_follow_new_level() {
        let cfg = QuizConfig::default().with_thresholds(1, 2);
        let mut s = QuizSession::new(cfg).unwrap();
        let mut d = RecordingDisplay::new();
        play_correct(&mut s, &mut d);
        play_correct(&mut s, &mut d);
        assert_eq!(s.level(), DifficultyLevel::Three);
        for _ in 0..30 {
            assert!(s.question().answer() <= 15);
            play_correct(&mut s, &mut d);
        }
        assert_eq!(s.level(), DifficultyLevel::Three);
    }

    #[test]
    fn level_up_must_be_acknowledged() {
        let cfg = QuizConfig::default().with_thresholds(1, 2);
        let mut s = QuizSession::new(cfg).unwrap();
        let mut d = RecordingDisplay::new();
        s.submit(s.question().answer(), &mut d).unwrap();
        assert_eq!(s.phase(), Phase::ShowingLevelUp(DifficultyLevel::Two));
        assert_eq!(s.advance(&mut d), Err(QuizError::NoFeedbackShown));
        s.handle(QuizEvent::LevelUpAcknowledged, &mut d).unwrap();
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn handle_dispatches_events() {
        let mut s = test_session();
        let mut d = RecordingDisplay::new();
        let answer = s.question().answer();
        let outcome = s.handle(QuizEvent::ChoiceSelected(answer), &mut d).unwrap();
        assert_eq!(outcome, Some(Outcome::Correct));
        let outcome = s.handle(QuizEvent::AdvanceRequested, &mut d).unwrap();
        assert_eq!(outcome, None);
        assert_eq!(s.turn(), 2);
    }

    #[test]
    fn restart_resets_scores() {
        let cfg = QuizConfig::default().with_thresholds(1, 2);
        let mut s = QuizSession::new(cfg).unwrap();
        let mut d = RecordingDisplay::new();
        play_correct(&mut s, &mut d);
        assert_eq!(s.level(), DifficultyLevel::Two);

        s.restart(&mut d);
        assert_eq!(s.level(), DifficultyLevel::One);
        assert_eq!(s.scores().answered(), 0);
        assert_eq!(s.turn(), 1);
        assert_eq!(s.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn same_seed_same_game() {
        let a = QuizSession::new(QuizConfig::default().with_seed(5)).unwrap();
        let b = QuizSession::new(QuizConfig::default().with_seed(5)).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn snapshot_serializes() {
        let s = test_session();
        let json = serde_json::to_string(&s.snapshot()).unwrap();
        assert!(json.contains("\"turn\":1"));
        assert!(json.contains("AwaitingAnswer"));
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s.snapshot());
    }
}
