use std::io::{self, BufRead, Write};

use colored::Colorize;

use es_quiz::card::{card_caption, render_cards};
use es_quiz::{
    DifficultyLevel, Feedback, Phase, QuizConfig, QuizDisplay, QuizEvent, QuizSession,
    Scoreboard,
};

pub fn run(seed: Option<u64>, level: u32, level2_at: u32, level3_at: u32) -> Result<(), String> {
    let seed = seed.unwrap_or_else(rand::random);
    let config = super::build_config(seed, level, level2_at, level3_at);

    println!("  {} add up the eggs!", "Eggsum:".bold());
    println!("  Seed: {seed} | Type 'score', 'restart' or 'quit' at any time.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(config, stdin.lock(), stdout.lock()).map(|_| ())
}

/// Drive a session from `reader` until quit or EOF, writing the board to
/// `out`. Returns the final scoreboard.
fn play<R: BufRead, W: Write>(
    config: QuizConfig,
    mut reader: R,
    mut out: W,
) -> Result<Scoreboard, String> {
    let mut session =
        QuizSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;
    let mut display = TerminalDisplay::default();

    session.start(&mut display);
    display.flush_to(&mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", prompt(&session)).map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match parse_input(session.phase(), line.trim()) {
            Input::Quit => break,
            Input::Score => {
                let s = session.scores();
                display.push(format!(
                    "  Level {} | Correct: {} | Wrong: {}",
                    s.level(),
                    s.correct(),
                    s.wrong()
                ));
            }
            Input::Restart => {
                display.push("  Starting over.".to_string());
                session.restart(&mut display);
            }
            Input::Event(event) => {
                if let Err(e) = session.handle(event, &mut display) {
                    log::debug!("rejected {event:?}: {e}");
                    display.push(format!("  {}", e.to_string().yellow()));
                }
            }
            Input::Invalid(msg) => display.push(format!("  {}", msg.yellow())),
        }
        display.flush_to(&mut out)?;
    }

    let scores = session.scores().clone();
    writeln!(
        out,
        "\n  Final score: {} correct, {} wrong (Level {})",
        scores.correct(),
        scores.wrong(),
        scores.level()
    )
    .map_err(|e| e.to_string())?;

    Ok(scores)
}

/// A line of player input, interpreted for the current phase.
#[derive(Debug, PartialEq)]
enum Input {
    Quit,
    Score,
    Restart,
    Event(QuizEvent),
    Invalid(String),
}

fn parse_input(phase: Phase, input: &str) -> Input {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Input::Quit,
        "score" | "status" => return Input::Score,
        "restart" => return Input::Restart,
        _ => {}
    }

    match phase {
        Phase::AwaitingAnswer => match input.parse::<u32>() {
            Ok(value) => Input::Event(QuizEvent::ChoiceSelected(value)),
            Err(_) => Input::Invalid("type one of the numbers shown".to_string()),
        },
        Phase::ShowingFeedback(_) => Input::Event(QuizEvent::AdvanceRequested),
        Phase::ShowingLevelUp(_) => Input::Event(QuizEvent::LevelUpAcknowledged),
    }
}

fn prompt(session: &QuizSession) -> String {
    match session.phase() {
        Phase::AwaitingAnswer => {
            let [a, b] = session.choices().options();
            format!("Your answer ({a} or {b}): ")
        }
        Phase::ShowingFeedback(_) => "Press Enter for the next question ".to_string(),
        Phase::ShowingLevelUp(_) => "Press Enter to keep playing ".to_string(),
    }
}

/// Renders the board as text lines, buffered until the next flush.
#[derive(Default)]
struct TerminalDisplay {
    lines: Vec<String>,
}

impl TerminalDisplay {
    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    fn flush_to<W: Write>(&mut self, out: &mut W) -> Result<(), String> {
        for line in self.lines.drain(..) {
            writeln!(out, "{line}").map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl QuizDisplay for TerminalDisplay {
    fn render_question(&mut self, operand1: u32, operand2: u32) {
        self.push(String::new());
        for row in render_cards(operand1, operand2).lines() {
            self.push(format!("  {row}"));
        }
        self.push(format!(
            "  {}",
            format!("({}, {})", card_caption(operand1), card_caption(operand2)).dimmed()
        ));
        self.push(format!("  {operand1} + {operand2} = ?"));
    }

    fn render_choices(&mut self, choices: [u32; 2]) {
        self.push(format!("  [ {} ]   [ {} ]", choices[0], choices[1]));
    }

    fn render_scores(&mut self, correct: u32, wrong: u32) {
        self.push(format!(
            "  {} | {}",
            format!("Correct: {correct}").green(),
            format!("Wrong: {wrong}").red()
        ));
    }

    fn render_level(&mut self, level: DifficultyLevel) {
        self.push(format!("  {}", format!("Level {level}").bold()));
    }

    fn render_feedback(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Correct => self.push(format!("  🎉 {}", "Correct!".green().bold())),
            Feedback::Wrong(answer) => self.push(format!(
                "  ❌ {}",
                format!("Wrong! The answer was {answer}").red().bold()
            )),
        }
    }

    fn render_level_up(&mut self, level: DifficultyLevel) {
        self.push(format!("  🎊 {} 🎊", "Congratulations!".bold()));
        self.push(format!("  You've reached Level {level}!"));
    }
}
