use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use es_quiz::{
    DisplayEvent, LevelUpThresholds, Phase, QuizConfig, QuizEvent, QuizSession, RecordingDisplay,
};

/// The turn at which a level was first played.
#[derive(Debug, Serialize)]
struct LevelMark {
    level: u32,
    turn: u32,
    correct: u32,
}

/// Result of an auto-played session.
#[derive(Debug, Serialize)]
struct SimReport {
    seed: u64,
    turns: u32,
    accuracy: f64,
    correct: u32,
    wrong: u32,
    final_level: u32,
    levels: Vec<LevelMark>,
}

pub fn run(turns: u32, accuracy: f64, seed: u64, json: bool) -> Result<(), String> {
    let t = LevelUpThresholds::default();
    let config = super::build_config(seed, 1, t.level2, t.level3);
    let report = simulate(config, turns, accuracy)?;

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({turns} turns, accuracy={accuracy}, seed={seed})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Level", "Reached at turn", "Correct so far"]);
    for mark in &report.levels {
        table.add_row(vec![
            mark.level.to_string(),
            mark.turn.to_string(),
            mark.correct.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    let answered = report.correct + report.wrong;
    let pct = if answered == 0 {
        0
    } else {
        report.correct * 100 / answered
    };
    println!(
        "  Final: Level {} | {} | {} | {pct}% right",
        report.final_level,
        format!("{} correct", report.correct).green(),
        format!("{} wrong", report.wrong).red()
    );

    Ok(())
}

/// Answer `turns` questions, each correctly with probability `accuracy`.
fn simulate(config: QuizConfig, turns: u32, accuracy: f64) -> Result<SimReport, String> {
    if !(0.0..=1.0).contains(&accuracy) {
        return Err(format!("accuracy must be between 0 and 1, got {accuracy}"));
    }

    let seed = config.seed;
    let mut player = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut session =
        QuizSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;
    let mut display = RecordingDisplay::new();

    let mut levels = vec![LevelMark {
        level: session.level().number(),
        turn: 1,
        correct: 0,
    }];

    session.start(&mut display);
    for _ in 0..turns {
        let answer = session.question().answer();
        let [a, b] = session.choices().options();
        let pick = if player.random_bool(accuracy) {
            answer
        } else if a == answer {
            b
        } else {
            a
        };

        session
            .handle(QuizEvent::ChoiceSelected(pick), &mut display)
            .map_err(|e| e.to_string())?;

        let dismiss = match session.phase() {
            Phase::ShowingLevelUp(_) => QuizEvent::LevelUpAcknowledged,
            _ => QuizEvent::AdvanceRequested,
        };
        session
            .handle(dismiss, &mut display)
            .map_err(|e| e.to_string())?;

        // The next question is the first one played at the new level.
        for event in display.take() {
            if let DisplayEvent::LevelUp(level) = event {
                levels.push(LevelMark {
                    level: level.number(),
                    turn: session.turn(),
                    correct: session.scores().correct(),
                });
            }
        }
    }

    let scores = session.scores();
    log::debug!(
        "simulated {turns} turns: {} correct, {} wrong",
        scores.correct(),
        scores.wrong()
    );
    Ok(SimReport {
        seed,
        turns,
        accuracy,
        correct: scores.correct(),
        wrong: scores.wrong(),
        final_level: scores.level().number(),
        levels,
    })
}
