//! Integration tests for the `eggsum` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

use es_quiz::{QuizConfig, QuizSession};

fn eggsum() -> Command {
    let mut cmd = Command::cargo_bin("eggsum").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// levels
// ---------------------------------------------------------------------------

#[test]
fn levels_lists_all_tiers() {
    eggsum()
        .arg("levels")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Difficulty Levels")
                .and(predicate::str::contains("1-4"))
                .and(predicate::str::contains("1-9"))
                .and(predicate::str::contains("15"))
                .and(predicate::str::contains("after 10 correct"))
                .and(predicate::str::contains("after 20 correct")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_with_summary() {
    eggsum()
        .args(["play", "--seed", "1"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level 1")
                .and(predicate::str::contains("+-------+"))
                .and(predicate::str::contains("Final score: 0 correct, 0 wrong (Level 1)")),
        );
}

#[test]
fn play_scores_a_correct_answer() {
    let session = QuizSession::new(QuizConfig::default().with_seed(5)).unwrap();
    let answer = session.question().answer();

    eggsum()
        .args(["play", "--seed", "5"])
        .write_stdin(format!("{answer}\n\nq\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Correct!")
                .and(predicate::str::contains("Final score: 1 correct, 0 wrong")),
        );
}

#[test]
fn play_rejects_unoffered_answer() {
    eggsum()
        .args(["play", "--seed", "2"])
        .write_stdin("100\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("100 is not one of the offered choices"));
}

#[test]
fn play_starts_at_requested_level() {
    eggsum()
        .args(["play", "--seed", "2", "--level", "3"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 3"));
}

#[test]
fn play_rejects_unknown_level() {
    eggsum()
        .args(["play", "--level", "4"])
        .assert()
        .failure();
}

#[test]
fn play_rejects_bad_thresholds() {
    eggsum()
        .args(["play", "--level2-at", "5", "--level3-at", "5"])
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid level-up thresholds"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_perfect_player() {
    eggsum()
        .args(["simulate", "--turns", "25", "--accuracy", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simulation")
                .and(predicate::str::contains("Final: Level 3"))
                .and(predicate::str::contains("25 correct")),
        );
}

#[test]
fn simulate_json() {
    let output = eggsum()
        .args(["simulate", "--turns", "12", "--accuracy", "1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["correct"], 12);
    assert_eq!(report["final_level"], 2);
    assert_eq!(report["levels"][1]["turn"], 11);
}

#[test]
fn simulate_rejects_bad_accuracy() {
    eggsum()
        .args(["simulate", "--accuracy", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("accuracy must be between 0 and 1"));
}
