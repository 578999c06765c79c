pub mod levels;
pub mod play;
pub mod simulate;

use es_quiz::QuizConfig;

/// Build a session config from the command-line knobs shared by subcommands.
fn build_config(seed: u64, level: u32, level2_at: u32, level3_at: u32) -> QuizConfig {
    QuizConfig::default()
        .with_seed(seed)
        .with_level(level)
        .with_thresholds(level2_at, level3_at)
}
