//! CLI frontend for the Eggsum flashcard quiz.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eggsum",
    about = "Eggsum: add up the eggs on two cards",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz interactively
    Play {
        /// RNG seed for reproducible questions (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting level (1-3)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=3))]
        level: u32,

        /// Correct answers needed to reach level 2
        #[arg(long, default_value = "10")]
        level2_at: u32,

        /// Correct answers needed to reach level 3
        #[arg(long, default_value = "20")]
        level3_at: u32,
    },

    /// Show the difficulty levels and when they unlock
    Levels,

    /// Auto-play a session and report how the levels progressed
    Simulate {
        /// Number of questions to answer
        #[arg(short, long, default_value = "30")]
        turns: u32,

        /// Probability of answering each question correctly (0.0-1.0)
        #[arg(short, long, default_value = "0.8")]
        accuracy: f64,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            level,
            level2_at,
            level3_at,
        } => commands::play::run(seed, level, level2_at, level3_at),
        Commands::Levels => commands::levels::run(),
        Commands::Simulate {
            turns,
            accuracy,
            seed,
            json,
        } => commands::simulate::run(turns, accuracy, seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
