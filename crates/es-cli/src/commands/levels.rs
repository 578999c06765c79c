use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use es_quiz::{DifficultyLevel, LevelUpThresholds};

pub fn run() -> Result<(), String> {
    let thresholds = LevelUpThresholds::default();

    println!("  {}", "Difficulty Levels".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Level",
        "First card",
        "Second card",
        "Max sum",
        "Unlocked",
    ]);

    for level in DifficultyLevel::all() {
        let s = level.settings();
        table.add_row(vec![
            level.to_string(),
            format!("1-{}", s.max1),
            format!("1-{}", s.max2),
            s.max_sum.to_string(),
            unlock_label(*level, &thresholds),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn unlock_label(level: DifficultyLevel, thresholds: &LevelUpThresholds) -> String {
    match level {
        DifficultyLevel::One => "at start".to_string(),
        DifficultyLevel::Two => format!("after {} correct", thresholds.level2),
        DifficultyLevel::Three => format!("after {} correct", thresholds.level3),
    }
}
