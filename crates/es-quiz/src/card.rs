//! Text rendering of egg cards.
//!
//! Each operand is shown as a card holding that many eggs, laid out on a
//! 3x3 grid. Nine eggs is the most any level asks for.

/// Largest egg count a card can hold.
pub const MAX_EGGS: u32 = 9;

const EGG: char = 'o';
const TOP: &str = "+-------+";

/// Draw a single card with `count` eggs (clamped to 1..=9).
///
/// The result is five lines of equal width, without a trailing newline.
pub fn render_card(count: u32) -> String {
    card_lines(count).join("\n")
}

/// Draw two cards side by side with a `+` between them.
pub fn render_cards(left: u32, right: u32) -> String {
    let left = card_lines(left);
    let right = card_lines(right);
    left.iter()
        .zip(&right)
        .enumerate()
        .map(|(i, (l, r))| {
            let joiner = if i == 2 { " + " } else { "   " };
            format!("{l}{joiner}{r}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short description of a card, e.g. `card with 3 eggs`.
pub fn card_caption(count: u32) -> String {
    match count {
        1 => "card with 1 egg".to_string(),
        n => format!("card with {n} eggs"),
    }
}

fn card_lines(count: u32) -> Vec<String> {
    let count = count.clamp(1, MAX_EGGS) as usize;
    let mut lines = vec![TOP.to_string()];
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                if row * 3 + col < count {
                    EGG.to_string()
                } else {
                    " ".to_string()
                }
            })
            .collect();
        lines.push(format!("| {} |", cells.join(" ")));
    }
    lines.push(TOP.to_string());
    lines
}
