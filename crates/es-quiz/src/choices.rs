//! Multiple-choice options: the answer plus one near-miss distractor.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultySettings;

/// Smallest sum any question can have (1 + 1).
pub const MIN_SUM: u32 = 2;

/// How many random proposals to try before falling back to a fixed scan.
const MAX_DISTRACTOR_ATTEMPTS: u32 = 64;

/// The two options offered for a question, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSet {
    options: [u32; 2],
}

impl ChoiceSet {
    /// The options in display order.
    pub fn options(&self) -> [u32; 2] {
        self.options
    }

    /// Whether `value` is one of the offered options.
    pub fn contains(&self, value: u32) -> bool {
        self.options.contains(&value)
    }

    /// Display position (0 or 1) of `value`, if offered.
    pub fn position(&self, value: u32) -> Option<usize> {
        self.options.iter().position(|o| *o == value)
    }
}

impl std::fmt::Display for ChoiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} or {}", self.options[0], self.options[1])
    }
}

/// Build the option pair for `answer`, shuffled so the answer's position is
/// not predictable.
pub fn generate_choices(
    answer: u32,
    settings: &DifficultySettings,
    rng: &mut StdRng,
) -> ChoiceSet {
    let distractor = pick_distractor(answer, settings, rng);
    let mut options = [answer, distractor];
    options.shuffle(rng);
    log::debug!("choices for {answer}: {options:?}");
    ChoiceSet { options }
}

/// Propose `answer ± 1` or `answer ± 2` until one lands in
/// `MIN_SUM..=max_sum`.
fn pick_distractor(answer: u32, settings: &DifficultySettings, rng: &mut StdRng) -> u32 {
    let range = i64::from(MIN_SUM)..=i64::from(settings.max_sum);
    let valid = |d: i64| range.contains(&d);
    let answer_wide = i64::from(answer);

    for _ in 0..MAX_DISTRACTOR_ATTEMPTS {
        let sign: i64 = if rng.random_bool(0.5) { -1 } else { 1 };
        let magnitude: i64 = rng.random_range(1..=2);
        let candidate = answer_wide + sign * magnitude;
        if valid(candidate) {
            return candidate as u32;
        }
    }

    // Only reachable with very low probability, or with hand-built settings.
    [-1, 1, -2, 2]
        .into_iter()
        .map(|offset| answer_wide + offset)
        .find(|d| valid(*d))
        .map(|d| d as u32)
        .unwrap_or_else(|| {
            log::warn!(
                "no distractor for {answer} within {MIN_SUM}..={}, using {}",
                settings.max_sum,
                answer + 1
            );
            answer + 1
        })
}
