//! Difficulty tiers and the operand ranges they allow.
//!
//! Level 1 keeps sums at or below 5, level 2 at or below 10 and level 3 at
//! or below 15. Settings are derived from the level on demand and never
//! stored alongside it.

use serde::{Deserialize, Serialize};

/// One of the three difficulty tiers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DifficultyLevel {
    /// Operands 1-4, sums up to 5.
    #[default]
    One,
    /// Operands 1-5, sums up to 10.
    Two,
    /// Operands 1-9, sums up to 15.
    Three,
}

impl DifficultyLevel {
    /// Map a level number to a tier. Anything other than 1 or 2 is level 3.
    pub fn from_number(n: u32) -> Self {
        match n {
            1 => Self::One,
            2 => Self::Two,
            _ => Self::Three,
        }
    }

    /// The level number shown to the player (1-3).
    pub fn number(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// The next tier, or `None` at level 3.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => None,
        }
    }

    /// All tiers from easiest to hardest.
    pub fn all() -> &'static [Self] {
        &[Self::One, Self::Two, Self::Three]
    }

    /// Operand ranges for this tier.
    pub fn settings(self) -> DifficultySettings {
        match self {
            Self::One => DifficultySettings::new(4, 4, 5),
            Self::Two => DifficultySettings::new(5, 5, 10),
            Self::Three => DifficultySettings::new(9, 9, 15),
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Operand bounds for question generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Largest first operand.
    pub max1: u32,
    /// Largest second operand.
    pub max2: u32,
    /// Largest allowed sum.
    pub max_sum: u32,
}

impl DifficultySettings {
    /// Create settings from explicit bounds.
    pub fn new(max1: u32, max2: u32, max_sum: u32) -> Self {
        Self {
            max1,
            max2,
            max_sum,
        }
    }
}

/// Resolve the operand bounds for a level number.
pub fn resolve(level: u32) -> DifficultySettings {
    DifficultyLevel::from_number(level).settings()
}
