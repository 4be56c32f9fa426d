//! Difficulty tiers and the context handed to the question generator.
//!
//! A [`Difficulty`] tier bundles every tier-dependent constant: operand
//! ranges (via [`DifficultyContext`]), per-question time budgets, hint/skip
//! caps, option counts, and the classic-mode score multiplier. Level numbers
//! map onto tiers by fixed bands (1–20 easy, 21–60 medium, 61–99 hard).

use serde::{Deserialize, Serialize};

/// Difficulty tier for classic sessions and level bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Derive the tier for a level number (1–20 easy, 21–60 medium, 61–99 hard).
    #[must_use]
    pub fn for_level(number: u32) -> Self {
        match number {
            1..=20 => Difficulty::Easy,
            21..=60 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    /// Classic-mode score multiplier applied to the bonus subtotal.
    #[must_use]
    pub fn score_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    /// Per-question time budget in seconds.
    #[must_use]
    pub fn time_budget(self) -> u32 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 20,
            Difficulty::Hard => 15,
        }
    }

    /// Number of answer options presented per question.
    #[must_use]
    pub fn option_count(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium | Difficulty::Hard => 4,
        }
    }

    /// Maximum hints per session.
    #[must_use]
    pub fn max_hints(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 2,
            Difficulty::Hard => 1,
        }
    }

    /// Maximum skips per session.
    #[must_use]
    pub fn max_skips(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 2,
            Difficulty::Hard => 1,
        }
    }

    /// Required question count for levels in this tier.
    #[must_use]
    pub fn level_question_count(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 7,
            Difficulty::Hard => 6,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Generation context: tier, optional level, operand-range scaling, and the
/// fixed time budget each generated question carries.
#[derive(Clone, Copy, Debug)]
pub struct DifficultyContext {
    pub tier: Difficulty,
    /// Set for level sessions; classic sessions carry `None`.
    pub level: Option<u32>,
    /// Scales operand ranges upward for higher levels. 1.0 for classic.
    pub range_multiplier: f64,
    /// Time budget stamped onto each generated question, in seconds.
    pub time_budget: u32,
}

impl DifficultyContext {
    /// Context for a classic session at the given tier.
    #[must_use]
    pub fn classic(tier: Difficulty) -> Self {
        Self {
            tier,
            level: None,
            range_multiplier: 1.0,
            time_budget: tier.time_budget(),
        }
    }

    /// Context for a level: ranges widen linearly with the level number.
    #[must_use]
    pub fn for_level(number: u32, time_budget: u32) -> Self {
        Self {
            tier: Difficulty::for_level(number),
            level: Some(number),
            range_multiplier: 1.0 + 0.05 * (number.saturating_sub(1)) as f64,
            time_budget,
        }
    }

    /// Scale a range bound by the level multiplier.
    #[must_use]
    pub fn scale(&self, bound: i64) -> i64 {
        ((bound as f64) * self.range_multiplier) as i64
    }
}
