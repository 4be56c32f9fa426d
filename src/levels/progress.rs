//! The durable progress record and rank derivation.
//!
//! A `ProgressRecord` is the cross-session summary of a player's
//! advancement: current/highest level, lifetime totals, the perfect-level
//! streak (consecutive 100%-accuracy level completions, distinct from the
//! in-session answer streak), and the completed-level set. It is owned and
//! mutated exclusively by the [`LevelLedger`](super::LevelLedger).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::definition::MAX_LEVEL;

/// Durable, cross-session player progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Level the player is currently on.
    pub current_level: u32,
    /// Highest level ever reached. Never decreases.
    pub highest_level: u32,
    /// Lifetime score across all accepted level completions.
    pub total_score: i64,
    /// Lifetime questions answered (every accepted play-through counts).
    pub questions_answered: u64,
    /// Lifetime correct answers.
    pub correct_answers: u64,
    /// Consecutive perfectly-accurate level completions.
    pub perfect_streak: u32,
    pub longest_perfect_streak: u32,
    /// Set of completed level numbers. Set semantics: replays don't grow it.
    pub completed_levels: im::HashSet<u32>,
    pub last_played: Option<DateTime<Utc>>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            current_level: 1,
            highest_level: 1,
            total_score: 0,
            questions_answered: 0,
            correct_answers: 0,
            perfect_streak: 0,
            longest_perfect_streak: 0,
            completed_levels: im::HashSet::new(),
            last_played: None,
        }
    }
}

impl ProgressRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifetime accuracy in `[0, 1]`; 0 before any answer.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.questions_answered == 0 {
            0.0
        } else {
            self.correct_answers as f64 / self.questions_answered as f64
        }
    }

    /// Fraction of the 99 levels completed, in `[0, 1]`.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        self.completed_levels.len() as f64 / MAX_LEVEL as f64
    }

    /// Presentational rank. Not used in any gating decision.
    #[must_use]
    pub fn rank(&self) -> Rank {
        Rank::from_rating(0.6 * self.completion_rate() + 0.4 * self.accuracy())
    }

    /// Export to bytes for transport or storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Import a record previously exported with [`ProgressRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Eight presentational rank tiers, monotone in completion and accuracy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Novice,
    Apprentice,
    Adept,
    Skilled,
    Veteran,
    Expert,
    Master,
    Grandmaster,
}

impl Rank {
    /// Map a combined rating in `[0, 1]` onto the eight tiers.
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        match (rating.clamp(0.0, 1.0) * 8.0) as u32 {
            0 => Rank::Novice,
            1 => Rank::Apprentice,
            2 => Rank::Adept,
            3 => Rank::Skilled,
            4 => Rank::Veteran,
            5 => Rank::Expert,
            6 => Rank::Master,
            _ => Rank::Grandmaster,
        }
    }

    /// Display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Rank::Novice => "Novice",
            Rank::Apprentice => "Apprentice",
            Rank::Adept => "Adept",
            Rank::Skilled => "Skilled",
            Rank::Veteran => "Veteran",
            Rank::Expert => "Expert",
            Rank::Master => "Master",
            Rank::Grandmaster => "Grandmaster",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
