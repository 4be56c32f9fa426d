//! Level definitions and the formulas that generate the 99-entry catalog.
//!
//! Everything about a level is a pure function of its number: tier, allowed
//! operations, elimination flag, error tolerance, score multiplier, question
//! count, and time budget. Only the `unlocked` flag is ever mutated after
//! generation, and only by the catalog's unlock recomputation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Difficulty;
use crate::generator::Category;

/// First elimination level. Levels above this tolerate zero errors and end
/// on the first mistake.
pub const ELIMINATION_THRESHOLD: u32 = 20;

/// Highest level in the catalog.
pub const MAX_LEVEL: u32 = 99;

/// A single level's rules. Immutable apart from `unlocked`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Level number, 1..=99.
    pub number: u32,
    pub name: String,
    pub description: String,
    /// Questions generated for (and required by) a run of this level.
    pub question_count: usize,
    /// Per-question time budget in seconds.
    pub time_budget: u32,
    pub tier: Difficulty,
    /// Operation categories allowed; expands monotonically with the number.
    pub operations: SmallVec<[Category; 6]>,
    /// One mistake ends the run.
    pub elimination: bool,
    /// Errors tolerated before the run fails. 0 when `elimination`.
    pub max_errors: u32,
    /// Score scaling, `1.0 + 0.1 × (number − 1)`.
    pub score_multiplier: f64,
    pub unlocked: bool,
}

impl LevelDefinition {
    /// Build the definition for a level number.
    #[must_use]
    pub fn generate(number: u32) -> Self {
        debug_assert!((1..=MAX_LEVEL).contains(&number));

        let tier = Difficulty::for_level(number);
        let elimination = number > ELIMINATION_THRESHOLD;
        let max_errors = if elimination {
            0
        } else {
            (3 - number / 10).max(1)
        };

        Self {
            number,
            name: format!("Level {number}"),
            description: if elimination {
                format!("Level {number} · {tier} · sudden death")
            } else {
                format!("Level {number} · {tier}")
            },
            question_count: tier.level_question_count(),
            time_budget: tier.time_budget(),
            tier,
            operations: operations_for(number),
            elimination,
            max_errors,
            score_multiplier: 1.0 + 0.1 * (number - 1) as f64,
            unlocked: false,
        }
    }
}

/// Allowed operations expand as the level number grows.
fn operations_for(number: u32) -> SmallVec<[Category; 6]> {
    let mut ops: SmallVec<[Category; 6]> = SmallVec::new();
    ops.push(Category::Sum);
    ops.push(Category::Difference);
    if number > 10 {
        ops.push(Category::Product);
    }
    if number > 20 {
        ops.push(Category::Quotient);
    }
    if number > 30 {
        ops.push(Category::FillBlank);
    }
    if number > 50 {
        ops.push(Category::Sequence);
    }
    ops
}
