//! Question records and categories.
//!
//! A [`Question`] is immutable once generated: prompt, correct answer, a
//! shuffled 3–4 entry option set containing the answer exactly once, and the
//! per-question time budget stamped from the generation context.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Per-session question identifier (position of generation, not display
/// order — the list is consumed in order anyway).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl QuestionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Question category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sum,
    Difference,
    Product,
    Quotient,
    FillBlank,
    Sequence,
}

impl Category {
    /// All categories in unlock order.
    pub const ALL: [Category; 6] = [
        Category::Sum,
        Category::Difference,
        Category::Product,
        Category::Quotient,
        Category::FillBlank,
        Category::Sequence,
    ];
}

/// Inline storage for the 3–4 entry option sets.
pub type Options = SmallVec<[i64; 4]>;

/// A generated question. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub answer: i64,
    /// Shuffled options; contains `answer` exactly once, distractors are
    /// unique and non-negative.
    pub options: Options,
    pub category: Category,
    /// Time budget in seconds.
    pub time_budget: u32,
}

impl Question {
    /// Whether `selected` matches the correct answer.
    #[must_use]
    pub fn is_correct(&self, selected: i64) -> bool {
        selected == self.answer
    }
}
