//! Immutable session snapshots for display layers.
//!
//! A snapshot is everything a view needs to render the session at one
//! moment, copied out of the machine. The question list is an `im` vector,
//! so cloning the current question is cheap and the snapshot shares no
//! mutable state with the live session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::Difficulty;
use crate::generator::Question;

use super::SessionStatus;

/// A point-in-time copy of session state. Fields mirror what the views of
/// the original game display: progress, score, streak, resource counters,
/// and the level flags.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub id: u64,
    pub status: SessionStatus,
    pub difficulty: Difficulty,
    /// Bound level number for level sessions.
    pub level: Option<u32>,

    /// 1-based number of the question on screen (clamped to the list length
    /// once finished).
    pub question_number: usize,
    pub total_questions: usize,
    pub current_question: Option<Question>,

    pub score: i64,
    pub correct: u32,
    pub incorrect: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub time_remaining: u32,

    pub hints_remaining: u32,
    pub skips_remaining: u32,

    pub eliminated: bool,
    pub level_completed: bool,

    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}
