//! Scoring formula for correct answers.
//!
//! Base 10 points, +5 when the post-increment streak has reached 5, +3 when
//! the answer came with more than 70% of the question's time budget left.
//! The subtotal (base plus bonuses) is scaled by the session's multiplier
//! (fixed per difficulty for classic play, the level multiplier for level
//! play) and floored. Wrong, skipped, and timed-out answers score nothing.

/// Points awarded once the current answer is known to be correct.
/// Streak bonus kicks in at this length.
pub const BASE_POINTS: i64 = 10;
pub const STREAK_BONUS: i64 = 5;
pub const STREAK_BONUS_AT: u32 = 5;
pub const TIME_BONUS: i64 = 3;
/// Fraction of the budget that must remain for the time bonus.
pub const TIME_BONUS_FRACTION: f64 = 0.7;

/// Compute the score delta for a correct answer.
///
/// `streak` is the streak *after* counting this answer. `remaining` and
/// `budget` are in seconds; `multiplier` is the session's score factor.
#[must_use]
pub fn points_for_answer(streak: u32, remaining: u32, budget: u32, multiplier: f64) -> i64 {
    let mut subtotal = BASE_POINTS;

    if streak >= STREAK_BONUS_AT {
        subtotal += STREAK_BONUS;
    }
    if f64::from(remaining) > TIME_BONUS_FRACTION * f64::from(budget) {
        subtotal += TIME_BONUS;
    }

    ((subtotal as f64) * multiplier).floor() as i64
}
