//! Engine errors.
//!
//! Only session construction can fail hard: asking for a level outside
//! 1..=99 or one the player has not unlocked is a caller bug, not a
//! gameplay event. Everything else in the engine reports through
//! `Option`/`bool` returns or silent no-ops (stale UI events).

use thiserror::Error;

/// Hard failures surfaced at session construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested level number is outside the 1..=99 catalog.
    #[error("unknown level {0}")]
    UnknownLevel(u32),

    /// The requested level exists but has not been unlocked yet.
    #[error("level {0} is locked")]
    LevelLocked(u32),
}
