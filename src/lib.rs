//! # math-blitz
//!
//! The core engine of an arithmetic puzzle game: procedural question
//! generation, a timed session state machine, streak/time/difficulty
//! weighted scoring, and a 99-tier level progression ledger with gating
//! rules (including one-mistake "elimination" levels).
//!
//! ## Design Principles
//!
//! 1. **Caller-driven**: no internal timers or threads. An external clock
//!    feeds [`Session::tick`]; every mutation is an explicit call.
//!
//! 2. **Deterministic under a seed**: all randomness flows through the
//!    injectable [`QuizRng`], so tests replay identical sessions.
//!
//! 3. **One ledger core, pluggable storage**: progress persistence is a
//!    strategy ([`ProgressStore`]) injected into the [`LevelLedger`], not a
//!    second ledger implementation.
//!
//! ## Modules
//!
//! - `core`: difficulty tiers, RNG, errors
//! - `generator`: question generation (arithmetic, fill-blank, sequences,
//!   distractor sets)
//! - `session`: the `Waiting → Playing ⇄ Paused → Finished` state machine
//!   and the scoring formula
//! - `levels`: the 99-level catalog, progress record, and ledger
//! - `persist`: the storage strategy trait and the in-memory store
//!
//! ## Example
//!
//! ```
//! use math_blitz::{Difficulty, Session, SessionMode, SessionStatus};
//!
//! let mut session = Session::classic(Difficulty::Easy, SessionMode::Standard, 42);
//! session.start();
//!
//! let answer = session.current_question().unwrap().answer;
//! assert!(session.answer(answer));
//! assert!(session.score() > 0);
//! assert_eq!(session.status(), SessionStatus::Playing);
//! ```

pub mod core;
pub mod generator;
pub mod levels;
pub mod persist;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Difficulty, DifficultyContext, EngineError, QuizRng};

pub use crate::generator::{Category, Options, Question, QuestionId};

pub use crate::session::{
    Hint, LevelOutcome, Session, SessionMode, SessionSnapshot, SessionStatus,
    CLASSIC_QUESTION_COUNT,
};

pub use crate::levels::{
    CompletionRejected, LevelCatalog, LevelDefinition, LevelLedger, LevelReport, ProgressRecord,
    Rank, ELIMINATION_THRESHOLD, MAX_LEVEL,
};

pub use crate::persist::{MemoryStore, ProgressStore};
