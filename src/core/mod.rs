//! Core engine types: difficulty tiers, RNG, errors.
//!
//! These are the building blocks shared by the generator, the session
//! machine, and the level ledger.

pub mod difficulty;
pub mod error;
pub mod rng;

pub use difficulty::{Difficulty, DifficultyContext};
pub use error::EngineError;
pub use rng::QuizRng;
