//! The level progression ledger: sole mutator of the progress record.
//!
//! `complete_level` applies the acceptance rule (accuracy threshold, minimum
//! question count), updates lifetime totals and the perfect-level streak,
//! advances `highest`/`current` level, recomputes unlock flags, and saves
//! through the injected [`ProgressStore`]. Rejections are plain failure
//! values with no state change; the caller re-attempts the level.

use log::{debug, info};
use thiserror::Error;

use crate::persist::ProgressStore;

use super::catalog::LevelCatalog;
use super::definition::{LevelDefinition, MAX_LEVEL};
use super::progress::ProgressRecord;

/// Why a `complete_level` call was not accepted. Not an engine error: the
/// run simply did not meet the level's bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CompletionRejected {
    #[error("unknown level {0}")]
    UnknownLevel(u32),

    /// Fewer questions answered than the level requires.
    #[error("answered {answered} of {required} required questions")]
    NotEnoughQuestions { answered: u32, required: u32 },

    /// Accuracy below the level's threshold (100% for elimination levels,
    /// 60% otherwise).
    #[error("accuracy {correct}/{answered} below the required threshold")]
    AccuracyBelowThreshold { correct: u32, answered: u32 },
}

/// What an accepted completion did to the progress record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelReport {
    pub level: u32,
    /// Score after the level multiplier, as added to the lifetime total.
    pub awarded_score: i64,
    /// Whether this completion advanced the highest reached level.
    pub advanced: bool,
    /// The player's current level after the call.
    pub current_level: u32,
    /// Whether the run was perfectly accurate.
    pub perfect: bool,
}

/// Owns the level catalog and the progress record for one player.
///
/// Not designed for concurrent writers: the caller serializes
/// `complete_level` invocations per user.
pub struct LevelLedger {
    catalog: LevelCatalog,
    progress: ProgressRecord,
    store: Box<dyn ProgressStore>,
    key: String,
}

impl LevelLedger {
    /// Build a ledger for `key`, loading existing progress from `store`
    /// (or starting fresh) and computing unlock flags.
    pub fn new(store: Box<dyn ProgressStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let progress = store.load(&key).unwrap_or_default();
        let catalog = LevelCatalog::new(progress.highest_level);

        debug!(
            "ledger loaded: key={key} highest={} completed={}",
            progress.highest_level,
            progress.completed_levels.len()
        );

        Self {
            catalog,
            progress,
            store,
            key,
        }
    }

    /// Convenience constructor backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(Box::new(crate::persist::MemoryStore::new()), key)
    }

    /// Get a level definition by number.
    #[must_use]
    pub fn level(&self, number: u32) -> Option<&LevelDefinition> {
        self.catalog.get(number)
    }

    /// All 99 levels in ascending order.
    #[must_use]
    pub fn levels(&self) -> &[LevelDefinition] {
        self.catalog.levels()
    }

    /// The current progress record.
    #[must_use]
    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    /// Report a finished level run.
    ///
    /// `answered` and `correct` describe the run; `score` is the session's
    /// raw score, which is scaled by the level multiplier and floored before
    /// entering the lifetime total.
    pub fn complete_level(
        &mut self,
        number: u32,
        score: i64,
        answered: u32,
        correct: u32,
    ) -> Result<LevelReport, CompletionRejected> {
        let def = self
            .catalog
            .get(number)
            .ok_or(CompletionRejected::UnknownLevel(number))?;

        if (answered as usize) < def.question_count {
            return Err(CompletionRejected::NotEnoughQuestions {
                answered,
                required: def.question_count as u32,
            });
        }

        // 100% accuracy for elimination levels, >= 60% otherwise.
        let accepted = if def.elimination {
            correct == answered
        } else {
            u64::from(correct) * 100 >= u64::from(answered) * 60
        };
        if !accepted {
            return Err(CompletionRejected::AccuracyBelowThreshold { correct, answered });
        }

        let awarded = ((score as f64) * def.score_multiplier).floor() as i64;
        let perfect = correct == answered;

        // Every accepted call is a real play-through: lifetime totals grow
        // even when the level was already in the completed set.
        self.progress.total_score += awarded;
        self.progress.questions_answered += u64::from(answered);
        self.progress.correct_answers += u64::from(correct);
        self.progress.completed_levels.insert(number);

        if perfect {
            self.progress.perfect_streak += 1;
            self.progress.longest_perfect_streak = self
                .progress
                .longest_perfect_streak
                .max(self.progress.perfect_streak);
        } else {
            self.progress.perfect_streak = 0;
        }

        let advanced = number >= self.progress.highest_level;
        if advanced {
            let next = (number + 1).min(MAX_LEVEL);
            self.progress.highest_level = next;
            self.progress.current_level = next;
            self.catalog.recompute_unlocks(next);
            info!("level {number} cleared, advancing to {next}");
        }

        self.progress.last_played = Some(chrono::Utc::now());
        self.store.save(&self.key, &self.progress);

        Ok(LevelReport {
            level: number,
            awarded_score: awarded,
            advanced,
            current_level: self.progress.current_level,
            perfect,
        })
    }
}
