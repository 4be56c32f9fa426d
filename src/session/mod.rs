//! The session state machine.
//!
//! One `Session` owns one play-through: a pre-generated question list, a
//! cursor, score/streak/hint/skip counters, and a lifecycle status
//! (`Waiting → Playing ⇄ Paused → Finished`). The machine is mutated only
//! by explicit calls from a single caller and keeps no internal clock: an
//! external timer feeds [`Session::tick`] with the remaining seconds.
//!
//! Stale UI events — answering while paused, skipping after the run ended —
//! are silent no-ops. Resource exhaustion (hints, skips) is reported
//! through the return value, never as an error.

pub mod scoring;
pub mod snapshot;

pub use scoring::points_for_answer;
pub use snapshot::SessionSnapshot;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, DifficultyContext, EngineError, QuizRng};
use crate::generator::{self, Category, Question};
use crate::levels::{LevelDefinition, LevelLedger};

/// Questions per classic session.
pub const CLASSIC_QUESTION_COUNT: usize = 10;

/// Session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Constructed, clock not started.
    Waiting,
    /// Accepting answers, hints, skips, and ticks.
    Playing,
    /// Clock suspended; resumes back to `Playing`.
    Paused,
    /// Terminal. End timestamp recorded on first entry.
    Finished,
}

/// Classic-session timing rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// A timeout costs the question and moves on.
    Standard,
    /// Any timeout ends the run.
    Endless,
}

/// What kind of run this session is.
#[derive(Clone, Debug)]
enum Kind {
    Classic {
        difficulty: Difficulty,
        mode: SessionMode,
    },
    Level {
        def: LevelDefinition,
    },
}

/// A consumed hint: one option that is guaranteed wrong, for the caller to
/// grey out, plus a displayable line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hint {
    pub eliminated: i64,
    pub text: String,
}

/// Outcome of a completed (non-eliminated) level run, shaped for
/// [`LevelLedger::complete_level`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelOutcome {
    pub level: u32,
    pub score: i64,
    pub answered: u32,
    pub correct: u32,
}

/// One play-through of a question list.
pub struct Session {
    id: u64,
    kind: Kind,
    questions: im::Vector<Question>,
    cursor: usize,

    score: i64,
    correct: u32,
    incorrect: u32,
    streak: u32,
    max_streak: u32,

    status: SessionStatus,
    time_remaining: u32,

    hints_used: u32,
    max_hints: u32,
    skips_used: u32,
    max_skips: u32,

    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,

    // Level-mode bookkeeping; untouched in classic runs.
    errors_in_level: u32,
    eliminated: bool,
    level_completed: bool,

    /// Per-session stream for hint selection.
    rng: QuizRng,
}

/// Classic categories widen with the chosen difficulty.
fn classic_categories(difficulty: Difficulty) -> &'static [Category] {
    match difficulty {
        Difficulty::Easy => &[Category::Sum, Category::Difference],
        Difficulty::Medium => &[
            Category::Sum,
            Category::Difference,
            Category::Product,
            Category::Quotient,
        ],
        Difficulty::Hard => &Category::ALL,
    }
}

impl Session {
    /// Create a classic session: ten questions at the chosen difficulty.
    #[must_use]
    pub fn classic(difficulty: Difficulty, mode: SessionMode, seed: u64) -> Self {
        let mut rng = QuizRng::new(seed);
        let ctx = DifficultyContext::classic(difficulty);
        let questions = generator::generate_set(
            classic_categories(difficulty),
            CLASSIC_QUESTION_COUNT,
            &ctx,
            &mut rng,
        );

        Self::build(seed, Kind::Classic { difficulty, mode }, questions, rng)
    }

    /// Create a session for a level.
    ///
    /// Fails hard when the level is unknown or still locked: that is a
    /// caller logic error, not a gameplay event.
    pub fn for_level(ledger: &LevelLedger, number: u32, seed: u64) -> Result<Self, EngineError> {
        let def = ledger
            .level(number)
            .ok_or(EngineError::UnknownLevel(number))?;
        if !def.unlocked {
            return Err(EngineError::LevelLocked(number));
        }

        let mut rng = QuizRng::new(seed);
        let ctx = DifficultyContext::for_level(number, def.time_budget);
        let questions =
            generator::generate_set(&def.operations, def.question_count, &ctx, &mut rng);

        Ok(Self::build(seed, Kind::Level { def: def.clone() }, questions, rng))
    }

    fn build(id: u64, kind: Kind, questions: im::Vector<Question>, rng: QuizRng) -> Self {
        let tier = match &kind {
            Kind::Classic { difficulty, .. } => *difficulty,
            Kind::Level { def } => def.tier,
        };
        let first_budget = questions.front().map_or(0, |q| q.time_budget);

        Self {
            id,
            kind,
            questions,
            cursor: 0,
            score: 0,
            correct: 0,
            incorrect: 0,
            streak: 0,
            max_streak: 0,
            status: SessionStatus::Waiting,
            time_remaining: first_budget,
            hints_used: 0,
            max_hints: tier.max_hints(),
            skips_used: 0,
            max_skips: tier.max_skips(),
            started_at: None,
            ended_at: None,
            errors_in_level: 0,
            eliminated: false,
            level_completed: false,
            rng,
        }
    }

    // === Lifecycle ===

    /// Start the clock. Valid from `Waiting`, or from `Finished` as a fresh
    /// run over the same question list; a no-op while playing or paused.
    pub fn start(&mut self) {
        match self.status {
            SessionStatus::Waiting => {}
            SessionStatus::Finished => self.reset_run(),
            SessionStatus::Playing | SessionStatus::Paused => return,
        }

        self.status = SessionStatus::Playing;
        self.started_at = Some(Utc::now());
        self.time_remaining = self.questions.get(self.cursor).map_or(0, |q| q.time_budget);
        debug!("session {} started ({} questions)", self.id, self.questions.len());
    }

    fn reset_run(&mut self) {
        self.cursor = 0;
        self.score = 0;
        self.correct = 0;
        self.incorrect = 0;
        self.streak = 0;
        self.max_streak = 0;
        self.hints_used = 0;
        self.skips_used = 0;
        self.errors_in_level = 0;
        self.eliminated = false;
        self.level_completed = false;
        self.ended_at = None;
    }

    /// Suspend the clock. No-op outside `Playing`.
    pub fn pause(&mut self) {
        if self.status == SessionStatus::Playing {
            self.status = SessionStatus::Paused;
        }
    }

    /// Resume from `Paused`. No-op otherwise.
    pub fn resume(&mut self) {
        if self.status == SessionStatus::Paused {
            self.status = SessionStatus::Playing;
        }
    }

    fn finish(&mut self) {
        if self.status == SessionStatus::Finished {
            return;
        }
        self.status = SessionStatus::Finished;
        self.ended_at = Some(Utc::now());
        debug!(
            "session {} finished: score={} correct={}/{} eliminated={}",
            self.id,
            self.score,
            self.correct,
            self.correct + self.incorrect,
            self.eliminated
        );
    }

    // === Gameplay ===

    /// Submit an answer for the current question. Returns whether it was
    /// correct; `false` (without side effects) when no answer is accepted.
    ///
    /// A wrong answer in level mode counts against the level's error
    /// tolerance and, for elimination levels or once the tolerance is
    /// exceeded, ends the run in this same step.
    pub fn answer(&mut self, selected: i64) -> bool {
        if self.status != SessionStatus::Playing {
            return false;
        }
        let Some(question) = self.questions.get(self.cursor) else {
            return false;
        };

        let correct = question.is_correct(selected);
        let budget = question.time_budget;

        if correct {
            self.correct += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
            self.score +=
                points_for_answer(self.streak, self.time_remaining, budget, self.multiplier());
        } else {
            self.incorrect += 1;
            self.streak = 0;
            self.register_error();
        }

        correct
    }

    /// Count a miss against the level tolerance; ends the run when the
    /// level is elimination mode or the tolerance is now exceeded.
    /// Returns whether the session finished.
    fn register_error(&mut self) -> bool {
        let (elimination, max_errors) = match &self.kind {
            Kind::Level { def } => (def.elimination, def.max_errors),
            Kind::Classic { .. } => return false,
        };

        self.errors_in_level += 1;
        // Both conditions stay explicit: elimination levels trip on the
        // first miss, others only once the tolerance is exceeded.
        if elimination || self.errors_in_level > max_errors {
            self.eliminated = true;
            self.finish();
            return true;
        }
        false
    }

    /// Move to the next question, resetting its time budget. When the list
    /// is exhausted, flags level completion (level mode) and finishes.
    /// Returns whether a new question became current.
    pub fn advance(&mut self) -> bool {
        if self.status != SessionStatus::Playing {
            return false;
        }

        self.cursor += 1;
        match self.questions.get(self.cursor) {
            Some(question) => {
                self.time_remaining = question.time_budget;
                true
            }
            None => {
                if matches!(self.kind, Kind::Level { .. }) {
                    self.level_completed = true;
                }
                self.finish();
                false
            }
        }
    }

    /// Consume a hint: reveals one guaranteed-wrong option. `None` when
    /// hints are exhausted, the level forbids them, or no question is live.
    pub fn use_hint(&mut self) -> Option<Hint> {
        if self.status != SessionStatus::Playing
            || self.is_elimination_level()
            || self.hints_used >= self.max_hints
        {
            return None;
        }

        let question = self.questions.get(self.cursor)?;
        let wrong: Vec<i64> = question
            .options
            .iter()
            .copied()
            .filter(|&v| v != question.answer)
            .collect();
        let eliminated = *self.rng.choose(&wrong)?;

        self.hints_used += 1;
        Some(Hint {
            eliminated,
            text: format!("It is not {eliminated}"),
        })
    }

    /// Skip the current question: resets the streak and advances. Returns
    /// `false` when skips are exhausted or the level forbids them.
    pub fn skip(&mut self) -> bool {
        if self.status != SessionStatus::Playing
            || self.is_elimination_level()
            || self.skips_used >= self.max_skips
        {
            return false;
        }

        self.skips_used += 1;
        self.streak = 0;
        self.advance();
        true
    }

    /// Caller-driven time update. Reaching zero counts as a wrong answer:
    /// level runs apply the elimination/error rules, endless classic runs
    /// finish, standard classic runs move on.
    pub fn tick(&mut self, remaining_seconds: u32) {
        if self.status != SessionStatus::Playing {
            return;
        }

        self.time_remaining = remaining_seconds;
        if remaining_seconds > 0 {
            return;
        }

        self.incorrect += 1;
        self.streak = 0;

        if matches!(self.kind, Kind::Level { .. }) {
            if !self.register_error() {
                self.advance();
            }
        } else if self.is_endless() {
            self.finish();
        } else {
            self.advance();
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.status == SessionStatus::Finished {
            None
        } else {
            self.questions.get(self.cursor)
        }
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.max_hints - self.hints_used
    }

    #[must_use]
    pub fn skips_remaining(&self) -> u32 {
        self.max_skips - self.skips_used
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn is_level_completed(&self) -> bool {
        self.level_completed
    }

    #[must_use]
    pub fn errors_in_level(&self) -> u32 {
        self.errors_in_level
    }

    /// Bound level number, for level sessions.
    #[must_use]
    pub fn level_number(&self) -> Option<u32> {
        match &self.kind {
            Kind::Level { def } => Some(def.number),
            Kind::Classic { .. } => None,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        match &self.kind {
            Kind::Classic { difficulty, .. } => *difficulty,
            Kind::Level { def } => def.tier,
        }
    }

    fn multiplier(&self) -> f64 {
        match &self.kind {
            Kind::Classic { difficulty, .. } => difficulty.score_multiplier(),
            Kind::Level { def } => def.score_multiplier,
        }
    }

    fn is_elimination_level(&self) -> bool {
        matches!(&self.kind, Kind::Level { def } if def.elimination)
    }

    fn is_endless(&self) -> bool {
        matches!(
            &self.kind,
            Kind::Classic {
                mode: SessionMode::Endless,
                ..
            }
        )
    }

    /// Packaged outcome for [`LevelLedger::complete_level`]. `None` until
    /// the run finished cleanly; eliminated runs never produce one.
    #[must_use]
    pub fn level_result(&self) -> Option<LevelOutcome> {
        if self.status != SessionStatus::Finished || self.eliminated || !self.level_completed {
            return None;
        }
        let Kind::Level { def } = &self.kind else {
            return None;
        };

        Some(LevelOutcome {
            level: def.number,
            score: self.score,
            answered: self.correct + self.incorrect,
            correct: self.correct,
        })
    }

    /// Immutable copy of the session state for display.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            status: self.status,
            difficulty: self.difficulty(),
            level: self.level_number(),
            question_number: (self.cursor + 1).min(self.questions.len()),
            total_questions: self.questions.len(),
            current_question: self.current_question().cloned(),
            score: self.score,
            correct: self.correct,
            incorrect: self.incorrect,
            streak: self.streak,
            max_streak: self.max_streak,
            time_remaining: self.time_remaining,
            hints_remaining: self.hints_remaining(),
            skips_remaining: self.skips_remaining(),
            eliminated: self.eliminated,
            level_completed: self.level_completed,
            started_at: self.started_at,
            ended_at: self.ended_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session() -> Session {
        let mut session = Session::classic(Difficulty::Easy, SessionMode::Standard, 42);
        session.start();
        session
    }

    fn correct_answer(session: &Session) -> i64 {
        session.current_question().unwrap().answer
    }

    fn wrong_answer(session: &Session) -> i64 {
        let q = session.current_question().unwrap();
        *q.options.iter().find(|&&v| v != q.answer).unwrap()
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut session = Session::classic(Difficulty::Easy, SessionMode::Standard, 1);
        assert_eq!(session.status(), SessionStatus::Waiting);

        session.start();
        assert_eq!(session.status(), SessionStatus::Playing);

        session.pause();
        assert_eq!(session.status(), SessionStatus::Paused);

        session.resume();
        assert_eq!(session.status(), SessionStatus::Playing);
    }

    #[test]
    fn test_pause_resume_no_op_outside_their_states() {
        let mut session = Session::classic(Difficulty::Easy, SessionMode::Standard, 1);

        session.pause(); // waiting: no-op
        assert_eq!(session.status(), SessionStatus::Waiting);

        session.resume(); // waiting: no-op
        assert_eq!(session.status(), SessionStatus::Waiting);
    }

    #[test]
    fn test_answer_ignored_while_paused() {
        let mut session = playing_session();
        session.pause();

        let before = session.snapshot();
        assert!(!session.answer(correct_answer(&session)));
        let after = session.snapshot();

        assert_eq!(before.score, after.score);
        assert_eq!(before.correct, after.correct);
    }

    #[test]
    fn test_correct_answer_counts_and_scores() {
        let mut session = playing_session();
        session.tick(10); // below the time-bonus window

        assert!(session.answer(correct_answer(&session)));
        assert_eq!(session.correct(), 1);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let mut session = playing_session();
        session.tick(10);

        assert!(session.answer(correct_answer(&session)));
        session.advance();
        assert!(!session.answer(wrong_answer(&session)));

        assert_eq!(session.streak(), 0);
        assert_eq!(session.max_streak(), 1);
        assert_eq!(session.incorrect(), 1);
        // Classic sessions never eliminate.
        assert_eq!(session.status(), SessionStatus::Playing);
    }

    #[test]
    fn test_advance_through_all_questions_finishes() {
        let mut session = playing_session();

        for _ in 0..CLASSIC_QUESTION_COUNT - 1 {
            assert!(session.advance());
        }
        assert!(!session.advance());
        assert_eq!(session.status(), SessionStatus::Finished);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_hint_eliminates_wrong_option() {
        let mut session = playing_session();
        let answer = correct_answer(&session);

        let hint = session.use_hint().unwrap();
        assert_ne!(hint.eliminated, answer);
        assert!(session
            .current_question()
            .unwrap()
            .options
            .contains(&hint.eliminated));
    }

    #[test]
    fn test_hint_cap_enforced() {
        let mut session = playing_session();
        // Easy cap is 3.
        assert!(session.use_hint().is_some());
        assert!(session.use_hint().is_some());
        assert!(session.use_hint().is_some());
        assert!(session.use_hint().is_none());
        assert_eq!(session.hints_remaining(), 0);
    }

    #[test]
    fn test_skip_resets_streak_and_advances() {
        let mut session = playing_session();
        session.tick(10);
        session.answer(correct_answer(&session));
        session.advance();
        assert_eq!(session.streak(), 1);

        let before = session.snapshot().question_number;
        assert!(session.skip());
        assert_eq!(session.streak(), 0);
        assert_eq!(session.snapshot().question_number, before + 1);
    }

    #[test]
    fn test_skip_cap_enforced() {
        let mut session = playing_session();

        assert!(session.skip());
        assert!(session.skip());
        assert!(session.skip());
        assert!(!session.skip());
    }

    #[test]
    fn test_timeout_standard_advances() {
        let mut session = playing_session();

        session.tick(0);

        assert_eq!(session.incorrect(), 1);
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.snapshot().question_number, 2);
    }

    #[test]
    fn test_timeout_endless_finishes() {
        let mut session = Session::classic(Difficulty::Easy, SessionMode::Endless, 7);
        session.start();

        session.tick(0);

        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(session.incorrect(), 1);
    }

    #[test]
    fn test_tick_updates_remaining_time() {
        let mut session = playing_session();
        session.tick(12);
        assert_eq!(session.time_remaining(), 12);
        assert_eq!(session.status(), SessionStatus::Playing);
    }

    #[test]
    fn test_restart_after_finish_resets_run() {
        let mut session = playing_session();
        session.tick(10);
        session.answer(correct_answer(&session));
        while session.advance() {}
        assert_eq!(session.status(), SessionStatus::Finished);

        session.start();
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.correct(), 0);
        assert_eq!(session.snapshot().question_number, 1);
        assert!(session.snapshot().ended_at.is_none());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = playing_session();
        let snapshot = session.snapshot();

        session.tick(10);
        session.answer(correct_answer(&session));

        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.correct, 0);
    }

    #[test]
    fn test_classic_has_no_level_result() {
        let mut session = playing_session();
        while session.advance() {}
        assert!(session.level_result().is_none());
    }
}
