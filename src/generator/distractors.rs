//! Distractor construction.
//!
//! Distractors are sampled as offsets from the correct answer inside
//! `±max(10, f × |answer|)` with `f` drawn from `[0.3, 0.5)`, clamped to
//! non-negative, with collisions (against the answer and each other)
//! rejected. The final option order is shuffled so the correct answer's
//! position is not predictable.

use crate::core::QuizRng;

use super::question::Options;

/// Build a shuffled option set of `count` values containing `answer`
/// exactly once.
///
/// `count` must be at least 2; the generator always asks for 3 or 4.
pub fn build_options(answer: i64, count: usize, rng: &mut QuizRng) -> Options {
    debug_assert!(count >= 2);

    let factor = 0.3 + 0.2 * rng.gen_f64();
    let mut spread = ((answer.abs() as f64) * factor).max(10.0) as i64;

    let mut options = Options::new();
    options.push(answer);

    let mut rejects = 0u32;
    while options.len() < count {
        let offset = rng.gen_range_inclusive(-spread..=spread);
        let candidate = (answer + offset).max(0);

        if candidate == answer || options.contains(&candidate) {
            rejects += 1;
            // Tight spreads around small answers can stall; widen and retry.
            if rejects >= 50 {
                spread *= 2;
                rejects = 0;
            }
            continue;
        }

        options.push(candidate);
    }

    rng.shuffle(&mut options);
    options
}
