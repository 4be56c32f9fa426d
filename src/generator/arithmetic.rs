//! Sum, difference, product, quotient, and fill-in-the-blank builders.
//!
//! Each builder returns `(prompt, answer)`; option sets and time budgets
//! are attached by the caller in `generate`. Operand ranges widen with the
//! tier and, for level sessions, with the context's range multiplier.

use crate::core::{Difficulty, DifficultyContext, QuizRng};

/// Additive operand range for the tier, upper bound scaled by level.
fn additive_range(ctx: &DifficultyContext) -> (i64, i64) {
    let (lo, hi) = match ctx.tier {
        Difficulty::Easy => (1, 20),
        Difficulty::Medium => (10, 50),
        Difficulty::Hard => (25, 100),
    };
    (lo, ctx.scale(hi).max(lo + 1))
}

/// Multiplicative operand range; kept small so results stay boundable.
/// Scales with the square root of the level multiplier.
fn multiplicative_range(ctx: &DifficultyContext) -> (i64, i64) {
    let (lo, hi) = match ctx.tier {
        Difficulty::Easy => (2, 9),
        Difficulty::Medium => (3, 12),
        Difficulty::Hard => (6, 15),
    };
    let scaled_hi = ((hi as f64) * ctx.range_multiplier.sqrt()) as i64;
    (lo, scaled_hi.max(lo + 1))
}

pub fn sum(ctx: &DifficultyContext, rng: &mut QuizRng) -> (String, i64) {
    let (lo, hi) = additive_range(ctx);
    let a = rng.gen_range_inclusive(lo..=hi);
    let b = rng.gen_range_inclusive(lo..=hi);
    (format!("{a} + {b} = ?"), a + b)
}

pub fn difference(ctx: &DifficultyContext, rng: &mut QuizRng) -> (String, i64) {
    let (lo, hi) = additive_range(ctx);
    let mut a = rng.gen_range_inclusive(lo..=hi);
    let mut b = rng.gen_range_inclusive(lo..=hi);
    // Result must be non-negative.
    if b > a {
        std::mem::swap(&mut a, &mut b);
    }
    (format!("{a} − {b} = ?"), a - b)
}

pub fn product(ctx: &DifficultyContext, rng: &mut QuizRng) -> (String, i64) {
    let (lo, hi) = multiplicative_range(ctx);
    let a = rng.gen_range_inclusive(lo..=hi);
    let b = rng.gen_range_inclusive(lo..=hi);
    (format!("{a} × {b} = ?"), a * b)
}

pub fn quotient(ctx: &DifficultyContext, rng: &mut QuizRng) -> (String, i64) {
    let (lo, hi) = multiplicative_range(ctx);
    let divisor = rng.gen_range_inclusive(lo..=hi);
    let result = rng.gen_range_inclusive(lo..=hi);
    // Dividend built from the answer, so division is always exact.
    let dividend = divisor * result;
    (format!("{dividend} ÷ {divisor} = ?"), result)
}

pub fn fill_blank(ctx: &DifficultyContext, rng: &mut QuizRng) -> (String, i64) {
    let op = *rng.choose(&['+', '−', '×']).unwrap_or(&'+');

    let (a, b, result) = match op {
        '×' => {
            let (lo, hi) = multiplicative_range(ctx);
            let a = rng.gen_range_inclusive(lo..=hi);
            let b = rng.gen_range_inclusive(lo..=hi);
            (a, b, a * b)
        }
        '−' => {
            let (lo, hi) = additive_range(ctx);
            let mut a = rng.gen_range_inclusive(lo..=hi);
            let mut b = rng.gen_range_inclusive(lo..=hi);
            if b > a {
                std::mem::swap(&mut a, &mut b);
            }
            (a, b, a - b)
        }
        _ => {
            let (lo, hi) = additive_range(ctx);
            let a = rng.gen_range_inclusive(lo..=hi);
            let b = rng.gen_range_inclusive(lo..=hi);
            (a, b, a + b)
        }
    };

    // Hide either operand; the hidden value is the answer.
    if rng.gen_bool(0.5) {
        (format!("? {op} {b} = {result}"), a)
    } else {
        (format!("{a} {op} ? = {result}"), b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn ctx(tier: Difficulty) -> DifficultyContext {
        DifficultyContext::classic(tier)
    }

    #[test]
    fn test_difference_never_negative() {
        let mut rng = QuizRng::new(5);
        for _ in 0..200 {
            let (_, answer) = difference(&ctx(Difficulty::Hard), &mut rng);
            assert!(answer >= 0);
        }
    }

    #[test]
    fn test_quotient_exact() {
        let mut rng = QuizRng::new(9);
        for _ in 0..200 {
            let (prompt, answer) = quotient(&ctx(Difficulty::Medium), &mut rng);

            // Parse "dividend ÷ divisor = ?" back out and check exactness.
            let mut parts = prompt.split(' ');
            let dividend: i64 = parts.next().unwrap().parse().unwrap();
            parts.next();
            let divisor: i64 = parts.next().unwrap().parse().unwrap();

            assert_eq!(dividend, divisor * answer);
            assert!(answer >= 0);
        }
    }

    #[test]
    fn test_fill_blank_hidden_operand_solves_equation() {
        let mut rng = QuizRng::new(13);
        for _ in 0..200 {
            let (prompt, answer) = fill_blank(&ctx(Difficulty::Medium), &mut rng);

            let (lhs, rhs) = prompt.split_once(" = ").unwrap();
            let result: i64 = rhs.parse().unwrap();
            let mut parts = lhs.split(' ');
            let left = parts.next().unwrap();
            let op = parts.next().unwrap();
            let right = parts.next().unwrap();

            let resolve = |s: &str| if s == "?" { answer } else { s.parse().unwrap() };
            let (a, b) = (resolve(left), resolve(right));

            let computed = match op {
                "+" => a + b,
                "−" => a - b,
                "×" => a * b,
                other => panic!("unexpected operator {other}"),
            };
            assert_eq!(computed, result, "prompt: {prompt}");
            assert!(answer >= 0);
        }
    }

    #[test]
    fn test_harder_tiers_use_wider_ranges() {
        let mut rng = QuizRng::new(21);

        let max_easy = (0..100)
            .map(|_| sum(&ctx(Difficulty::Easy), &mut rng).1)
            .max()
            .unwrap();
        let max_hard = (0..100)
            .map(|_| sum(&ctx(Difficulty::Hard), &mut rng).1)
            .max()
            .unwrap();

        assert!(max_hard > max_easy);
    }
}
