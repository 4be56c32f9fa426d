//! Number-sequence questions: show the first terms, ask for the next.
//!
//! Four progressions: arithmetic, geometric, Fibonacci-like, and perfect
//! squares. Squares only appear at the hard tier.

use crate::core::{Difficulty, DifficultyContext, QuizRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Progression {
    Arithmetic,
    Geometric,
    Fibonacci,
    Squares,
}

pub fn sequence(ctx: &DifficultyContext, rng: &mut QuizRng) -> (String, i64) {
    let mut kinds = vec![
        Progression::Arithmetic,
        Progression::Geometric,
        Progression::Fibonacci,
    ];
    if ctx.tier == Difficulty::Hard {
        kinds.push(Progression::Squares);
    }

    let kind = *rng.choose(&kinds).unwrap_or(&Progression::Arithmetic);
    let (terms, answer) = match kind {
        Progression::Arithmetic => {
            let start = rng.gen_range_inclusive(1..=ctx.scale(10).max(2));
            let step = rng.gen_range_inclusive(2..=6);
            let terms: Vec<i64> = (0..4).map(|i| start + step * i).collect();
            (terms, start + step * 4)
        }
        Progression::Geometric => {
            let start = rng.gen_range_inclusive(1..=5);
            let ratio = rng.gen_range_inclusive(2..=3);
            let terms: Vec<i64> = (0..3).map(|i| start * ratio.pow(i)).collect();
            (terms, start * ratio.pow(3))
        }
        Progression::Fibonacci => {
            let a = rng.gen_range_inclusive(1..=5);
            let b = rng.gen_range_inclusive(a + 1..=a + 5);
            let terms = vec![a, b, a + b, a + 2 * b];
            let answer = terms[2] + terms[3];
            (terms, answer)
        }
        Progression::Squares => {
            let k = rng.gen_range_inclusive(2..=6);
            let terms: Vec<i64> = (k..k + 3).map(|n| n * n).collect();
            (terms, (k + 3) * (k + 3))
        }
    };

    let shown: Vec<String> = terms.iter().map(ToString::to_string).collect();
    (format!("{}, ?", shown.join(", ")), answer)
}
