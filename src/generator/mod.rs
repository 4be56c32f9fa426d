//! Procedural question generation.
//!
//! The generator is a pure function family: given a category and a
//! [`DifficultyContext`], it draws operands from tier-dependent ranges,
//! builds the prompt and answer, then attaches a shuffled distractor set
//! (see [`distractors`]). All randomness flows through the injected
//! [`QuizRng`], so a fixed seed reproduces an identical question list.

pub mod arithmetic;
pub mod distractors;
pub mod question;
pub mod sequence;

pub use question::{Category, Options, Question, QuestionId};

use crate::core::{DifficultyContext, QuizRng};

/// Generate one question of the given category.
pub fn generate(
    id: QuestionId,
    category: Category,
    ctx: &DifficultyContext,
    rng: &mut QuizRng,
) -> Question {
    let (prompt, answer) = match category {
        Category::Sum => arithmetic::sum(ctx, rng),
        Category::Difference => arithmetic::difference(ctx, rng),
        Category::Product => arithmetic::product(ctx, rng),
        Category::Quotient => arithmetic::quotient(ctx, rng),
        Category::FillBlank => arithmetic::fill_blank(ctx, rng),
        Category::Sequence => sequence::sequence(ctx, rng),
    };

    let options = distractors::build_options(answer, ctx.tier.option_count(), rng);

    Question {
        id,
        prompt,
        answer,
        options,
        category,
        time_budget: ctx.time_budget,
    }
}

/// Generate a fixed-length question list, picking each question's category
/// uniformly from `categories`.
///
/// Returns an empty list if `categories` is empty (levels always supply at
/// least one operation).
pub fn generate_set(
    categories: &[Category],
    count: usize,
    ctx: &DifficultyContext,
    rng: &mut QuizRng,
) -> im::Vector<Question> {
    let mut questions = im::Vector::new();
    for i in 0..count {
        let Some(&category) = rng.choose(categories) else {
            break;
        };
        questions.push_back(generate(QuestionId::new(i as u32), category, ctx, rng));
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    #[test]
    fn test_generate_stamps_context_budget() {
        let mut rng = QuizRng::new(1);
        let ctx = DifficultyContext::classic(Difficulty::Medium);

        let q = generate(QuestionId::new(0), Category::Sum, &ctx, &mut rng);
        assert_eq!(q.time_budget, 20);
        assert_eq!(q.category, Category::Sum);
    }

    #[test]
    fn test_option_count_follows_tier() {
        let mut rng = QuizRng::new(2);

        let easy = generate(
            QuestionId::new(0),
            Category::Sum,
            &DifficultyContext::classic(Difficulty::Easy),
            &mut rng,
        );
        let hard = generate(
            QuestionId::new(0),
            Category::Sum,
            &DifficultyContext::classic(Difficulty::Hard),
            &mut rng,
        );

        assert_eq!(easy.options.len(), 3);
        assert_eq!(hard.options.len(), 4);
    }

    #[test]
    fn test_generate_set_length_and_categories() {
        let mut rng = QuizRng::new(3);
        let ctx = DifficultyContext::classic(Difficulty::Easy);
        let allowed = [Category::Sum, Category::Difference];

        let questions = generate_set(&allowed, 10, &ctx, &mut rng);

        assert_eq!(questions.len(), 10);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id, QuestionId::new(i as u32));
            assert!(allowed.contains(&q.category));
        }
    }

    #[test]
    fn test_generate_set_deterministic_per_seed() {
        let ctx = DifficultyContext::classic(Difficulty::Medium);
        let allowed = [Category::Sum, Category::Product, Category::Quotient];

        let a = generate_set(&allowed, 10, &ctx, &mut QuizRng::new(77));
        let b = generate_set(&allowed, 10, &ctx, &mut QuizRng::new(77));

        assert_eq!(a, b);
    }
}
