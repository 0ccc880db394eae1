//! # Quiz
//!
//! One question = one correct butterfly + 4 distractors, shuffled.
//!
//! ## Selection
//! 1. Pick the correct answer uniformly from the whole catalog.
//! 2. Drop it from the pool (by id, not by value).
//! 3. Sample the distractors from the pool without replacement.
//! 4. Shuffle correct + distractors together.
//!
//! No seed contract, the handler hands in the thread-local rng. Tests pass a
//! seeded `StdRng` but only ever assert structure, never exact picks.
use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};
use serde::Serialize;

use crate::{error::AppError, models::Butterfly};

pub const OPTION_COUNT: usize = 5;
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub correct_answer: Butterfly,
    pub options: Vec<Butterfly>,
}

pub fn compose_question<R>(catalog: &[Butterfly], rng: &mut R) -> Result<QuizQuestion, AppError>
where
    R: Rng + ?Sized,
{
    if catalog.len() < OPTION_COUNT {
        return Err(AppError::InsufficientData(catalog.len()));
    }

    let correct = catalog
        .choose(rng)
        .ok_or(AppError::InsufficientData(catalog.len()))?;

    let pool: Vec<&Butterfly> = catalog.iter().filter(|b| b.id != correct.id).collect();

    let mut options: Vec<Butterfly> = pool
        .choose_multiple(rng, DISTRACTOR_COUNT.min(pool.len()))
        .map(|&b| b.clone())
        .collect();

    options.push(correct.clone());
    options.shuffle(rng);

    Ok(QuizQuestion {
        correct_answer: correct.clone(),
        options,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::models::NewButterfly;

    fn catalog(size: usize) -> Vec<Butterfly> {
        (1..=size)
            .map(|i| {
                NewButterfly {
                    common_name: format!("Butterfly {i}"),
                    latin_name: format!("Genus species{i}"),
                    image_url: format!("https://example.com/{i}.jpg"),
                    difficulty: (i % 3 + 1) as i64,
                }
                .with_id(i.to_string())
            })
            .collect()
    }

    #[test]
    fn test_insufficient_data() {
        let mut rng = StdRng::seed_from_u64(1);

        for size in 0..OPTION_COUNT {
            let result = compose_question(&catalog(size), &mut rng);
            assert!(matches!(result, Err(AppError::InsufficientData(n)) if n == size));
        }
    }

    #[test]
    fn test_question_shape() {
        let mut rng = StdRng::seed_from_u64(7);

        for size in [5, 6, 12, 30, 100] {
            let catalog = catalog(size);

            for _ in 0..200 {
                let question = compose_question(&catalog, &mut rng).unwrap();
                let ids: HashSet<_> = question.options.iter().map(|b| &b.id).collect();

                assert_eq!(question.options.len(), OPTION_COUNT);
                assert_eq!(ids.len(), OPTION_COUNT);
                assert_eq!(
                    question
                        .options
                        .iter()
                        .filter(|b| **b == question.correct_answer)
                        .count(),
                    1
                );
                assert!(question.options.iter().all(|b| catalog.contains(b)));
            }
        }
    }

    #[test]
    fn test_exact_catalog_uses_every_record() {
        let catalog = catalog(OPTION_COUNT);
        let question = compose_question(&catalog, &mut rand::rng()).unwrap();

        let mut ids: Vec<_> = question.options.iter().map(|b| b.id.clone()).collect();
        ids.sort();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_correct_answer_roughly_uniform() {
        let catalog = catalog(10);
        let draws = 20_000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut rng = rand::rng();

        for _ in 0..draws {
            let question = compose_question(&catalog, &mut rng).unwrap();
            *counts.entry(question.correct_answer.id).or_default() += 1;
        }

        // expected 2000 per id, sd ~42
        assert_eq!(counts.len(), catalog.len());
        for (id, count) in counts {
            assert!((1600..=2400).contains(&count), "id {id} drawn {count} times");
        }
    }

    #[test]
    fn test_option_order_varies() {
        let catalog = catalog(OPTION_COUNT);
        let mut rng = StdRng::seed_from_u64(42);

        let positions: HashSet<usize> = (0..200)
            .map(|_| {
                let question = compose_question(&catalog, &mut rng).unwrap();
                question
                    .options
                    .iter()
                    .position(|b| b.id == question.correct_answer.id)
                    .unwrap()
            })
            .collect();

        assert_eq!(positions.len(), OPTION_COUNT);
    }
}
