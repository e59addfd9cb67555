//! Session randomization — turns the static bank into one playable run.
//!
//! A session is a fresh permutation of the bank where every question carries
//! exactly 4 shuffled options: the parsed ones plus distractors drawn from
//! the shared pool (placeholders when the pool runs dry). Neither the bank
//! nor the pool is ever mutated; everything here works on per-session
//! copies, so concurrent sessions over the same bank are safe.

use crate::quiz_engine::models::{AnswerOption, Question, SessionQuestion};
use crate::quiz_engine::normalize::normalize;
use crate::quiz_engine::rng::RandomSource;

/// Number of options every session question is normalized to.
pub const SESSION_OPTION_COUNT: usize = 4;

/// Build one randomized session from the bank and the distractor pool.
///
/// Question order is a uniform Fisher-Yates permutation; each question's
/// options are cloned, padded to exactly [`SESSION_OPTION_COUNT`] and
/// shuffled. Exactly one option stays correct throughout.
pub fn start_session<R: RandomSource>(
    bank: &[Question],
    pool: &[String],
    rng: &mut R,
) -> Vec<SessionQuestion> {
    let mut order: Vec<&Question> = bank.iter().collect();
    shuffle(&mut order, rng);

    order
        .into_iter()
        .map(|question| {
            let mut options = question.options.clone();
            fill_distractors(&mut options, &question.correct_answer_text, pool, rng);
            shuffle(&mut options, rng);
            SessionQuestion {
                id: question.id.clone(),
                text: question.text.clone(),
                options,
                correct_answer_text: question.correct_answer_text.clone(),
                category: question.category.clone(),
                explanation: question.explanation.clone(),
            }
        })
        .collect()
}

/// Passing threshold for a session of `total` questions: `ceil(total * 0.8)`.
pub fn min_score(total: usize) -> usize {
    (total as f64 * 0.8).ceil() as usize
}

/// In-place Fisher-Yates shuffle driven by the injected source.
fn shuffle<T, R: RandomSource>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Normalize `options` to exactly [`SESSION_OPTION_COUNT`] entries.
///
/// Blocks that declared more than 4 options shed non-correct ones from the
/// end. Distractors are drawn uniformly without replacement from a
/// per-question working copy of the pool, excluding the correct answer's
/// normalized text and anything already among the options. When the filtered
/// pool runs out, generic placeholders fill the remaining slots. Added
/// options are never correct.
fn fill_distractors<R: RandomSource>(
    options: &mut Vec<AnswerOption>,
    correct_answer_text: &str,
    pool: &[String],
    rng: &mut R,
) {
    while options.len() > SESSION_OPTION_COUNT {
        match options.iter().rposition(|opt| !opt.is_correct) {
            Some(idx) => options.remove(idx),
            None => break,
        };
    }

    let mut present: Vec<String> = options.iter().map(|opt| normalize(&opt.text)).collect();
    let correct_key = normalize(correct_answer_text);

    let mut candidates: Vec<&String> = pool
        .iter()
        .filter(|text| {
            let key = normalize(text.as_str());
            !key.is_empty() && key != correct_key && !present.contains(&key)
        })
        .collect();

    while options.len() < SESSION_OPTION_COUNT && !candidates.is_empty() {
        let idx = rng.below(candidates.len());
        let text = candidates.remove(idx).clone();
        present.push(normalize(&text));
        options.push(AnswerOption {
            id: format!("X{}", options.len()),
            text,
            is_correct: false,
        });
    }

    while options.len() < SESSION_OPTION_COUNT {
        options.push(AnswerOption {
            id: format!("F{}", options.len()),
            text: format!("Opción {}", options.len() + 1),
            is_correct: false,
        });
    }
}
