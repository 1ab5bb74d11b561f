use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::QuizQuestion;
use crate::store::Item;

/// Builds a fresh randomized quiz from a snapshot of the vocabulary pool.
///
/// The snapshot is shuffled to pick the question order, then truncated to
/// `limit` questions when a limit is given. Every call reshuffles from
/// scratch, so two quizzes over the same pool will usually disagree on both
/// question order and choice order.
///
/// For every question: the answer appears in `choices` exactly once, and no
/// choice string repeats, whatever duplicates the source item carried.
pub fn generate(items: &[Item], limit: Option<usize>, rng: &mut impl Rng) -> Vec<QuizQuestion> {
    let mut pool: Vec<Item> = items.to_vec();
    pool.shuffle(rng);
    if let Some(limit) = limit {
        pool.truncate(limit);
    }

    let mut questions = Vec::with_capacity(pool.len());
    for item in &pool {
        questions.push(question_from_item(item, rng));
    }
    questions
}

fn question_from_item(item: &Item, rng: &mut impl Rng) -> QuizQuestion {
    // Choice list = answer + distractors, deduplicated keeping the first
    // occurrence, so the answer can never be squeezed out by a distractor
    // that spells the same thing.
    let choices = {
        let mut choices: Vec<String> = Vec::with_capacity(1 + item.distractors.len());
        choices.push(item.answer.clone());
        for distractor in &item.distractors {
            if !choices.contains(distractor) {
                choices.push(distractor.clone());
            }
        }
        // We shuffle the choices so the correct answer isn't always the
        // first one on screen.
        choices.shuffle(rng);
        choices
    };

    QuizQuestion {
        sentence: item.sentence.clone(),
        choices,
        answer: item.answer.clone(),
        explanation: item.explanation.clone(),
    }
}
