use crate::quiz::QuizQuestion;
use crate::session::{Mode, SessionState};
use crate::store::{Item, ItemStore};

/// The data the host draws after a transition. One variant per screen; the
/// engine decides which one applies, the host decides what it looks like.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum View {
    /// The flashcard at the study cursor. `item` is `None` only when the
    /// pool is empty, which a host normally prevents by not offering study
    /// mode without words.
    Study {
        item: Option<Item>,
        index: usize,
        total: usize,
    },
    /// The quiz question waiting for an answer.
    Quiz {
        question: QuizQuestion,
        index: usize,
        total: usize,
    },
    /// The quiz ran out of questions; show the final score.
    QuizFinished { score: usize, total: usize },
    /// The whole vocabulary in insertion order.
    Review { items: Vec<Item> },
}

/// Builds the read model for one session against the shared pool.
pub fn current_view(state: &SessionState, store: &ItemStore) -> View {
    match state.mode {
        Mode::Study => {
            let items = store.snapshot();
            View::Study {
                item: items.get(state.study_index).cloned(),
                index: state.study_index,
                total: items.len(),
            }
        }
        Mode::Quiz => {
            if state.quiz_finished() {
                View::QuizFinished {
                    score: state.score,
                    total: state.quiz_questions.len(),
                }
            } else {
                View::Quiz {
                    question: state.quiz_questions[state.quiz_index].clone(),
                    index: state.quiz_index,
                    total: state.quiz_questions.len(),
                }
            }
        }
        Mode::Review => View::Review {
            items: store.snapshot(),
        },
    }
}
