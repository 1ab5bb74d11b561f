use log::debug;
use rand::Rng;

use crate::quiz::{self, QuizQuestion};
use crate::store::{Item, ItemStore};

/// What a session is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    /// Walking through the vocabulary one card at a time.
    #[default]
    Study,
    /// Answering a generated multiple-choice quiz.
    Quiz,
    /// Browsing the full vocabulary listing.
    Review,
}

/// Everything one session needs to survive between two stateless render
/// passes of the host. Lives in a [`crate::SessionRegistry`] and is only
/// written through [`ModeController::handle`]; the host reads it (or a
/// [`crate::View`] built from it) to draw the next screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionState {
    pub mode: Mode,
    /// Cursor into the vocabulary pool while studying.
    pub study_index: usize,
    /// The quiz being answered. Generated from a pool snapshot, so later
    /// appends never alter it; empty until quiz mode is first entered.
    pub quiz_questions: Vec<QuizQuestion>,
    /// Cursor into `quiz_questions`; once it reaches the end the quiz is
    /// finished and only `QuizReset` can start over.
    pub quiz_index: usize,
    pub score: usize,
}

impl SessionState {
    /// A finished quiz is not a separate mode, just a cursor that ran off
    /// the end of the question list.
    pub fn quiz_finished(&self) -> bool {
        self.quiz_index >= self.quiz_questions.len()
    }
}

/// One user interaction, as reported by the host UI.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Event {
    SelectMode(Mode),
    StudyPrev,
    StudyNext,
    QuizSubmit {
        choice: String,
    },
    QuizReset,
    /// The add-a-word form. The two distractor slots may come in blank.
    AddItem {
        answer: String,
        sentence: String,
        distractor1: String,
        distractor2: String,
        explanation: String,
    },
}

/// What the UI shows right after a quiz answer was submitted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

/// Turns events into state transitions.
///
/// Every event is handled totally: an event that makes no sense in the
/// current mode (a quiz answer while studying, a reset mid-quiz) is logged
/// at debug level and ignored. Hosts re-render between events, so a stale
/// click can always arrive after a mode switch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeController {
    /// Cap on the number of questions per generated quiz. `None` quizzes
    /// the whole pool.
    pub quiz_limit: Option<usize>,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quiz_limit(limit: usize) -> Self {
        Self {
            quiz_limit: Some(limit),
        }
    }

    /// Applies one event to one session. Only `QuizSubmit` reports anything
    /// back; every other event speaks through the state itself.
    pub fn handle(
        &self,
        state: &mut SessionState,
        store: &ItemStore,
        event: Event,
        rng: &mut impl Rng,
    ) -> Option<AnswerResult> {
        match event {
            Event::SelectMode(mode) => {
                state.mode = mode;
                // Entering quiz mode only rebuilds the quiz when the old one
                // was cleared; switching away and back mid-quiz resumes it.
                if mode == Mode::Quiz && state.quiz_questions.is_empty() {
                    state.quiz_questions = quiz::generate(&store.snapshot(), self.quiz_limit, rng);
                    state.quiz_index = 0;
                    state.score = 0;
                    debug!(
                        "generated a fresh quiz with {} questions",
                        state.quiz_questions.len()
                    );
                }
                None
            }
            Event::StudyPrev => {
                if state.mode != Mode::Study {
                    debug!("ignoring StudyPrev outside of study mode");
                    return None;
                }
                let last = store.len().saturating_sub(1);
                state.study_index = state.study_index.saturating_sub(1).min(last);
                None
            }
            Event::StudyNext => {
                if state.mode != Mode::Study {
                    debug!("ignoring StudyNext outside of study mode");
                    return None;
                }
                let last = store.len().saturating_sub(1);
                state.study_index = state.study_index.saturating_add(1).min(last);
                None
            }
            Event::QuizSubmit { choice } => {
                if state.mode != Mode::Quiz {
                    debug!("ignoring QuizSubmit outside of quiz mode");
                    return None;
                }
                let (correct, correct_answer, explanation) =
                    match state.quiz_questions.get(state.quiz_index) {
                        Some(question) => (
                            choice == question.answer,
                            question.answer.clone(),
                            question.explanation.clone(),
                        ),
                        None => {
                            debug!("ignoring QuizSubmit on a finished quiz");
                            return None;
                        }
                    };

                if correct {
                    state.score += 1;
                }
                // A wrong answer still advances the quiz; there is no retry.
                state.quiz_index += 1;

                Some(AnswerResult {
                    correct,
                    correct_answer,
                    explanation,
                })
            }
            Event::QuizReset => {
                if state.mode != Mode::Quiz || !state.quiz_finished() {
                    debug!("ignoring QuizReset before the quiz is finished");
                    return None;
                }
                // Only the question list is cleared here. quiz_index and
                // score keep their values until the next SelectMode(Quiz)
                // synthesizes a quiz and re-zeroes both.
                state.quiz_questions.clear();
                None
            }
            Event::AddItem {
                answer,
                sentence,
                distractor1,
                distractor2,
                explanation,
            } => {
                store.append(Item::new(
                    answer,
                    sentence,
                    vec![distractor1, distractor2],
                    explanation,
                ));
                None
            }
        }
    }
}
