//! Drives the engine the way a host UI would: one registry, opaque session
//! ids, events in, views out.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use vocab_quiz::{Event, Item, ItemStore, Mode, SessionId, SessionRegistry, View};

fn single_item_registry() -> SessionRegistry {
    let store = ItemStore::with_items(vec![Item::new(
        "되다".to_string(),
        "일이 잘 ___.".to_string(),
        vec!["돼다".to_string(), "되어다".to_string()],
        "'돼'는 '되어'의 준말이므로 기본형은 '되다'입니다.".to_string(),
    )]);
    SessionRegistry::new(store)
}

fn submit(choice: &str) -> Event {
    Event::QuizSubmit {
        choice: choice.to_string(),
    }
}

#[test]
fn one_word_quiz_from_start_to_retake() {
    let _ = pretty_env_logger::try_init();
    let registry = single_item_registry();
    let session = SessionId(1);

    // Entering quiz mode builds a one-question quiz over the pool.
    registry.handle(session, Event::SelectMode(Mode::Quiz));
    let state = registry.state(session);
    assert_eq!(state.quiz_questions.len(), 1);

    let question = state.quiz_questions[0].clone();
    assert_eq!(question.sentence, "일이 잘 ___.");
    assert_eq!(question.choices.len(), 3);
    assert!(question.choices.contains(&"되다".to_string()));
    let unique: HashSet<&String> = question.choices.iter().collect();
    assert_eq!(unique.len(), 3);

    // A wrong answer is reported back and uses up the question anyway.
    let result = registry
        .handle(session, submit("돼다"))
        .expect("a submit inside the quiz reports a result");
    assert!(!result.correct);
    assert_eq!(result.correct_answer, "되다");

    let state = registry.state(session);
    assert_eq!(state.score, 0);
    assert_eq!(state.quiz_index, 1);
    assert_eq!(
        registry.view(session),
        View::QuizFinished { score: 0, total: 1 }
    );

    // Leaving and re-entering quiz mode resumes the finished quiz rather
    // than dealing a new one.
    registry.handle(session, Event::SelectMode(Mode::Study));
    registry.handle(session, Event::SelectMode(Mode::Quiz));
    assert_eq!(registry.state(session).quiz_questions, state.quiz_questions);
    assert_eq!(registry.state(session).quiz_index, 1);

    // Reset clears the quiz; the next entry deals a fresh one and zeroes
    // the counters.
    registry.handle(session, Event::QuizReset);
    assert!(registry.state(session).quiz_questions.is_empty());

    registry.handle(session, Event::SelectMode(Mode::Quiz));
    let state = registry.state(session);
    assert_eq!(state.quiz_questions.len(), 1);
    assert_eq!(state.quiz_index, 0);
    assert_eq!(state.score, 0);

    // This time around, answer it right.
    let result = registry
        .handle(session, submit("되다"))
        .expect("a submit inside the quiz reports a result");
    assert!(result.correct);
    assert_eq!(
        registry.view(session),
        View::QuizFinished { score: 1, total: 1 }
    );
}

#[test]
fn words_added_mid_quiz_wait_for_the_next_deal() {
    let _ = pretty_env_logger::try_init();
    let registry = single_item_registry();
    let session = SessionId(1);

    registry.handle(session, Event::SelectMode(Mode::Quiz));
    let dealt = registry.state(session).quiz_questions.clone();

    registry.handle(
        session,
        Event::AddItem {
            answer: "며칠".to_string(),
            sentence: "___ 동안 여행을 다녀왔다.".to_string(),
            distractor1: "몇일".to_string(),
            distractor2: String::new(),
            explanation: "'몇일'은 표준어가 아닙니다.".to_string(),
        },
    );

    // The pool grew, the in-progress quiz did not.
    assert_eq!(registry.store().len(), 2);
    assert_eq!(registry.state(session).quiz_questions, dealt);

    // Play the quiz out and redeal: now the new word is in the draw.
    registry.handle(session, submit("되다"));
    registry.handle(session, Event::QuizReset);
    registry.handle(session, Event::SelectMode(Mode::Quiz));
    assert_eq!(registry.state(session).quiz_questions.len(), 2);
}

#[test]
fn the_vocabulary_pool_is_shared_but_progress_is_not() {
    let _ = pretty_env_logger::try_init();
    let registry = SessionRegistry::seeded();
    let writer = SessionId(10);
    let reader = SessionId(20);

    registry.handle(writer, Event::SelectMode(Mode::Quiz));
    registry.handle(
        writer,
        Event::AddItem {
            answer: "가르치다".to_string(),
            sentence: "선생님이 학생을 ___.".to_string(),
            distractor1: "가리키다".to_string(),
            distractor2: String::new(),
            explanation: "지식을 전할 때는 '가르치다'입니다.".to_string(),
        },
    );

    // The new word shows up in everyone's review listing...
    registry.handle(reader, Event::SelectMode(Mode::Review));
    match registry.view(reader) {
        View::Review { items } => {
            assert_eq!(items.len(), 6);
            assert_eq!(items.last().expect("listing is not empty").answer, "가르치다");
        }
        other => panic!("expected the review listing, got {:?}", other),
    }

    // ...but nobody inherited the writer's quiz.
    assert!(registry.state(reader).quiz_questions.is_empty());
    assert_eq!(registry.state(writer).quiz_questions.len(), 5);
}
