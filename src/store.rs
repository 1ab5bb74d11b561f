use std::sync::{Mutex, MutexGuard};

use log::debug;

/// A single vocabulary entry: the correct spelling, the decoy spellings it is
/// commonly confused with, a short explanation, and a fill-in-the-blank
/// sentence using `___` as the placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    pub answer: String,
    pub distractors: Vec<String>,
    pub explanation: String,
    pub sentence: String,
}

impl Item {
    /// Builds an item from raw form input. The answer is trimmed; distractor
    /// slots that are blank, repeat an earlier distractor, or collide with
    /// the answer are dropped so the choice list stays clean.
    pub fn new(
        answer: String,
        sentence: String,
        distractors: Vec<String>,
        explanation: String,
    ) -> Self {
        let answer = answer.trim().to_string();

        let mut cleaned: Vec<String> = Vec::with_capacity(distractors.len());
        for distractor in distractors {
            let distractor = distractor.trim().to_string();
            if distractor.is_empty() || distractor == answer || cleaned.contains(&distractor) {
                continue;
            }
            cleaned.push(distractor);
        }

        Self {
            answer,
            distractors: cleaned,
            explanation,
            sentence,
        }
    }
}

/// The shared vocabulary pool. Items are only ever appended, never edited or
/// removed, and insertion order is what the review listing shows. The pool
/// may be shared by many sessions, so the backing list sits behind a mutex
/// and readers get detached copies.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Mutex<Vec<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with the built-in seed vocabulary.
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Appends an item to the end of the pool. Items without an answer are
    /// dropped on the floor; an empty submit button press is not worth an
    /// error to the user.
    pub fn append(&self, item: Item) {
        if item.answer.trim().is_empty() {
            debug!("dropping a vocabulary item with an empty answer");
            return;
        }
        self.lock().push(item);
    }

    /// A detached copy of the pool in insertion order. Appends that happen
    /// after this call are not visible through the returned list.
    pub fn snapshot(&self) -> Vec<Item> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().expect("vocabulary pool mutex poisoned")
    }
}

// The starter vocabulary: Korean spellings that are routinely written the
// wrong way. Each row is (answer, sentence, distractors, explanation).
const SEED_WORDS: [(&str, &str, &[&str], &str); 5] = [
    (
        "되다",
        "일이 잘 ___.",
        &["돼다", "되어다"],
        "'돼'는 '되어'의 준말이므로 '돼다'라는 기본형은 없습니다. 기본형은 언제나 '되다'입니다.",
    ),
    (
        "며칠",
        "___ 동안 여행을 다녀왔다.",
        &["몇일", "몇 일"],
        "'몇일'은 표준어가 아닙니다. 어원이 분명하지 않아 소리 나는 대로 '며칠'로 적습니다.",
    ),
    (
        "낫다",
        "푹 쉬면 감기가 빨리 ___.",
        &["낳다", "났다"],
        "병이 회복될 때는 '낫다'를 씁니다. '낳다'는 아이를 출산하거나 결과를 만들어 낼 때 씁니다.",
    ),
    (
        "맞히다",
        "어려운 문제의 정답을 ___.",
        &["맞추다", "맞치다"],
        "정답을 골라내는 것은 '맞히다'입니다. '맞추다'는 퍼즐을 맞추듯 서로 대어 볼 때 씁니다.",
    ),
    (
        "왠지",
        "오늘은 ___ 좋은 일이 생길 것 같다.",
        &["웬지"],
        "'왠지'는 '왜인지'의 준말입니다. '웬'은 '웬일', '웬만큼'처럼 관형사로만 씁니다.",
    ),
];

/// The fixed seed vocabulary a fresh store starts with.
pub fn seed_items() -> Vec<Item> {
    SEED_WORDS
        .iter()
        .map(|(answer, sentence, distractors, explanation)| {
            Item::new(
                answer.to_string(),
                sentence.to_string(),
                distractors.iter().map(|d| d.to_string()).collect(),
                explanation.to_string(),
            )
        })
        .collect()
}
