mod generate;

pub use generate::generate;

/// One multiple-choice question, cut loose from the item it came from: a
/// later edit of the vocabulary pool can never reach into a quiz that is
/// already underway.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizQuestion {
    /// The fill-in-the-blank sentence shown to the user.
    pub sentence: String,
    /// Answer and distractors in presentation order, no duplicates.
    pub choices: Vec<String>,
    pub answer: String,
    pub explanation: String,
}
