//! Session engine for a Korean vocabulary trainer.
//!
//! Hosts for this engine are stateless by nature (a reactive web page that
//! reruns its whole script per click, a chat bot handler invoked per
//! message), so everything that must survive between two user interactions
//! lives here: the shared vocabulary pool, the randomized multiple-choice
//! quiz generation, and one study/quiz/review state machine per session.
//!
//! The host keeps a [`SessionRegistry`] alive, translates each user
//! interaction into an [`Event`], and draws whatever [`View`] the registry
//! reports afterwards. Rendering, input handling and the event loop stay on
//! the host's side of that line; nothing in here blocks or does I/O.

pub mod quiz;
pub mod session;
pub mod sessions;
pub mod store;
pub mod view;

pub use quiz::{generate, QuizQuestion};
pub use session::{AnswerResult, Event, Mode, ModeController, SessionState};
pub use sessions::{SessionId, SessionRegistry};
pub use store::{seed_items, Item, ItemStore};
pub use view::{current_view, View};
