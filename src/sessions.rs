use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use log::info;

use crate::session::{AnswerResult, Event, ModeController, SessionState};
use crate::store::ItemStore;
use crate::view::{current_view, View};

/// Opaque handle the host assigns to one user's session, such as a chat id
/// or a browser session hash. The engine never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SessionId(pub i64);

/// The long-lived object a host keeps across its stateless render passes:
/// the shared vocabulary pool plus one [`SessionState`] per session id.
///
/// States appear on first contact with their id, initialized to the study
/// screen, and stay for the life of the registry. There is no eviction;
/// sessions simply end when the process does.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    store: ItemStore,
    controller: ModeController,
    sessions: Mutex<HashMap<SessionId, SessionState>>,
}

impl SessionRegistry {
    pub fn new(store: ItemStore) -> Self {
        Self::with_controller(store, ModeController::new())
    }

    /// A registry over the built-in seed vocabulary.
    pub fn seeded() -> Self {
        let registry = Self::new(ItemStore::seeded());
        info!(
            "session registry ready with {} seed vocabulary items",
            registry.store.len()
        );
        registry
    }

    pub fn with_controller(store: ItemStore, controller: ModeController) -> Self {
        Self {
            store,
            controller,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Applies one event to the session behind `id`, creating the session
    /// on the spot if this is its first event.
    pub fn handle(&self, id: SessionId, event: Event) -> Option<AnswerResult> {
        let mut sessions = self.lock();
        let state = sessions.entry(id).or_default();
        self.controller
            .handle(state, &self.store, event, &mut rand::thread_rng())
    }

    /// The read model for the session behind `id`.
    pub fn view(&self, id: SessionId) -> View {
        let mut sessions = self.lock();
        let state = sessions.entry(id).or_default();
        current_view(state, &self.store)
    }

    /// A copy of the raw session state, for hosts that render from the
    /// state directly or want to externalize it.
    pub fn state(&self, id: SessionId) -> SessionState {
        self.lock().entry(id).or_default().clone()
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, SessionState>> {
        self.sessions.lock().expect("session map mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Mode;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_contact_creates_a_default_session() {
        let registry = SessionRegistry::seeded();

        assert_eq!(registry.state(SessionId(7)), SessionState::default());
        match registry.view(SessionId(7)) {
            View::Study { index: 0, total: 5, item } => {
                assert_eq!(item.expect("seeded pool has cards").answer, "되다");
            }
            other => panic!("expected the first study card, got {:?}", other),
        }
    }

    #[test]
    fn sessions_progress_independently() {
        let registry = SessionRegistry::seeded();
        let first = SessionId(1);
        let second = SessionId(2);

        registry.handle(first, Event::StudyNext);
        registry.handle(first, Event::StudyNext);
        registry.handle(second, Event::SelectMode(Mode::Quiz));

        assert_eq!(registry.state(first).study_index, 2);
        assert_eq!(registry.state(first).mode, Mode::Study);
        assert!(registry.state(first).quiz_questions.is_empty());

        assert_eq!(registry.state(second).study_index, 0);
        assert_eq!(registry.state(second).mode, Mode::Quiz);
        assert_eq!(registry.state(second).quiz_questions.len(), 5);
    }

    #[test]
    fn controller_configuration_applies_to_every_session() {
        let registry = SessionRegistry::with_controller(
            ItemStore::seeded(),
            ModeController::with_quiz_limit(3),
        );

        registry.handle(SessionId(1), Event::SelectMode(Mode::Quiz));
        assert_eq!(registry.state(SessionId(1)).quiz_questions.len(), 3);
    }
}
