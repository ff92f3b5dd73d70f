//! In-memory session store.
//!
//! Stand-in for the hosting framework's session storage: each session id maps
//! to that session's ordered list collection. Collections live for the
//! process lifetime; there is no persistence and no explicit teardown.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::models::TodoList;

/// Cheaply clonable handle to the shared session state.
///
/// All access goes through one lock, so a request's read-apply-write cycle in
/// [`SessionStore::with_lists`] cannot interleave with another request for
/// the same session.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Vec<TodoList>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's list collection; empty if the session has none yet.
    pub fn get_lists(&self, session: Uuid) -> Vec<TodoList> {
        let sessions = self.sessions.lock().expect("session store lock poisoned");
        sessions.get(&session).cloned().unwrap_or_default()
    }

    /// Replace the session's list collection.
    pub fn set_lists(&self, session: Uuid, lists: Vec<TodoList>) {
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");
        sessions.insert(session, lists);
    }

    /// Run `f` against the session's collection under the store lock.
    ///
    /// First access initializes the collection to empty. Mutations applied by
    /// `f` are persisted before the lock is released.
    pub fn with_lists<F, R>(&self, session: Uuid, f: F) -> R
    where
        F: FnOnce(&mut Vec<TodoList>) -> R,
    {
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");
        f(sessions.entry(session).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_session_has_empty_collection() {
        let store = SessionStore::new();
        assert!(store.get_lists(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = SessionStore::new();
        let session = Uuid::new_v4();

        store.set_lists(session, vec![TodoList::new("Chores")]);

        let lists = store.get_lists(session);
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Chores");
    }

    #[test]
    fn with_lists_persists_mutations() {
        let store = SessionStore::new();
        let session = Uuid::new_v4();

        store.with_lists(session, |lists| lists.push(TodoList::new("Groceries")));

        assert_eq!(store.get_lists(session).len(), 1);
    }

    #[test]
    fn sessions_are_independent() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.set_lists(a, vec![TodoList::new("Mine")]);

        assert_eq!(store.get_lists(a).len(), 1);
        assert!(store.get_lists(b).is_empty());
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::new();
        let session = Uuid::new_v4();

        store.clone().set_lists(session, vec![TodoList::new("Shared")]);

        assert_eq!(store.get_lists(session).len(), 1);
    }
}
