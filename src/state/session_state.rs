// ============================================================================
// SESSION STATE - Sessions of the open coachee + the coach's overview list
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Session;
use crate::state::Loadable;

/// Coachee whose sessions modal is open
#[derive(Debug, Clone, PartialEq)]
pub struct OpenCoachee {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Default)]
pub struct SessionState {
    pub open_coachee: Rc<RefCell<Option<OpenCoachee>>>,
    pub sessions: Rc<RefCell<Loadable<Session>>>,
    pub coach_sessions: Rc<RefCell<Loadable<Session>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open_coachee(&self, coachee: Option<OpenCoachee>) {
        *self.open_coachee.borrow_mut() = coachee;
    }

    pub fn get_open_coachee(&self) -> Option<OpenCoachee> {
        self.open_coachee.borrow().clone()
    }

    pub fn set_sessions(&self, sessions: Loadable<Session>) {
        *self.sessions.borrow_mut() = sessions;
    }

    pub fn set_coach_sessions(&self, sessions: Loadable<Session>) {
        *self.coach_sessions.borrow_mut() = sessions;
    }

    pub fn find_session(&self, session_id: i64) -> Option<Session> {
        let from_open = self
            .sessions
            .borrow()
            .items()
            .iter()
            .find(|s| s.id == session_id)
            .cloned();
        from_open.or_else(|| {
            self.coach_sessions
                .borrow()
                .items()
                .iter()
                .find(|s| s.id == session_id)
                .cloned()
        })
    }

    /// Replace a session in every list holding it; returns how many rows changed
    pub fn patch_session(&self, updated: &Session) -> usize {
        let mut patched = 0;
        for list in [&self.sessions, &self.coach_sessions] {
            if let Some(items) = list.borrow_mut().items_mut() {
                for slot in items.iter_mut().filter(|s| s.id == updated.id) {
                    *slot = updated.clone();
                    patched += 1;
                }
            }
        }
        patched
    }

    /// Drop a session from every list; returns how many rows were removed
    pub fn remove_session(&self, session_id: i64) -> usize {
        let mut removed = 0;
        for list in [&self.sessions, &self.coach_sessions] {
            if let Some(items) = list.borrow_mut().items_mut() {
                let before = items.len();
                items.retain(|s| s.id != session_id);
                removed += before - items.len();
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: i64, topic: &str) -> Session {
        Session { id, topic: Some(topic.to_string()), ..Default::default() }
    }

    #[test]
    fn patch_touches_both_lists_and_keeps_order() {
        let state = SessionState::new();
        state.set_sessions(Loadable::Loaded(vec![session(1, "a"), session(2, "b"), session(3, "c")]));
        state.set_coach_sessions(Loadable::Loaded(vec![session(2, "b")]));

        assert_eq!(state.patch_session(&session(2, "B!")), 2);
        let topics: Vec<String> = state
            .sessions
            .borrow()
            .items()
            .iter()
            .filter_map(|s| s.topic.clone())
            .collect();
        assert_eq!(topics, vec!["a", "B!", "c"]);
        assert_eq!(state.find_session(2).and_then(|s| s.topic), Some("B!".to_string()));
    }

    #[test]
    fn remove_only_targets_the_session() {
        let state = SessionState::new();
        state.set_sessions(Loadable::Loaded(vec![session(1, "a"), session(2, "b")]));
        assert_eq!(state.remove_session(2), 1);
        assert_eq!(state.sessions.borrow().items().len(), 1);
        assert_eq!(state.remove_session(42), 0);
        assert_eq!(state.find_session(2), None);
    }
}
