// ============================================================================
// MODAL STATE - Which dialog the singleton modal host shows
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Coachee, Session};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEditor {
    Create { coachee_id: i64, default_date: String },
    Edit(Session),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    /// Session list of `SessionState::open_coachee`
    CoacheeSessions,
    SessionDetail(Session),
    SessionEditor(SessionEditor),
    /// `None` creates a new coachee
    CoacheeEditor(Option<Coachee>),
    ProfileEditor,
}

#[derive(Clone, Default)]
pub struct ModalState {
    pub current: Rc<RefCell<Option<ModalView>>>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, view: ModalView) {
        *self.current.borrow_mut() = Some(view);
    }

    pub fn close(&self) {
        *self.current.borrow_mut() = None;
    }

    pub fn get(&self) -> Option<ModalView> {
        self.current.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.current.borrow().is_some()
    }
}
