// ============================================================================
// APP STATE - Page-scoped state (one instance per page load)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{ModalState, RosterState, SessionState};
use crate::utils::constants::{COACH_ID_PARAM, DASHBOARD_PAGE};

/// Kind of DOM update requested after a state change
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateType {
    /// Only the listed region is rebuilt
    Incremental(IncrementalUpdate),
    /// Whole page re-render (page switch)
    FullRender,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Coach read view
    Profile,
    CoacheeList,
    /// Dashboard overview of the coach's sessions
    CoachSessions,
    Assignments,
    /// Every organization `<select>` on the page
    OrganizationOptions,
    /// Open, replace or close the modal host
    Modal,
    /// Session list inside the open coachee's sessions modal
    SessionList,
    /// Re-render the rows of one session wherever they are shown
    SessionRow(i64),
    /// Drop the rows of one session
    SessionRemoved(i64),
    /// Summary text of one coachee wherever it is shown
    Summary(i64),
    /// Login page backend indicator
    ServerStatus,
}

/// Which screen this page load shows
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Login,
    Dashboard { coach_id: i64 },
    /// Dashboard URL without a usable coach id
    MissingCoach,
}

impl Page {
    pub fn resolve(pathname: &str, search: &str) -> Self {
        let coach_param = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == COACH_ID_PARAM)
            .map(|(_, value)| value.trim());

        let on_dashboard = pathname.ends_with(DASHBOARD_PAGE);
        match coach_param.map(|v| v.parse::<i64>()) {
            Some(Ok(coach_id)) => Page::Dashboard { coach_id },
            Some(Err(_)) => Page::MissingCoach,
            None if on_dashboard => Page::MissingCoach,
            None => Page::Login,
        }
    }

    pub fn coach_id(&self) -> Option<i64> {
        match self {
            Page::Dashboard { coach_id } => Some(*coach_id),
            _ => None,
        }
    }
}

/// Global state of one page
#[derive(Clone)]
pub struct AppState {
    pub page: Page,
    pub roster: RosterState,
    pub sessions: SessionState,
    pub modal: ModalState,

    /// Login page: result of the last /ping (None = not checked yet)
    pub server_online: Rc<RefCell<Option<bool>>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            roster: RosterState::new(),
            sessions: SessionState::new(),
            modal: ModalState::new(),
            server_online: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn coach_id(&self) -> Option<i64> {
        self.page.coach_id()
    }

    pub fn set_server_online(&self, online: bool) {
        *self.server_online.borrow_mut() = Some(online);
    }

    pub fn get_server_online(&self) -> Option<bool> {
        *self.server_online.borrow()
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify(&self, update: IncrementalUpdate) {
        self.notify_with_type(UpdateType::Incremental(update));
    }

    pub fn notify_with_type(&self, update_type: UpdateType) {
        // Clone out so a subscriber may subscribe again without a borrow panic
        let subscribers: Vec<Rc<dyn Fn(UpdateType)>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update_type.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_with_coach_id() {
        assert_eq!(
            Page::resolve("/coach_dashboard.html", "?coach_id=12"),
            Page::Dashboard { coach_id: 12 }
        );
        assert_eq!(
            Page::resolve("/coach_dashboard.html", "?tab=x&coach_id=7"),
            Page::Dashboard { coach_id: 7 }
        );
    }

    #[test]
    fn dashboard_without_usable_id() {
        assert_eq!(Page::resolve("/coach_dashboard.html", ""), Page::MissingCoach);
        assert_eq!(Page::resolve("/coach_dashboard.html", "?coach_id=abc"), Page::MissingCoach);
        assert_eq!(Page::resolve("/", "?coach_id="), Page::MissingCoach);
    }

    #[test]
    fn anything_else_is_login() {
        assert_eq!(Page::resolve("/index.html", ""), Page::Login);
        assert_eq!(Page::resolve("/", "?next=home"), Page::Login);
    }

    #[test]
    fn subscribers_receive_updates() {
        let state = AppState::new(Page::Dashboard { coach_id: 1 });
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.subscribe_to_changes(move |update| seen.borrow_mut().push(update));
        }
        state.notify(IncrementalUpdate::CoacheeList);
        state.notify(IncrementalUpdate::SessionRemoved(4));
        assert_eq!(
            *seen.borrow(),
            vec![
                UpdateType::Incremental(IncrementalUpdate::CoacheeList),
                UpdateType::Incremental(IncrementalUpdate::SessionRemoved(4)),
            ]
        );
        assert_eq!(state.coach_id(), Some(1));
    }
}
