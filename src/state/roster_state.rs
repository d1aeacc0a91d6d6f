// ============================================================================
// ROSTER STATE - Coach, coachees, organizations, assignments
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{sort_coachees, Assignment, Coach, Coachee, Organization};
use crate::state::Loadable;

#[derive(Clone, Default)]
pub struct RosterState {
    pub coach: Rc<RefCell<Option<Coach>>>,
    pub coachees: Rc<RefCell<Loadable<Coachee>>>,
    pub organizations: Rc<RefCell<Vec<Organization>>>,
    pub assignments: Rc<RefCell<Loadable<Assignment>>>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_coach(&self, coach: Option<Coach>) {
        *self.coach.borrow_mut() = coach;
    }

    pub fn get_coach(&self) -> Option<Coach> {
        self.coach.borrow().clone()
    }

    /// Stores the list already in display order
    pub fn set_coachees(&self, coachees: Loadable<Coachee>) {
        let mut coachees = coachees;
        if let Some(items) = coachees.items_mut() {
            sort_coachees(items);
        }
        *self.coachees.borrow_mut() = coachees;
    }

    pub fn get_coachee(&self, coachee_id: i64) -> Option<Coachee> {
        self.coachees
            .borrow()
            .items()
            .iter()
            .find(|c| c.id == coachee_id)
            .cloned()
    }

    /// Replace the cached summary; false when the coachee is not listed
    pub fn set_summary(&self, coachee_id: i64, summary: &str) -> bool {
        let mut coachees = self.coachees.borrow_mut();
        let Some(items) = coachees.items_mut() else {
            return false;
        };
        match items.iter_mut().find(|c| c.id == coachee_id) {
            Some(coachee) => {
                coachee.summary = Some(summary.to_string());
                true
            }
            None => false,
        }
    }

    pub fn set_organizations(&self, organizations: Vec<Organization>) {
        *self.organizations.borrow_mut() = organizations;
    }

    pub fn get_organizations(&self) -> Vec<Organization> {
        self.organizations.borrow().clone()
    }

    pub fn set_assignments(&self, assignments: Loadable<Assignment>) {
        *self.assignments.borrow_mut() = assignments;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coachee(id: i64, name: &str, status: bool) -> Coachee {
        Coachee { id, firstname: name.to_string(), status, ..Default::default() }
    }

    #[test]
    fn coachees_are_stored_sorted() {
        let roster = RosterState::new();
        roster.set_coachees(Loadable::Loaded(vec![coachee(1, "Bob", false), coachee(2, "Amy", true)]));
        let ids: Vec<i64> = roster.coachees.borrow().items().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn summary_is_patched_in_place() {
        let roster = RosterState::new();
        roster.set_coachees(Loadable::Loaded(vec![coachee(1, "Bob", true)]));
        assert!(roster.set_summary(1, "Fresh summary"));
        assert_eq!(roster.get_coachee(1).and_then(|c| c.summary), Some("Fresh summary".to_string()));
        assert!(!roster.set_summary(99, "nobody"));

        roster.set_coachees(Loadable::Failed("offline".into()));
        assert!(!roster.set_summary(1, "lost"));
    }
}
