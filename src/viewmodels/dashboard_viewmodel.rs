// ============================================================================
// DASHBOARD VIEWMODEL
// ============================================================================
// One method per user operation. Methods call the API, write the result into
// `AppState` and request the matching incremental update. Failures are logged
// and surfaced as an alert; nothing is retried.
// ============================================================================

use std::rc::Rc;
use chrono::NaiveDateTime;
use web_sys::File;
use crate::dom::{alert, confirm, toast};
use crate::models::{
    CoacheeFields, FormEntries, OrganizationFields, ProfileFields, Session, SessionFields,
};
use crate::services::{build_form_data, named_files, ApiClient, ApiError};
use crate::state::{AppState, IncrementalUpdate, Loadable, ModalView, OpenCoachee, SessionEditor};
use crate::utils::dates::{format_form_date, now_local};

pub const DELETE_SESSION_PROMPT: &str = "Are you sure you want to delete this session?";
pub const REMOVE_COACHEE_PROMPT: &str = "Are you sure you want to remove this coachee?";
pub const PAST_EDIT_PROMPT: &str = "This session is in the past. Save changes anyway?";

/// Alert text for a failed action: the backend's detail when it sent one
pub fn failure_message(action: &str, err: &ApiError) -> String {
    match err {
        ApiError::Http { .. } => format!("{}: {}", action, err.detail()),
        _ => action.to_string(),
    }
}

/// Blocking browser dialogs used by the view-model
#[derive(Clone)]
pub struct Prompts {
    pub notify: Rc<dyn Fn(&str)>,
    pub confirm: Rc<dyn Fn(&str) -> bool>,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            notify: Rc::new(alert),
            confirm: Rc::new(confirm),
        }
    }
}

#[derive(Clone)]
pub struct DashboardViewModel {
    api: ApiClient,
    state: AppState,
    coach_id: i64,
    prompts: Prompts,
}

impl DashboardViewModel {
    pub fn new(state: AppState, coach_id: i64) -> Self {
        Self::with_client(ApiClient::new(), state, coach_id)
    }

    pub fn with_client(api: ApiClient, state: AppState, coach_id: i64) -> Self {
        Self::with_prompts(api, state, coach_id, Prompts::default())
    }

    pub fn with_prompts(api: ApiClient, state: AppState, coach_id: i64, prompts: Prompts) -> Self {
        Self { api, state, coach_id, prompts }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn coach_id(&self) -> i64 {
        self.coach_id
    }

    fn report(&self, action: &str, err: &ApiError) -> String {
        log::error!("❌ [DASHBOARD] {}: {}", action, err);
        let message = failure_message(action, err);
        (self.prompts.notify)(&message);
        message
    }

    fn reject(&self, message: String) -> String {
        (self.prompts.notify)(&message);
        message
    }

    fn form(&self, entries: &FormEntries, files: Vec<(&str, File)>) -> Result<web_sys::FormData, String> {
        build_form_data(entries, &files).map_err(|e| self.report("Could not prepare the form", &e))
    }

    fn show(&self, view: ModalView) {
        self.state.modal.open(view);
        self.state.notify(IncrementalUpdate::Modal);
    }

    /// Closing any dialog also forgets which coachee's sessions were open
    pub fn close_modal(&self) {
        self.state.modal.close();
        self.state.sessions.set_open_coachee(None);
        self.state.notify(IncrementalUpdate::Modal);
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    pub async fn load_profile(&self) {
        log::info!("👤 [DASHBOARD] Loading profile for coach {}", self.coach_id);
        match self.api.get_coach(self.coach_id).await {
            Ok(coach) => {
                self.state.roster.set_coach(Some(coach));
                self.state.notify(IncrementalUpdate::Profile);
            }
            // Profile stays blank; the rest of the dashboard still works
            Err(e) => log::error!("❌ [DASHBOARD] Error loading coach profile: {}", e),
        }
    }

    pub fn open_profile_editor(&self) {
        if self.state.roster.get_coach().is_none() {
            (self.prompts.notify)("Profile is still loading");
            return;
        }
        self.show(ModalView::ProfileEditor);
    }

    pub async fn update_profile(&self, fields: ProfileFields, photo: Option<File>) -> Result<(), String> {
        let form = self.form(&fields.entries(), photo.into_iter().map(|f| ("photo", f)).collect())?;
        let echoed = self
            .api
            .update_coach(self.coach_id, form)
            .await
            .map_err(|e| self.report("Failed to update profile", &e))?;

        let coach = match echoed {
            Some(coach) => Some(coach),
            None => match self.api.get_coach(self.coach_id).await {
                Ok(coach) => Some(coach),
                Err(e) => {
                    log::warn!("⚠️ [DASHBOARD] Profile saved but could not be re-read: {}", e);
                    None
                }
            },
        };
        if let Some(coach) = coach {
            self.state.roster.set_coach(Some(coach));
        }
        log::info!("✅ [DASHBOARD] Profile updated");
        self.close_modal();
        self.state.notify(IncrementalUpdate::Profile);
        toast("Profile updated");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Dashboard lists
    // ------------------------------------------------------------------

    pub async fn load_coachees(&self) {
        let result = self.api.get_coach_coachees(self.coach_id).await;
        match &result {
            Ok(list) => log::info!("📋 [DASHBOARD] {} coachee(s) loaded", list.len()),
            Err(e) => log::error!("❌ [DASHBOARD] Error loading coachees: {}", e),
        }
        self.state.roster.set_coachees(Loadable::from_result(result));
        self.state.notify(IncrementalUpdate::CoacheeList);
    }

    pub async fn load_coach_sessions(&self) {
        let result = self.api.get_coach_sessions(self.coach_id).await;
        if let Err(e) = &result {
            log::error!("❌ [DASHBOARD] Error loading coach sessions: {}", e);
        }
        self.state.sessions.set_coach_sessions(Loadable::from_result(result));
        self.state.notify(IncrementalUpdate::CoachSessions);
    }

    pub async fn load_assignments(&self) {
        let result = self.api.get_coach_assignments(self.coach_id).await;
        if let Err(e) = &result {
            log::error!("❌ [DASHBOARD] Error loading assignments: {}", e);
        }
        self.state.roster.set_assignments(Loadable::from_result(result));
        self.state.notify(IncrementalUpdate::Assignments);
    }

    pub async fn load_organizations(&self) {
        match self.api.get_organizations().await {
            Ok(organizations) => {
                self.state.roster.set_organizations(organizations);
                self.state.notify(IncrementalUpdate::OrganizationOptions);
            }
            Err(e) => log::error!("❌ [DASHBOARD] Error loading organizations: {}", e),
        }
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Sessions modal for one coachee; the list fills in once fetched
    pub async fn open_coachee_sessions(&self, coachee_id: i64, name: String) {
        self.state.sessions.set_open_coachee(Some(OpenCoachee { id: coachee_id, name }));
        self.state.sessions.set_sessions(Loadable::Loading);
        self.show(ModalView::CoacheeSessions);
        self.load_sessions(coachee_id).await;
    }

    pub async fn load_sessions(&self, coachee_id: i64) {
        log::info!("🔄 [DASHBOARD] Loading sessions for coachee {}", coachee_id);
        let result = self.api.get_coachee_sessions(coachee_id, self.coach_id).await;
        if let Err(e) = &result {
            self.report("Failed to load sessions", e);
        }
        // A different coachee may have been opened meanwhile
        if self.state.sessions.get_open_coachee().map(|c| c.id) != Some(coachee_id) {
            return;
        }
        self.state.sessions.set_sessions(Loadable::from_result(result));
        self.state.notify(IncrementalUpdate::SessionList);
    }

    pub async fn view_session_detail(&self, session_id: i64) {
        match self.api.get_session(session_id).await {
            Ok(session) => self.show(ModalView::SessionDetail(session)),
            Err(e) => {
                self.report("Failed to load session details", &e);
            }
        }
    }

    pub async fn open_session_editor(&self, session_id: i64) {
        match self.api.get_session(session_id).await {
            Ok(session) => self.show(ModalView::SessionEditor(SessionEditor::Edit(session))),
            Err(e) => {
                self.report("Failed to load session", &e);
            }
        }
    }

    pub fn open_new_session_form(&self, coachee_id: i64) {
        self.show(ModalView::SessionEditor(SessionEditor::Create {
            coachee_id,
            default_date: format_form_date(now_local()),
        }));
    }

    /// Reopen the sessions modal when it belongs to `coachee_id`, otherwise close
    fn back_to_sessions(&self, coachee_id: Option<i64>) {
        let open = self.state.sessions.get_open_coachee().map(|c| c.id);
        match (open, coachee_id) {
            (Some(open), Some(owner)) if open == owner => self.show(ModalView::CoacheeSessions),
            _ => self.close_modal(),
        }
    }

    /// Saved edit: patch every row of the session in place
    pub fn session_saved(&self, session: &Session, coachee_id: Option<i64>) {
        let rows = self.state.sessions.patch_session(session);
        log::info!("✅ [DASHBOARD] Session {} updated ({} row(s) patched)", session.id, rows);
        self.back_to_sessions(session.coachee_id.or(coachee_id));
        self.state.notify(IncrementalUpdate::SessionRow(session.id));
    }

    /// Deleted session: drop it from state and from the page
    pub fn session_removed(&self, session_id: i64) {
        let removed = self.state.sessions.remove_session(session_id);
        log::info!("🗑️ [DASHBOARD] Session {} deleted ({} row(s))", session_id, removed);
        self.state.notify(IncrementalUpdate::SessionRemoved(session_id));
    }

    /// Past sessions need an extra confirmation before an edit is sent
    pub fn confirm_edit(&self, original: &Session, now: NaiveDateTime) -> Result<(), String> {
        if original.edit_needs_confirmation(now) && !(self.prompts.confirm)(PAST_EDIT_PROMPT) {
            return Err("Edit cancelled".to_string());
        }
        Ok(())
    }

    /// Future-only rule plus the delete confirmation
    pub fn confirm_delete(&self, session: &Session, now: NaiveDateTime) -> Result<(), String> {
        if !session.can_delete(now) {
            log::warn!("⚠️ [DASHBOARD] Refusing to delete past session {}", session.id);
            return Err(self.reject("Only upcoming sessions can be deleted".to_string()));
        }
        if !(self.prompts.confirm)(DELETE_SESSION_PROMPT) {
            return Err("Delete cancelled".to_string());
        }
        Ok(())
    }

    pub async fn create_session(&self, coachee_id: i64, fields: SessionFields, files: Vec<File>) -> Result<(), String> {
        if let Err(msg) = fields.validate() {
            return Err(self.reject(msg));
        }
        let form = self.form(&fields.create_entries(coachee_id), named_files("attachments", files))?;
        self.api
            .create_session(self.coach_id, form)
            .await
            .map_err(|e| self.report("Failed to create session", &e))?;
        log::info!("✅ [DASHBOARD] Session created for coachee {}", coachee_id);

        let name = self
            .state
            .sessions
            .get_open_coachee()
            .filter(|c| c.id == coachee_id)
            .map(|c| c.name)
            .or_else(|| self.state.roster.get_coachee(coachee_id).map(|c| c.full_name()))
            .unwrap_or_default();
        self.open_coachee_sessions(coachee_id, name).await;
        self.load_coach_sessions().await;
        self.load_coachees().await;
        Ok(())
    }

    /// `kept` are the positions of the attachment boxes still checked
    pub async fn update_session(
        &self,
        original: &Session,
        fields: SessionFields,
        files: Vec<File>,
        kept: Vec<usize>,
    ) -> Result<(), String> {
        if let Err(msg) = fields.validate() {
            return Err(self.reject(msg));
        }
        self.confirm_edit(original, now_local())?;

        let surviving = original.attachment_list().retain_positions(&kept);
        let entries = fields.update_entries(original.id, &surviving.joined());
        let form = self.form(&entries, named_files("attachments", files))?;
        let echoed = self
            .api
            .update_session(original.id, self.coach_id, form)
            .await
            .map_err(|e| self.report("Failed to update session", &e))?;

        let updated = match echoed {
            Some(session) => Ok(session),
            None => self.api.get_session(original.id).await,
        };
        match updated {
            Ok(session) => self.session_saved(&session, original.coachee_id),
            Err(e) => {
                log::warn!("⚠️ [DASHBOARD] Session {} saved but could not be re-read: {}", original.id, e);
                self.back_to_sessions(original.coachee_id);
                if let Some(open) = self.state.sessions.get_open_coachee() {
                    self.load_sessions(open.id).await;
                }
                self.load_coach_sessions().await;
            }
        }
        Ok(())
    }

    /// Only future sessions can be deleted; the parent coachee list is
    /// refreshed afterwards
    pub async fn delete_session(&self, session_id: i64) -> Result<(), String> {
        let session = match self.state.sessions.find_session(session_id) {
            Some(session) => session,
            None => self
                .api
                .get_session(session_id)
                .await
                .map_err(|e| self.report("Failed to load session", &e))?,
        };
        self.confirm_delete(&session, now_local())?;

        self.api
            .delete_session(session_id, self.coach_id)
            .await
            .map_err(|e| self.report("Failed to delete session", &e))?;

        self.session_removed(session_id);
        self.load_coachees().await;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Coachees
    // ------------------------------------------------------------------

    pub async fn open_coachee_editor(&self, coachee_id: Option<i64>) {
        let coachee = match coachee_id {
            Some(id) => match self.state.roster.get_coachee(id) {
                Some(coachee) => Some(coachee),
                None => match self.api.get_coachee(id).await {
                    Ok(coachee) => Some(coachee),
                    Err(e) => {
                        self.report("Failed to load coachee", &e);
                        return;
                    }
                },
            },
            None => None,
        };
        self.show(ModalView::CoacheeEditor(coachee));
        if self.state.roster.get_organizations().is_empty() {
            self.load_organizations().await;
        }
    }

    /// Create, then link to this coach by email
    pub async fn create_coachee(&self, fields: CoacheeFields) -> Result<(), String> {
        if let Err(msg) = fields.validate() {
            return Err(self.reject(msg));
        }
        let form = self.form(&fields.entries(), Vec::new())?;
        self.api
            .create_coachee(form)
            .await
            .map_err(|e| self.report("Failed to create coachee", &e))?;

        let link = self.form(&vec![("email", fields.email.trim().to_string())], Vec::new())?;
        if let Err(e) = self.api.add_coachee_to_coach(self.coach_id, link).await {
            self.report("Coachee created but could not be added to your list", &e);
        } else {
            toast("Coachee added");
        }
        self.close_modal();
        self.load_coachees().await;
        Ok(())
    }

    pub async fn update_coachee(&self, coachee_id: i64, fields: CoacheeFields) -> Result<(), String> {
        if let Err(msg) = fields.validate() {
            return Err(self.reject(msg));
        }
        let form = self.form(&fields.entries(), Vec::new())?;
        self.api
            .update_coachee(coachee_id, form)
            .await
            .map_err(|e| self.report("Failed to update coachee", &e))?;
        log::info!("✅ [DASHBOARD] Coachee {} updated", coachee_id);
        self.close_modal();
        self.load_coachees().await;
        Ok(())
    }

    pub async fn remove_coachee(&self, coachee_id: i64) -> Result<(), String> {
        if !(self.prompts.confirm)(REMOVE_COACHEE_PROMPT) {
            return Err("Remove cancelled".to_string());
        }
        self.api
            .delete_coachee(coachee_id)
            .await
            .map_err(|e| self.report("Failed to remove coachee", &e))?;
        log::info!("🗑️ [DASHBOARD] Coachee {} removed", coachee_id);
        self.close_modal();
        self.load_coachees().await;
        self.load_coach_sessions().await;
        Ok(())
    }

    pub async fn regenerate_summary(&self, coachee_id: i64) -> Result<(), String> {
        log::info!("✨ [DASHBOARD] Regenerating summary for coachee {}", coachee_id);
        let summary = self
            .api
            .regenerate_summary(coachee_id)
            .await
            .map_err(|e| self.report("Failed to regenerate summary", &e))?;
        self.summary_regenerated(coachee_id, &summary);
        Ok(())
    }

    /// False when the coachee is no longer listed; no card is patched then
    pub fn summary_regenerated(&self, coachee_id: i64, summary: &str) -> bool {
        if !self.state.roster.set_summary(coachee_id, summary) {
            log::warn!("⚠️ [DASHBOARD] Coachee {} not listed, summary not shown", coachee_id);
            return false;
        }
        self.state.notify(IncrementalUpdate::Summary(coachee_id));
        true
    }

    // ------------------------------------------------------------------
    // Organizations
    // ------------------------------------------------------------------

    pub async fn create_organization(&self, fields: OrganizationFields) -> Result<(), String> {
        if let Err(msg) = fields.validate() {
            return Err(self.reject(msg));
        }
        let form = self.form(&fields.entries(), Vec::new())?;
        let created = self
            .api
            .create_organization(form)
            .await
            .map_err(|e| self.report("Failed to create organization", &e))?;

        match created {
            Some(organization) => {
                let mut organizations = self.state.roster.get_organizations();
                organizations.retain(|o| o.id != organization.id);
                organizations.push(organization);
                self.state.roster.set_organizations(organizations);
                self.state.notify(IncrementalUpdate::OrganizationOptions);
            }
            None => self.load_organizations().await,
        }
        toast("Organization created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use chrono::{Duration, NaiveDate};
    use crate::state::{Page, UpdateType};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn session(id: i64, coachee_id: i64, at: NaiveDateTime) -> Session {
        Session {
            id,
            coachee_id: Some(coachee_id),
            date: at.format("%Y-%m-%d %H:%M").to_string(),
            status: Some("open".into()),
            ..Default::default()
        }
    }

    struct Harness {
        vm: DashboardViewModel,
        prompts: Rc<RefCell<Vec<String>>>,
        updates: Rc<RefCell<Vec<IncrementalUpdate>>>,
    }

    fn harness(answer: bool) -> Harness {
        let state = AppState::new(Page::Dashboard { coach_id: 1 });
        let updates = Rc::new(RefCell::new(Vec::new()));
        {
            let updates = updates.clone();
            state.subscribe_to_changes(move |update| {
                if let UpdateType::Incremental(update) = update {
                    updates.borrow_mut().push(update);
                }
            });
        }
        let prompts = Rc::new(RefCell::new(Vec::new()));
        let notified = prompts.clone();
        let asked = prompts.clone();
        let vm = DashboardViewModel::with_prompts(
            ApiClient::new(),
            state,
            1,
            Prompts {
                notify: Rc::new(move |msg: &str| notified.borrow_mut().push(msg.to_string())),
                confirm: Rc::new(move |msg: &str| {
                    asked.borrow_mut().push(msg.to_string());
                    answer
                }),
            },
        );
        Harness { vm, prompts, updates }
    }

    fn open_sessions_of(h: &Harness, coachee_id: i64) {
        h.vm.state().sessions.set_open_coachee(Some(OpenCoachee { id: coachee_id, name: "Amy".into() }));
        h.vm.state().modal.open(ModalView::CoacheeSessions);
    }

    #[test]
    fn closing_a_dialog_forgets_the_open_coachee() {
        let h = harness(true);
        open_sessions_of(&h, 1);
        h.vm.close_modal();
        assert_eq!(h.vm.state().sessions.get_open_coachee(), None);
        assert!(!h.vm.state().modal.is_open());
    }

    #[test]
    fn saving_an_edit_of_another_coachee_closes_instead_of_reopening() {
        let h = harness(true);
        let other = session(20, 2, now() + Duration::days(1));
        h.vm.state().sessions.set_coach_sessions(Loadable::Loaded(vec![other.clone()]));
        open_sessions_of(&h, 1);
        h.vm.state().modal.open(ModalView::SessionEditor(SessionEditor::Edit(other.clone())));

        let mut edited = other.clone();
        edited.topic = Some("Renamed".into());
        h.vm.session_saved(&edited, Some(2));

        assert_eq!(h.vm.state().modal.get(), None);
        assert_eq!(h.vm.state().sessions.find_session(20).and_then(|s| s.topic), Some("Renamed".to_string()));
        assert!(h.updates.borrow().contains(&IncrementalUpdate::SessionRow(20)));
    }

    #[test]
    fn saving_an_edit_returns_to_the_owning_sessions_modal() {
        let h = harness(true);
        let own = session(30, 4, now() + Duration::days(1));
        h.vm.state().sessions.set_sessions(Loadable::Loaded(vec![own.clone()]));
        open_sessions_of(&h, 4);
        h.vm.state().modal.open(ModalView::SessionEditor(SessionEditor::Edit(own.clone())));

        // Echoed record without coachee_id falls back to the edited one's
        let echoed = Session { coachee_id: None, ..own };
        h.vm.session_saved(&echoed, Some(4));
        assert_eq!(h.vm.state().modal.get(), Some(ModalView::CoacheeSessions));
    }

    #[test]
    fn removed_session_leaves_state_and_requests_row_removal() {
        let h = harness(true);
        let tomorrow = now() + Duration::days(1);
        h.vm.state().sessions.set_sessions(Loadable::Loaded(vec![session(1, 4, tomorrow), session(2, 4, tomorrow)]));
        h.vm.state().sessions.set_coach_sessions(Loadable::Loaded(vec![session(2, 4, tomorrow)]));

        h.vm.session_removed(2);
        assert_eq!(h.vm.state().sessions.find_session(2), None);
        assert!(h.vm.state().sessions.coach_sessions.borrow().items().is_empty());
        assert_eq!(h.vm.state().sessions.sessions.borrow().items().len(), 1);
        assert_eq!(*h.updates.borrow(), vec![IncrementalUpdate::SessionRemoved(2)]);
    }

    #[test]
    fn declined_past_edit_is_not_sent() {
        let h = harness(false);
        let past = session(5, 4, now() - Duration::days(1));
        assert_eq!(h.vm.confirm_edit(&past, now()), Err("Edit cancelled".to_string()));
        assert_eq!(*h.prompts.borrow(), vec![PAST_EDIT_PROMPT.to_string()]);

        let future = session(6, 4, now() + Duration::days(1));
        assert_eq!(h.vm.confirm_edit(&future, now()), Ok(()));
        assert_eq!(h.prompts.borrow().len(), 1);
    }

    #[test]
    fn past_sessions_are_refused_before_asking() {
        let h = harness(true);
        let past = session(5, 4, now() - Duration::days(1));
        assert!(h.vm.confirm_delete(&past, now()).is_err());
        assert_eq!(*h.prompts.borrow(), vec!["Only upcoming sessions can be deleted".to_string()]);

        let future = session(6, 4, now() + Duration::days(1));
        assert_eq!(h.vm.confirm_delete(&future, now()), Ok(()));
        assert_eq!(h.prompts.borrow().last().map(String::as_str), Some(DELETE_SESSION_PROMPT));
    }

    #[test]
    fn declined_delete_is_cancelled() {
        let h = harness(false);
        let future = session(6, 4, now() + Duration::days(1));
        assert_eq!(h.vm.confirm_delete(&future, now()), Err("Delete cancelled".to_string()));
    }

    #[test]
    fn regenerated_summary_patches_listed_coachees_only() {
        let h = harness(true);
        h.vm.state().roster.set_coachees(Loadable::Loaded(vec![crate::models::Coachee {
            id: 3,
            firstname: "Amy".into(),
            status: true,
            ..Default::default()
        }]));

        assert!(h.vm.summary_regenerated(3, "Steady progress"));
        assert_eq!(h.vm.state().roster.get_coachee(3).and_then(|c| c.summary), Some("Steady progress".to_string()));
        assert_eq!(*h.updates.borrow(), vec![IncrementalUpdate::Summary(3)]);

        assert!(!h.vm.summary_regenerated(99, "Nobody"));
        assert_eq!(h.updates.borrow().len(), 1);
    }

    #[test]
    fn http_failures_carry_the_backend_detail() {
        let err = ApiError::http(400, "Bad Request", r#"{"detail": "Invalid date"}"#);
        assert_eq!(failure_message("Failed to create session", &err), "Failed to create session: Invalid date");
    }

    #[test]
    fn other_failures_use_the_bare_action() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(failure_message("Failed to delete session", &err), "Failed to delete session");
        let err = ApiError::Parse("eof".into());
        assert_eq!(failure_message("Failed to load sessions", &err), "Failed to load sessions");
    }
}
