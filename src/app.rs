// ============================================================================
// APP - Page-scoped application instance
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{
    append_child, clear_children, close_modal, get_element_by_id, open_modal, refresh_organization_selects,
    remove_matching, replace_matching, replace_region, session_row_selector, set_server_status, set_text_matching,
    summary_selector, window,
};
use crate::state::{AppState, IncrementalUpdate, ModalView, Page};
use crate::utils::constants::{
    ASSIGNMENT_LIST_ID, COACHEE_LIST_ID, COACH_SESSIONS_ID, NO_SUMMARY, ORGANIZATION_LIST_ID, PROFILE_ID, ROOT_ID,
    SESSION_LIST_ID,
};
use crate::utils::dates::now_local;
use crate::viewmodels::{DashboardViewModel, LoginViewModel};
use crate::views;

/// View-model of the page being shown
enum PageModel {
    Login(LoginViewModel),
    Dashboard(DashboardViewModel),
}

pub struct App {
    state: AppState,
    page: PageModel,
    root: Element,
    /// Login page server probe; cancelled when the app is dropped
    ping: Option<Interval>,
}

/// Page the browser is on, from `location`
pub fn current_page() -> Page {
    let Some(location) = window().map(|w| w.location()) else {
        return Page::Login;
    };
    let pathname = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    Page::resolve(&pathname, &search)
}

impl App {
    /// `Page::MissingCoach` has no app; the caller redirects instead
    pub fn new(page: Page) -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(page.clone());
        let page = match page {
            Page::Dashboard { coach_id } => PageModel::Dashboard(DashboardViewModel::new(state.clone(), coach_id)),
            Page::Login => PageModel::Login(LoginViewModel::new(state.clone())),
            Page::MissingCoach => return Err(JsValue::from_str("No coach id in URL")),
        };

        // Deferred so several state changes in one task render in order
        state.subscribe_to_changes(move |update| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update);
            })
            .forget();
        });

        Ok(Self {
            state,
            page,
            root,
            ping: None,
        })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        log::info!("🎬 [APP] App::render()");
        clear_children(&self.root);
        let view = match &self.page {
            PageModel::Login(vm) => views::render_login(&self.state, vm)?,
            PageModel::Dashboard(vm) => views::render_dashboard(vm)?,
        };
        append_child(&self.root, &view)
    }

    /// Kick off the page's initial requests
    pub fn start(&mut self) {
        match &self.page {
            PageModel::Dashboard(vm) => {
                log::info!("🔄 [APP] Loading dashboard for coach {}", vm.coach_id());
                // Organizations first so coachee cards can show names
                let loader = vm.clone();
                spawn_local(async move {
                    loader.load_organizations().await;
                    loader.load_coachees().await;
                });
                let loader = vm.clone();
                spawn_local(async move { loader.load_profile().await });
                let loader = vm.clone();
                spawn_local(async move { loader.load_coach_sessions().await });
                let loader = vm.clone();
                spawn_local(async move { loader.load_assignments().await });
            }
            PageModel::Login(vm) => {
                let first = vm.clone();
                spawn_local(async move { first.check_server().await });
                let vm = vm.clone();
                self.ping = Some(Interval::new(CONFIG.ui_config.server_ping_interval_ms, move || {
                    let vm = vm.clone();
                    spawn_local(async move { vm.check_server().await });
                }));
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        if let IncrementalUpdate::ServerStatus = update {
            set_server_status(self.state.get_server_online());
            return Ok(());
        }
        let PageModel::Dashboard(vm) = &self.page else {
            return Ok(());
        };

        match update {
            IncrementalUpdate::Profile => {
                replace_region(PROFILE_ID, &views::render_profile(vm)?)?;
            }
            IncrementalUpdate::CoacheeList => {
                replace_region(COACHEE_LIST_ID, &views::render_coachee_list(vm)?)?;
            }
            IncrementalUpdate::CoachSessions => {
                replace_region(COACH_SESSIONS_ID, &views::render_coach_sessions(vm)?)?;
            }
            IncrementalUpdate::Assignments => {
                let content = views::render_assignment_list(&self.state.roster.assignments.borrow())?;
                replace_region(ASSIGNMENT_LIST_ID, &content)?;
            }
            IncrementalUpdate::OrganizationOptions => {
                let organizations = self.state.roster.get_organizations();
                refresh_organization_selects(&organizations)?;
                replace_region(ORGANIZATION_LIST_ID, &views::render_organization_list(&organizations)?)?;
                // Coachee cards show organization names
                replace_region(COACHEE_LIST_ID, &views::render_coachee_list(vm)?)?;
            }
            IncrementalUpdate::Modal => self.update_modal(vm)?,
            IncrementalUpdate::SessionList => {
                replace_region(SESSION_LIST_ID, &views::render_session_list(vm)?)?;
            }
            IncrementalUpdate::SessionRow(session_id) => {
                if let Some(session) = self.state.sessions.find_session(session_id) {
                    let now = now_local();
                    let replaced = replace_matching(&session_row_selector(session_id), || {
                        views::render_session_row(vm, &session, now)
                    })?;
                    log::info!("🔄 [APP] Session {} patched in {} place(s)", session_id, replaced);
                }
            }
            IncrementalUpdate::SessionRemoved(session_id) => {
                remove_matching(&session_row_selector(session_id))?;
                // Emptied lists show their placeholder
                let sessions = &self.state.sessions;
                if sessions.sessions.borrow().is_loaded() && sessions.sessions.borrow().items().is_empty() {
                    replace_region(SESSION_LIST_ID, &views::render_session_list(vm)?)?;
                }
                if sessions.coach_sessions.borrow().is_loaded() && sessions.coach_sessions.borrow().items().is_empty() {
                    replace_region(COACH_SESSIONS_ID, &views::render_coach_sessions(vm)?)?;
                }
            }
            IncrementalUpdate::Summary(coachee_id) => {
                let summary = self
                    .state
                    .roster
                    .get_coachee(coachee_id)
                    .and_then(|c| c.summary)
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| NO_SUMMARY.to_string());
                set_text_matching(&summary_selector(coachee_id), &summary)?;
            }
            IncrementalUpdate::ServerStatus => {}
        }
        Ok(())
    }

    fn update_modal(&self, vm: &DashboardViewModel) -> Result<(), JsValue> {
        let Some(view) = self.state.modal.get() else {
            return close_modal();
        };
        let modal = match &view {
            ModalView::CoacheeSessions => views::render_sessions_modal(vm)?,
            ModalView::SessionDetail(session) => views::render_session_detail(session)?,
            ModalView::SessionEditor(editor) => views::render_session_editor(vm, editor)?,
            ModalView::CoacheeEditor(coachee) => views::render_coachee_editor(vm, coachee.as_ref())?,
            ModalView::ProfileEditor => match self.state.roster.get_coach() {
                Some(coach) => views::render_profile_editor(vm, &coach)?,
                None => return Ok(()),
            },
        };
        let dismiss_vm = vm.clone();
        open_modal(&modal, Rc::new(move || dismiss_vm.close_modal()))
    }
}
