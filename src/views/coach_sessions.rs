// ============================================================================
// COACH SESSIONS - Dashboard overview across all coachees
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::utils::constants::{NO_UPCOMING_SESSIONS, SESSIONS_LOAD_FAILED};
use crate::utils::dates::now_local;
use crate::viewmodels::{list_content, order_coach_sessions, DashboardViewModel, ListContent};
use crate::views::session_row::render_session_row;
use crate::views::shared::{error_placeholder, loading_placeholder, placeholder};

/// Content of `#coach-sessions`
pub fn render_coach_sessions(vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let sessions = vm.state().sessions.coach_sessions.borrow();
    match list_content(&*sessions, NO_UPCOMING_SESSIONS, SESSIONS_LOAD_FAILED) {
        ListContent::Loading => loading_placeholder(),
        ListContent::Failed(text) => error_placeholder(text),
        ListContent::Empty(text) => placeholder(text),
        ListContent::Items(items) => {
            let now = now_local();
            let rows = order_coach_sessions(items, now)
                .iter()
                .map(|s| render_session_row(vm, s, now))
                .collect::<Result<Vec<_>, _>>()?;
            ElementBuilder::new("div")?
                .class("session-rows")
                .children(rows)
                .map(ElementBuilder::build)
        }
    }
}
