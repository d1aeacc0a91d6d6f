// ============================================================================
// SESSIONS MODAL - Session list of one coachee
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::dom::{on_click, ElementBuilder};
use crate::utils::constants::{NO_SESSIONS, SESSIONS_LOAD_FAILED, SESSION_LIST_ID};
use crate::utils::dates::now_local;
use crate::viewmodels::{list_content, DashboardViewModel, ListContent};
use crate::views::session_row::render_session_row;
use crate::views::shared::{button, cancel_button, error_placeholder, loading_placeholder, modal_shell, placeholder};

pub fn render_sessions_modal(vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let state = vm.state();
    let Some(coachee) = state.sessions.get_open_coachee() else {
        return Err(JsValue::from_str("No coachee selected"));
    };

    let add_btn = button("Add New Session", "btn btn-sm btn-primary")?;
    {
        let vm = vm.clone();
        let coachee_id = coachee.id;
        on_click(&add_btn, move |_e: MouseEvent| vm.open_new_session_form(coachee_id))?;
    }

    let toolbar = ElementBuilder::new("div")?
        .class("d-flex justify-content-between mb-3")
        .child(ElementBuilder::new("h6")?.text("Session List").build())?
        .child(add_btn)?
        .build();

    let list = ElementBuilder::new("div")?
        .id(SESSION_LIST_ID)?
        .child(render_session_list(vm)?)?
        .build();

    let body = ElementBuilder::new("div")?.child(toolbar)?.child(list)?.build();
    modal_shell(
        &format!("Sessions for {}", coachee.name),
        body,
        Some(cancel_button("Close")?),
    )
}

/// Content of `#session-list`
pub fn render_session_list(vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let sessions = vm.state().sessions.sessions.borrow();
    match list_content(&*sessions, NO_SESSIONS, SESSIONS_LOAD_FAILED) {
        ListContent::Loading => loading_placeholder(),
        ListContent::Failed(text) => error_placeholder(text),
        ListContent::Empty(text) => placeholder(text),
        ListContent::Items(items) => {
            let now = now_local();
            let rows = items
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
