// ============================================================================
// DASHBOARD VIEW - Page layout with one region per list
// ============================================================================
// Regions are filled from state here and rebuilt individually afterwards by
// `App::update_incremental`.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use crate::dom::{get_element_by_id, on_click, ElementBuilder};
use crate::utils::constants::{
    ASSIGNMENT_LIST_ID, COACHEE_LIST_ID, COACH_SESSIONS_ID, MODAL_BACKDROP_ID, MODAL_CONTAINER_ID, PROFILE_ID,
    TOAST_HOST_ID,
};
use crate::viewmodels::DashboardViewModel;
use crate::views::assignment_list::render_assignment_list;
use crate::views::coach_sessions::render_coach_sessions;
use crate::views::coachee_list::render_coachee_list;
use crate::views::organization_form::render_organizations_panel;
use crate::views::profile::render_profile;
use crate::views::shared::button;

fn region(id: &str, content: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.id(id)?.child(content)?.build())
}

fn panel(title: &str, header_action: Option<Element>, body: Element) -> Result<Element, JsValue> {
    let mut header = ElementBuilder::new("div")?
        .class("card-header d-flex justify-content-between")
        .child(ElementBuilder::new("h5")?.text(title).build())?;
    if let Some(action) = header_action {
        header = header.child(action)?;
    }
    Ok(ElementBuilder::new("section")?
        .class("card")
        .child(header.build())?
        .child(ElementBuilder::new("div")?.class("card-body").child(body)?.build())?
        .build())
}

/// Modal container, backdrop and toast host, unless the page already has them
fn overlay_hosts() -> Result<Vec<Element>, JsValue> {
    let mut hosts = Vec::new();
    for (id, class) in [
        (MODAL_BACKDROP_ID, "modal-backdrop"),
        (MODAL_CONTAINER_ID, "modal-container"),
        (TOAST_HOST_ID, "toast-host"),
    ] {
        if get_element_by_id(id).is_none() {
            hosts.push(ElementBuilder::new("div")?.id(id)?.class(class).build());
        }
    }
    Ok(hosts)
}

pub fn render_dashboard(vm: &DashboardViewModel) -> Result<Element, JsValue> {
    log::info!("🎬 [DASHBOARD] render_dashboard() for coach {}", vm.coach_id());
    let state = vm.state();

    let add_coachee = button("Add Coachee", "btn btn-sm btn-primary")?;
    {
        let vm = vm.clone();
        on_click(&add_coachee, move |_e: MouseEvent| {
            let vm = vm.clone();
            spawn_local(async move { vm.open_coachee_editor(None).await });
        })?;
    }

    let header = ElementBuilder::new("header")?
        .class("dashboard-header")
        .child(ElementBuilder::new("h1")?.text("Coach Dashboard").build())?
        .build();

    let sidebar = ElementBuilder::new("aside")?
        .class("dashboard-sidebar")
        .child(panel("Profile", None, region(PROFILE_ID, render_profile(vm)?)?)?)?
        .child(render_organizations_panel(vm)?)?
        .build();

    let main = ElementBuilder::new("main")?
        .class("dashboard-main")
        .child(panel("Coachees", Some(add_coachee), region(COACHEE_LIST_ID, render_coachee_list(vm)?)?)?)?
        .child(panel("Sessions", None, region(COACH_SESSIONS_ID, render_coach_sessions(vm)?)?)?)?
        .child(panel(
            "Assignments",
            None,
            region(ASSIGNMENT_LIST_ID, render_assignment_list(&state.roster.assignments.borrow())?)?,
        )?)?
        .build();

    let layout = ElementBuilder::new("div")?
        .class("dashboard-layout")
        .child(sidebar)?
        .child(main)?
        .build();

    ElementBuilder::new("div")?
        .class("dashboard")
        .child(header)?
        .child(layout)?
        .children(overlay_hosts()?)
        .map(ElementBuilder::build)
}
