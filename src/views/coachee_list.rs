// ============================================================================
// COACHEE LIST - Dashboard roster
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use crate::dom::{on_click, ElementBuilder, SUMMARY_FOR_ATTR};
use crate::models::Coachee;
use crate::utils::constants::{COACHEES_LOAD_FAILED, NO_COACHEES};
use crate::viewmodels::{list_content, CoacheeCardModel, DashboardViewModel, ListContent};
use crate::views::shared::{button, error_placeholder, loading_placeholder, placeholder, run_busy, run_busy_release};

/// Content of `#coachee-list`
pub fn render_coachee_list(vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let coachees = vm.state().roster.coachees.borrow();
    match list_content(&*coachees, NO_COACHEES, COACHEES_LOAD_FAILED) {
        ListContent::Loading => loading_placeholder(),
        ListContent::Failed(text) => error_placeholder(text),
        ListContent::Empty(text) => placeholder(text),
        ListContent::Items(items) => {
            let organizations = vm.state().roster.get_organizations();
            let cards = items
                .iter()
                .map(|c| render_coachee_item(vm, c, &CoacheeCardModel::new(c, &organizations)))
                .collect::<Result<Vec<_>, _>>()?;
            ElementBuilder::new("div")?
                .class("list-group")
                .children(cards)
                .map(ElementBuilder::build)
        }
    }
}

fn render_coachee_item(vm: &DashboardViewModel, coachee: &Coachee, card: &CoacheeCardModel) -> Result<Element, JsValue> {
    let dot_class = if card.active { "status-dot active" } else { "status-dot inactive" };
    let mut heading = ElementBuilder::new("div")?
        .class("coachee-heading")
        .child(
            ElementBuilder::new("span")?
                .class(dot_class)
                .attr("title", card.status_text())?
                .build(),
        )?
        .child(ElementBuilder::new("strong")?.text(&card.name).build())?
        .child(ElementBuilder::new("small")?.class("text-muted").text(&card.email).build())?;
    if let Some(org) = &card.organization {
        heading = heading.child(ElementBuilder::new("span")?.class("badge badge-org").text(org).build())?;
    }

    let mut meta = ElementBuilder::new("div")?.class("coachee-meta text-muted");
    if let Some(next) = &card.next_session {
        meta = meta.child(ElementBuilder::new("span")?.text(&format!("Next: {}", next)).build())?;
    }
    if let Some(last) = &card.last_session {
        meta = meta.child(ElementBuilder::new("span")?.text(&format!("Last: {}", last)).build())?;
    }

    let summary = ElementBuilder::new("p")?
        .class("coachee-summary")
        .attr(SUMMARY_FOR_ATTR, &card.id.to_string())?
        .text(&card.summary)
        .build();

    let info = ElementBuilder::new("div")?
        .class("coachee-info")
        .child(heading.build())?
        .child(meta.build())?
        .child(summary)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("list-group-item coachee-item")
        .data("coachee-id", &card.id.to_string())?
        .child(info)?
        .child(render_actions(vm, coachee)?)?
        .build())
}

fn render_actions(vm: &DashboardViewModel, coachee: &Coachee) -> Result<Element, JsValue> {
    let id = coachee.id;

    let sessions_btn = button("Sessions", "btn btn-sm btn-outline-primary")?;
    {
        let vm = vm.clone();
        let name = coachee.full_name();
        on_click(&sessions_btn, move |_e: MouseEvent| {
            let vm = vm.clone();
            let name = name.clone();
            spawn_local(async move { vm.open_coachee_sessions(id, name).await });
        })?;
    }

    let edit_btn = button("Edit", "btn btn-sm btn-outline-secondary")?;
    {
        let vm = vm.clone();
        on_click(&edit_btn, move |_e: MouseEvent| {
            let vm = vm.clone();
            spawn_local(async move { vm.open_coachee_editor(Some(id)).await });
        })?;
    }

    let summary_btn = button("Regenerate Summary", "btn btn-sm btn-outline-info")?;
    {
        let vm = vm.clone();
        let target = summary_btn.clone();
        on_click(&summary_btn, move |_e: MouseEvent| {
            let vm = vm.clone();
            run_busy_release(Some(target.clone()), async move { vm.regenerate_summary(id).await });
        })?;
    }

    let remove_btn = button("Remove", "btn btn-sm btn-outline-danger")?;
    {
        let vm = vm.clone();
        let target = remove_btn.clone();
        on_click(&remove_btn, move |_e: MouseEvent| {
            let vm = vm.clone();
            run_busy(Some(target.clone()), async move { vm.remove_coachee(id).await });
        })?;
    }

    ElementBuilder::new("div")?
        .class("d-flex gap-2 coachee-actions")
        .children(vec![sessions_btn, edit_btn, summary_btn, remove_btn])
        .map(ElementBuilder::build)
}
