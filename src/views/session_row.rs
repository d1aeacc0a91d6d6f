// ============================================================================
// SESSION ROW - One session card, shared by the sessions modal and the
// dashboard overview
// ============================================================================

use chrono::NaiveDateTime;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use crate::dom::{on_click, ElementBuilder, SESSION_ROW_ATTR};
use crate::models::Session;
use crate::viewmodels::{DashboardViewModel, SessionRowModel};
use crate::views::shared::{button, run_busy};

/// Links open in a new tab; the visible text is the file name only
pub fn render_attachment_links(links: &[(String, String)]) -> Result<Element, JsValue> {
    let mut container = ElementBuilder::new("div")?
        .class("attachments")
        .child(ElementBuilder::new("strong")?.text("Attachments:").build())?;
    for (url, filename) in links {
        let link = ElementBuilder::new("a")?
            .class("attachment-link")
            .attr("href", url)?
            .attr("target", "_blank")?
            .attr("rel", "noopener")?
            .text(filename)
            .build();
        container = container.child(link)?;
    }
    Ok(container.build())
}

pub fn render_session_row(vm: &DashboardViewModel, session: &Session, now: NaiveDateTime) -> Result<Element, JsValue> {
    let row = SessionRowModel::new(session, now);

    let badge = ElementBuilder::new("span")?
        .class(&format!("badge {}", row.label.css_class()))
        .text(row.label.as_str())
        .build();
    let mut info = ElementBuilder::new("div")?
        .class("session-info")
        .child(ElementBuilder::new("h6")?.class("session-topic").text(&row.topic).build())?
        .child(ElementBuilder::new("small")?.class("text-muted session-date").text(&row.date).build())?
        .child(badge)?;
    if !row.attachments.is_empty() {
        info = info.child(render_attachment_links(&row.attachments)?)?;
    }

    let view_btn = button("View", "btn btn-sm btn-outline-secondary")?;
    {
        let vm = vm.clone();
        let id = row.id;
        on_click(&view_btn, move |_e: MouseEvent| {
            let vm = vm.clone();
            spawn_local(async move { vm.view_session_detail(id).await });
        })?;
    }

    let edit_btn = button("Edit", "btn btn-sm btn-outline-primary")?;
    {
        let vm = vm.clone();
        let id = row.id;
        on_click(&edit_btn, move |_e: MouseEvent| {
            let vm = vm.clone();
            spawn_local(async move { vm.open_session_editor(id).await });
        })?;
    }

    let mut actions = ElementBuilder::new("div")?
        .class("d-flex gap-2 session-actions")
        .child(view_btn)?
        .child(edit_btn)?;

    if row.can_delete {
        let delete_btn = button("Delete", "btn btn-sm btn-outline-danger")?;
        let vm = vm.clone();
        let id = row.id;
        let target = delete_btn.clone();
        on_click(&delete_btn, move |_e: MouseEvent| {
            let vm = vm.clone();
            run_busy(Some(target.clone()), async move { vm.delete_session(id).await });
        })?;
        actions = actions.child(delete_btn)?;
    }

    let body = ElementBuilder::new("div")?
        .class("card-body d-flex justify-content-between")
        .child(info.build())?
        .child(actions.build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card session-row")
        .attr(SESSION_ROW_ATTR, &row.id.to_string())?
        .child(body)?
        .build())
}
