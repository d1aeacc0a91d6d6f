// ============================================================================
// SESSION DETAIL - Read-only dialog
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::Session;
use crate::utils::dates::now_local;
use crate::viewmodels::attachment_links;
use crate::views::session_row::render_attachment_links;
use crate::views::shared::{cancel_button, modal_shell};

fn detail_line(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("mb-3 detail-line")
        .child(ElementBuilder::new("strong")?.text(&format!("{}:", label)).build())?
        .child(ElementBuilder::new("div")?.class("detail-value").text(value).build())?
        .build())
}

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
}

pub fn render_session_detail(session: &Session) -> Result<Element, JsValue> {
    let label = session.label(now_local());
    let mut body = ElementBuilder::new("div")?
        .class("session-detail")
        .child(detail_line("Date", &session.date)?)?
        .child(detail_line("Status", label.as_str())?)?
        .child(detail_line("Topic", or(&session.topic, "N/A"))?)?
        .child(detail_line("Notes", or(&session.notes, "No notes"))?)?
        .child(detail_line("Approach", or(&session.approach, "N/A"))?)?
        .child(detail_line("Goals", or(&session.goals, "N/A"))?)?
        .child(detail_line("Next Steps", or(&session.nextsteps, "N/A"))?)?;

    let links = attachment_links(session);
    if !links.is_empty() {
        body = body.child(render_attachment_links(&links)?)?;
    }

    modal_shell("Session Details", body.build(), Some(cancel_button("Close")?))
}
