// ============================================================================
// MODAL SHELL - Header / body / footer frame shared by every dialog
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{stop_click_propagation, ElementBuilder, DISMISS_ATTR};

pub fn modal_shell(title: &str, body: Element, footer: Option<Element>) -> Result<Element, JsValue> {
    let close = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .attr(DISMISS_ATTR, "modal")?
        .text("×")
        .build();
    let header = ElementBuilder::new("div")?
        .class("modal-header")
        .child(ElementBuilder::new("h5")?.text(title).build())?
        .child(close)?
        .build();
    let body = ElementBuilder::new("div")?.class("modal-body").child(body)?.build();

    let mut modal = ElementBuilder::new("div")?
        .class("modal")
        .attr("role", "dialog")?
        .child(header)?
        .child(body)?;
    if let Some(footer) = footer {
        modal = modal.child(ElementBuilder::new("div")?.class("modal-footer").child(footer)?.build())?;
    }
    let modal = modal.build();
    stop_click_propagation(&modal)?;
    Ok(modal)
}

/// Muted paragraph used for empty and error states
pub fn placeholder(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class("text-muted placeholder").text(text).build())
}

pub fn error_placeholder(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class("text-danger placeholder").text(text).build())
}

pub fn loading_placeholder() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class("text-muted loading").text("Loading…").build())
}
