// ============================================================================
// INCREMENTAL DOM UPDATES
// ============================================================================
// Touch only the nodes a change affects. Regions are addressed by id, records
// by data attributes (`data-session-row`, `data-summary-for`).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};
use crate::dom::{append_child, clear_children, get_element_by_id, query_selector_all, set_text_content, ElementBuilder};
use crate::models::Organization;
use crate::utils::constants::{ORGANIZATION_SELECT_CLASS, SERVER_STATUS_ID};

pub const SESSION_ROW_ATTR: &str = "data-session-row";
pub const SUMMARY_FOR_ATTR: &str = "data-summary-for";

pub fn session_row_selector(session_id: i64) -> String {
    format!("[{}=\"{}\"]", SESSION_ROW_ATTR, session_id)
}

pub fn summary_selector(coachee_id: i64) -> String {
    format!("[{}=\"{}\"]", SUMMARY_FOR_ATTR, coachee_id)
}

/// Swap the children of `#id` for `content`. `false` if the region is not
/// on the page.
pub fn replace_region(id: &str, content: &Element) -> Result<bool, JsValue> {
    let Some(region) = get_element_by_id(id) else {
        log::warn!("⚠️ [INCREMENTAL] Region #{} not found", id);
        return Ok(false);
    };
    clear_children(&region);
    append_child(&region, content)?;
    Ok(true)
}

/// Replace every match of `selector` with a fresh element from `build`
pub fn replace_matching<F>(selector: &str, build: F) -> Result<usize, JsValue>
where
    F: Fn() -> Result<Element, JsValue>,
{
    let targets = query_selector_all(selector)?;
    for old in &targets {
        let fresh = build()?;
        old.replace_with_with_node_1(&fresh)?;
    }
    Ok(targets.len())
}

pub fn remove_matching(selector: &str) -> Result<usize, JsValue> {
    let targets = query_selector_all(selector)?;
    for el in &targets {
        el.remove();
    }
    Ok(targets.len())
}

pub fn set_text_matching(selector: &str, text: &str) -> Result<usize, JsValue> {
    let targets = query_selector_all(selector)?;
    for el in &targets {
        set_text_content(el, text);
    }
    Ok(targets.len())
}

/// Rebuild the options of every organization `<select>`, keeping whatever
/// each one had selected
pub fn refresh_organization_selects(organizations: &[Organization]) -> Result<usize, JsValue> {
    let selects = query_selector_all(&format!("select.{}", ORGANIZATION_SELECT_CLASS))?;
    for el in &selects {
        let Some(select) = el.dyn_ref::<HtmlSelectElement>() else {
            continue;
        };
        let selected = select.value();
        clear_children(el);
        for option in organization_options(organizations, &selected)? {
            append_child(el, &option)?;
        }
        select.set_value(&selected);
    }
    log::info!("🏢 [INCREMENTAL] {} organization select(s) refreshed", selects.len());
    Ok(selects.len())
}

/// Leading "no organization" option plus one per organization
pub fn organization_options(organizations: &[Organization], selected: &str) -> Result<Vec<Element>, JsValue> {
    let mut options = Vec::with_capacity(organizations.len() + 1);
    options.push(ElementBuilder::new("option")?.attr("value", "")?.text("No organization").build());
    for org in organizations {
        let value = org.id.to_string();
        let mut builder = ElementBuilder::new("option")?.attr("value", &value)?.text(&org.name);
        if value == selected {
            builder = builder.attr("selected", "selected")?;
        }
        options.push(builder.build());
    }
    Ok(options)
}

/// Status line text for the last ping result (`None` = not checked yet)
pub fn server_status_text(online: Option<bool>) -> &'static str {
    match online {
        Some(true) => "✅ Server Connected",
        Some(false) => "❌ Server Offline",
        None => "Checking server…",
    }
}

pub fn set_server_status(online: Option<bool>) {
    let Some(indicator) = get_element_by_id(SERVER_STATUS_ID) else {
        return;
    };
    set_text_content(&indicator, server_status_text(online));
    indicator.set_class_name(match online {
        Some(true) => "server-status online",
        Some(false) => "server-status offline",
        None => "server-status",
    });
}
