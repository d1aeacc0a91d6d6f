// ============================================================================
// FORM FIELDS - Labelled inputs and value readers
// ============================================================================

use std::future::Future;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use crate::dom::{query_within, ElementBuilder};
use crate::services::selected_files;

fn label(name: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?
        .class("form-label")
        .attr("for", &format!("field-{}", name))?
        .text(text)
        .build())
}

fn group(children: Vec<Element>) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?.class("mb-3").children(children).map(ElementBuilder::build)
}

/// `<label>` + `<input>` wrapped in a form group
pub fn input_group(
    name: &str,
    label_text: &str,
    input_type: &str,
    value: &str,
    placeholder: Option<&str>,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-control")
        .attr("type", input_type)?
        .attr("name", name)?
        .attr("id", &format!("field-{}", name))?
        .attr_opt("placeholder", placeholder)?
        .value(value)
        .build();
    group(vec![label(name, label_text)?, input])
}

pub fn textarea_group(name: &str, label_text: &str, value: &str, rows: u32) -> Result<Element, JsValue> {
    let area = ElementBuilder::new("textarea")?
        .class("form-control")
        .attr("name", name)?
        .attr("id", &format!("field-{}", name))?
        .attr("rows", &rows.to_string())?
        .value(value)
        .build();
    group(vec![label(name, label_text)?, area])
}

pub fn file_group(name: &str, label_text: &str, multiple: bool, hint: Option<&str>) -> Result<Element, JsValue> {
    let mut input = ElementBuilder::new("input")?
        .class("form-control")
        .attr("type", "file")?
        .attr("name", name)?
        .attr("id", &format!("field-{}", name))?;
    if multiple {
        input = input.attr("multiple", "multiple")?;
    }
    let mut children = vec![label(name, label_text)?, input.build()];
    if let Some(hint) = hint {
        children.push(ElementBuilder::new("small")?.class("text-muted").text(hint).build());
    }
    group(children)
}

pub fn checkbox_group(name: &str, label_text: &str, checked: bool) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-check-input")
        .attr("type", "checkbox")?
        .attr("name", name)?
        .attr("id", &format!("field-{}", name))?
        .build();
    if let Some(cb) = input.dyn_ref::<HtmlInputElement>() {
        cb.set_checked(checked);
    }
    let label = ElementBuilder::new("label")?
        .class("form-check-label")
        .attr("for", &format!("field-{}", name))?
        .text(label_text)
        .build();
    ElementBuilder::new("div")?
        .class("form-check mb-3")
        .children(vec![input, label])
        .map(ElementBuilder::build)
}

pub fn submit_button(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text(text)
        .build())
}

pub fn cancel_button(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .attr(crate::dom::DISMISS_ATTR, "modal")?
        .text(text)
        .build())
}

pub fn button(text: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .text(text)
        .build())
}

fn named(root: &Element, name: &str) -> Option<Element> {
    query_within(root, &format!("[name=\"{}\"]", name))
        .ok()
        .and_then(|found| found.into_iter().next())
}

/// Value of the named input, textarea or select under `root` ("" if absent)
pub fn field_value(root: &Element, name: &str) -> String {
    let Some(el) = named(root, name) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn field_checked(root: &Element, name: &str) -> bool {
    named(root, name)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|cb| cb.checked())
        .unwrap_or(false)
}

pub fn field_files(root: &Element, name: &str) -> Vec<File> {
    named(root, name)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| selected_files(&input))
        .unwrap_or_default()
}

fn set_busy(button: &Element, busy: bool) {
    if let Some(btn) = button.dyn_ref::<HtmlButtonElement>() {
        btn.set_disabled(busy);
    }
}

fn spawn_busy<F>(button: Option<Element>, release_on_success: bool, task: F)
where
    F: Future<Output = Result<(), String>> + 'static,
{
    if let Some(btn) = &button {
        set_busy(btn, true);
    }
    spawn_local(async move {
        let result = task.await;
        if let Err(reason) = &result {
            log::warn!("⚠️ [FORM] {}", reason);
        }
        if result.is_err() || release_on_success {
            if let Some(btn) = &button {
                set_busy(btn, false);
            }
        }
    });
}

/// Disable `button` while `task` runs; re-enabled only when it fails, since
/// success replaces the form
pub fn run_busy<F>(button: Option<Element>, task: F)
where
    F: Future<Output = Result<(), String>> + 'static,
{
    spawn_busy(button, false, task);
}

/// Like `run_busy` for buttons that stay on the page afterwards
pub fn run_busy_release<F>(button: Option<Element>, task: F)
where
    F: Future<Output = Result<(), String>> + 'static,
{
    spawn_busy(button, true, task);
}

/// First submit button under `form`
pub fn submit_of(form: &Element) -> Option<Element> {
    query_within(form, "button[type=\"submit\"]")
        .ok()
        .and_then(|found| found.into_iter().next())
}
