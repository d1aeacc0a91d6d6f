use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::Assignment;
use crate::state::Loadable;
use crate::utils::constants::{ASSIGNMENTS_LOAD_FAILED, NO_ASSIGNMENTS};
use crate::viewmodels::{assignment_line, list_content, ListContent};
use crate::views::shared::{error_placeholder, loading_placeholder, placeholder};

/// Content of `#assignment-list` (read only)
pub fn render_assignment_list(assignments: &Loadable<Assignment>) -> Result<Element, JsValue> {
    match list_content(assignments, NO_ASSIGNMENTS, ASSIGNMENTS_LOAD_FAILED) {
        ListContent::Loading => loading_placeholder(),
        ListContent::Failed(text) => error_placeholder(text),
        ListContent::Empty(text) => placeholder(text),
        ListContent::Items(items) => {
            let rows = items
                .iter()
                .map(|a| {
                    let (title, detail) = assignment_line(a);
                    let mut item = ElementBuilder::new("li")?
                        .class("list-group-item assignment-item")
                        .child(ElementBuilder::new("strong")?.text(&title).build())?
                        .child(ElementBuilder::new("small")?.class("text-muted").text(&detail).build())?;
                    if let Some(description) = a.description.as_deref().filter(|d| !d.trim().is_empty()) {
                        item = item.child(ElementBuilder::new("p")?.class("assignment-description").text(description).build())?;
                    }
                    Ok(item.build())
                })
                .collect::<Result<Vec<_>, JsValue>>()?;
            ElementBuilder::new("ul")?
                .class("list-group")
                .children(rows)
                .map(ElementBuilder::build)
        }
    }
}
