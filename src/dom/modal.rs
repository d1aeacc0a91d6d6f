// ============================================================================
// MODAL HOST - Singleton dialog region
// ============================================================================
// One container + one backdrop. Opening replaces whatever was shown; closing
// removes the `show` class and clears the container once the close animation
// had time to run. A generation counter keeps a late clear from wiping a
// modal opened in the meantime.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use crate::config::CONFIG;
use crate::dom::{add_class, append_child, clear_children, get_element_by_id, on_click, query_within, remove_class};
use crate::utils::constants::{MODAL_BACKDROP_ID, MODAL_CONTAINER_ID};

/// Elements carrying this attribute close the modal when clicked
pub const DISMISS_ATTR: &str = "data-dismiss";

thread_local! {
    static GENERATION: Cell<u64> = Cell::new(0);
}

fn bump_generation() -> u64 {
    GENERATION.with(|g| {
        let next = g.get().wrapping_add(1);
        g.set(next);
        next
    })
}

fn current_generation() -> u64 {
    GENERATION.with(|g| g.get())
}

fn host() -> Result<(Element, Element), JsValue> {
    let container = get_element_by_id(MODAL_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("Modal container not found"))?;
    let backdrop = get_element_by_id(MODAL_BACKDROP_ID)
        .ok_or_else(|| JsValue::from_str("Modal backdrop not found"))?;
    Ok((container, backdrop))
}

/// Show `modal`, discarding the previous one. `on_dismiss` runs for backdrop
/// clicks and every `[data-dismiss]` element inside the modal.
pub fn open_modal(modal: &Element, on_dismiss: Rc<dyn Fn()>) -> Result<(), JsValue> {
    let (container, backdrop) = host()?;
    bump_generation();

    clear_children(&container);
    append_child(&container, modal)?;
    add_class(&backdrop, "show")?;
    add_class(modal, "show")?;

    // onclick (not a listener) so each open replaces the previous handler
    if let Some(el) = backdrop.dyn_ref::<HtmlElement>() {
        let on_dismiss = on_dismiss.clone();
        let closure = Closure::wrap(Box::new(move |_e: MouseEvent| {
            on_dismiss();
        }) as Box<dyn FnMut(MouseEvent)>);
        el.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    for button in query_within(modal, &format!("[{}]", DISMISS_ATTR))? {
        let on_dismiss = on_dismiss.clone();
        on_click(&button, move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss();
        })?;
    }

    log::info!("🪟 [MODAL] Opened");
    Ok(())
}

pub fn close_modal() -> Result<(), JsValue> {
    let (container, backdrop) = host()?;
    for modal in query_within(&container, ".modal")? {
        remove_class(&modal, "show")?;
    }
    remove_class(&backdrop, "show")?;

    let generation = bump_generation();
    Timeout::new(CONFIG.ui_config.modal_close_delay_ms, move || {
        if current_generation() == generation {
            clear_children(&container);
        }
    })
    .forget();

    log::info!("🪟 [MODAL] Closed");
    Ok(())
}

pub fn is_modal_shown() -> bool {
    get_element_by_id(MODAL_BACKDROP_ID)
        .map(|backdrop| backdrop.class_list().contains("show"))
        .unwrap_or(false)
}
