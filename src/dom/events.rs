// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners on elements are forgotten on purpose: the browser drops them
// together with the element when a region is rebuilt. Window-level listeners
// are only registered once, from `lib.rs`.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MouseEvent};

pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit handler with the browser's default navigation suppressed
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    on_event(form, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// Clicks inside `element` do not reach the backdrop
pub fn stop_click_propagation(element: &Element) -> Result<(), JsValue> {
    on_click(element, |e: MouseEvent| e.stop_propagation())
}
