// ============================================================================
// DIALOGS - Browser alert/confirm plus inline toasts
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, window, ElementBuilder};
use crate::utils::constants::TOAST_HOST_ID;

pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            if let Err(e) = win.alert_with_message(message) {
                log::error!("❌ [DIALOG] alert failed: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [DIALOG] No window for alert: {}", message),
    }
}

/// `false` when the user declines or no window is available
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Short-lived message in the toast host; falls back to `alert` when the
/// page has no toast host
pub fn toast(message: &str) {
    if let Err(e) = try_toast(message) {
        log::warn!("⚠️ [DIALOG] toast unavailable ({:?}), using alert", e);
        alert(message);
    }
}

fn try_toast(message: &str) -> Result<(), JsValue> {
    let host = get_element_by_id(TOAST_HOST_ID)
        .ok_or_else(|| JsValue::from_str("No toast host"))?;
    let toast = ElementBuilder::new("div")?
        .class("toast")
        .attr("role", "status")?
        .text(message)
        .build();
    append_child(&host, &toast)?;

    Timeout::new(CONFIG.ui_config.toast_duration_ms, move || {
        toast.remove();
    })
    .forget();
    Ok(())
}
