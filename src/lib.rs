// ============================================================================
// COACH DASHBOARD - BROWSER FRONT END (RUST + WASM, MVVM)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: one method per user operation
// - Services: HTTP only
// - State: Rc<RefCell> cells plus change notifications
// - Models: records shared with the backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;
use crate::app::{current_page, App};
use crate::config::CONFIG;
use crate::state::{IncrementalUpdate, Page, UpdateType};
use crate::utils::constants::LOGIN_PAGE;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Coach Dashboard ({})", CONFIG.environment);

    let page = current_page();
    if page == Page::MissingCoach {
        log::warn!("⚠️ [MAIN] Dashboard opened without a coach id");
        dom::alert("No coach ID provided. Redirecting to login.");
        return dom::navigate(LOGIN_PAGE);
    }

    let mut app = App::new(page)?;
    app.render()?;
    app.start();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Registered once here; drops the app (and its timers) when the page goes away
    if let Some(win) = dom::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("👋 [MAIN] pagehide, dropping app");
            APP.with(|app_cell| app_cell.borrow_mut().take());
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Full rebuild of the current page, callable from JavaScript
#[wasm_bindgen]
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| match update_type {
        UpdateType::Incremental(update) => {
            log::debug!("🔄 [UPDATE] Incremental: {:?}", update);
            let needs_full_render = match app_cell.borrow().as_ref() {
                Some(app) => match app.update_incremental(update.clone()) {
                    Ok(()) => false,
                    Err(e) => {
                        log::error!("❌ [UPDATE] {:?} failed: {:?}", update, e);
                        // A missing modal host is recovered by rebuilding the page
                        update == IncrementalUpdate::Modal
                    }
                },
                None => {
                    log::warn!("⚠️ [UPDATE] App not initialised");
                    false
                }
            };
            if needs_full_render {
                if let Some(app) = app_cell.borrow_mut().as_mut() {
                    if let Err(e) = app.render().and_then(|_| app.update_incremental(IncrementalUpdate::Modal)) {
                        log::error!("❌ [RERENDER] {:?}", e);
                    }
                }
            }
        }
        UpdateType::FullRender => {
            if let Some(app) = app_cell.borrow_mut().as_mut() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] {:?}", e);
                }
            } else {
                log::warn!("⚠️ [RERENDER] App not initialised");
            }
        }
    });
}
