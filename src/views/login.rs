// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{alert, navigate, on_submit, server_status_text, ElementBuilder};
use crate::models::{LoginDestination, LoginForm};
use crate::utils::constants::SERVER_STATUS_ID;
use crate::state::AppState;
use crate::viewmodels::LoginViewModel;
use crate::views::shared::{field_value, input_group, run_busy, submit_button, submit_of};

pub fn render_login(state: &AppState, vm: &LoginViewModel) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    let status = ElementBuilder::new("div")?
        .id(SERVER_STATUS_ID)?
        .class("server-status")
        .text(server_status_text(state.get_server_online()))
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(input_group("email", "Email", "email", "", Some("you@example.com"))?)?
        .child(input_group("password", "Password", "password", "", None)?)?
        .child(submit_button("Log In")?)?
        .build();

    {
        let vm = vm.clone();
        let form_ref = form.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            let credentials = LoginForm {
                email: field_value(&form_ref, "email"),
                password: field_value(&form_ref, "password"),
            };
            run_busy(submit_of(&form_ref), async move {
                match vm.login(credentials).await {
                    Ok(LoginDestination::Navigate(url)) => {
                        navigate(&url).map_err(|e| format!("Navigation failed: {:?}", e))
                    }
                    Ok(LoginDestination::Notice(notice)) => {
                        alert(notice);
                        Err(notice.to_string())
                    }
                    Err(message) => {
                        alert(&message);
                        Err(message)
                    }
                }
            });
        })?;
    }

    let container = ElementBuilder::new("div")?
        .class("login-container")
        .child(ElementBuilder::new("h1")?.text("Coaching Platform").build())?
        .child(ElementBuilder::new("p")?.class("text-muted").text("Sign in to continue").build())?
        .child(form)?
        .child(status)?
        .build();

    Ok(ElementBuilder::new("div")?.class("login-screen").child(container)?.build())
}
