// ============================================================================
// PROFILE - Coach read view and edit dialog
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::dom::{on_click, on_submit, ElementBuilder};
use crate::models::{Coach, ProfileFields};
use crate::utils::constants::NO_BIO;
use crate::viewmodels::DashboardViewModel;
use crate::views::shared::{
    button, cancel_button, field_files, field_value, file_group, input_group, loading_placeholder, modal_shell,
    run_busy, submit_button, submit_of, textarea_group,
};

/// Content of `#coach-profile`
pub fn render_profile(vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let Some(coach) = vm.state().roster.get_coach() else {
        return loading_placeholder();
    };

    let mut card = ElementBuilder::new("div")?.class("profile-card");
    if let Some(photo) = coach.photo_url() {
        card = card.child(
            ElementBuilder::new("img")?
                .class("profile-photo")
                .attr("src", photo)?
                .attr("alt", &coach.full_name())?
                .build(),
        )?;
    }

    let edit_btn = button("Edit Profile", "btn btn-sm btn-outline-primary")?;
    {
        let vm = vm.clone();
        on_click(&edit_btn, move |_e: MouseEvent| vm.open_profile_editor())?;
    }

    let mut details = ElementBuilder::new("div")?
        .class("profile-details")
        .child(ElementBuilder::new("h4")?.class("profile-name").text(&coach.full_name()).build())?
        .child(ElementBuilder::new("div")?.class("profile-email").text(&coach.email).build())?;
    if let Some(qualifications) = coach.qualifications.as_deref().filter(|q| !q.trim().is_empty()) {
        details = details.child(
            ElementBuilder::new("div")?
                .class("profile-qualifications text-muted")
                .text(qualifications)
                .build(),
        )?;
    }
    let details = details
        .child(
            ElementBuilder::new("p")?
                .class("profile-bio")
                .text(coach.bio().unwrap_or(NO_BIO))
                .build(),
        )?
        .child(edit_btn)?
        .build();

    Ok(card.child(details)?.build())
}

pub fn render_profile_editor(vm: &DashboardViewModel, coach: &Coach) -> Result<Element, JsValue> {
    let fields = ProfileFields::from_coach(coach);
    let footer = ElementBuilder::new("div")?
        .class("modal-footer")
        .child(cancel_button("Cancel")?)?
        .child(submit_button("Save Profile")?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("profile-form")
        .attr("enctype", "multipart/form-data")?
        .child(input_group("firstname", "First Name", "text", &fields.firstname, None)?)?
        .child(input_group("lastname", "Last Name", "text", &fields.lastname, None)?)?
        .child(input_group("email", "Email", "email", &fields.email, None)?)?
        .child(textarea_group("qualifications", "Qualifications", &fields.qualifications, 2)?)?
        .child(textarea_group("profile", "Bio", &fields.profile, 4)?)?
        .child(file_group("photo", "Photo", false, Some("Leave empty to keep the current photo"))?)?
        .child(footer)?
        .build();

    {
        let vm = vm.clone();
        let form_ref = form.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            let fields = ProfileFields {
                firstname: field_value(&form_ref, "firstname"),
                lastname: field_value(&form_ref, "lastname"),
                email: field_value(&form_ref, "email"),
                qualifications: field_value(&form_ref, "qualifications"),
                profile: field_value(&form_ref, "profile"),
            };
            let photo = field_files(&form_ref, "photo").into_iter().next();
            run_busy(submit_of(&form_ref), async move { vm.update_profile(fields, photo).await });
        })?;
    }

    modal_shell("Edit Profile", form, None)
}
