// ============================================================================
// COACHEE FORM - Create / edit dialog
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_submit, organization_options, ElementBuilder};
use crate::models::{Coachee, CoacheeFields};
use crate::utils::constants::ORGANIZATION_SELECT_CLASS;
use crate::viewmodels::DashboardViewModel;
use crate::views::organization_form::render_organization_form;
use crate::views::shared::{
    cancel_button, checkbox_group, field_checked, field_value, input_group, modal_shell, run_busy, submit_button,
    submit_of, textarea_group,
};

fn organization_select(vm: &DashboardViewModel, selected: Option<i64>) -> Result<Element, JsValue> {
    let selected = selected.map(|id| id.to_string()).unwrap_or_default();
    let organizations = vm.state().roster.get_organizations();
    let select = ElementBuilder::new("select")?
        .class(&format!("form-select {}", ORGANIZATION_SELECT_CLASS))
        .attr("name", "org_id")?
        .attr("id", "field-org_id")?
        .children(organization_options(&organizations, &selected)?)?
        .build();
    let label = ElementBuilder::new("label")?
        .class("form-label")
        .attr("for", "field-org_id")?
        .text("Organization")
        .build();
    ElementBuilder::new("div")?
        .class("mb-3")
        .children(vec![label, select])
        .map(ElementBuilder::build)
}

fn read_fields(form: &Element) -> CoacheeFields {
    CoacheeFields {
        firstname: field_value(form, "firstname"),
        lastname: field_value(form, "lastname"),
        email: field_value(form, "email"),
        org_id: field_value(form, "org_id").trim().parse().ok(),
        status: field_checked(form, "status"),
        background: field_value(form, "background"),
        education: field_value(form, "education"),
        challenges: field_value(form, "challenges"),
        goals: field_value(form, "goals"),
    }
}

/// `None` creates a coachee and links it to the current coach
pub fn render_coachee_editor(vm: &DashboardViewModel, coachee: Option<&Coachee>) -> Result<Element, JsValue> {
    let fields = coachee.map(CoacheeFields::from_coachee).unwrap_or_default();
    let (title, submit_text) = match coachee {
        Some(_) => ("Edit Coachee", "Save Changes"),
        None => ("Add Coachee", "Create Coachee"),
    };

    let footer = ElementBuilder::new("div")?
        .class("modal-footer")
        .child(cancel_button("Cancel")?)?
        .child(submit_button(submit_text)?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("coachee-form")
        .child(input_group("firstname", "First Name", "text", &fields.firstname, None)?)?
        .child(input_group("lastname", "Last Name", "text", &fields.lastname, None)?)?
        .child(input_group("email", "Email", "email", &fields.email, None)?)?
        .child(organization_select(vm, fields.org_id)?)?
        .child(checkbox_group("status", "Active", fields.status)?)?
        .child(textarea_group("background", "Background", &fields.background, 2)?)?
        .child(textarea_group("education", "Education", &fields.education, 2)?)?
        .child(textarea_group("challenges", "Challenges", &fields.challenges, 2)?)?
        .child(textarea_group("goals", "Goals", &fields.goals, 2)?)?
        .child(footer)?
        .build();

    {
        let vm = vm.clone();
        let form_ref = form.clone();
        let coachee_id = coachee.map(|c| c.id);
        on_submit(&form, move || {
            let vm = vm.clone();
            let fields = read_fields(&form_ref);
            run_busy(submit_of(&form_ref), async move {
                match coachee_id {
                    Some(id) => vm.update_coachee(id, fields).await,
                    None => vm.create_coachee(fields).await,
                }
            });
        })?;
    }

    // Separate form: nested <form> elements are not allowed
    let body = ElementBuilder::new("div")?
        .child(form)?
        .child(
            ElementBuilder::new("details")?
                .class("new-organization")
                .child(ElementBuilder::new("summary")?.text("New organization").build())?
                .child(render_organization_form(vm)?)?
                .build(),
        )?
        .build();

    modal_shell(title, body, None)
}
