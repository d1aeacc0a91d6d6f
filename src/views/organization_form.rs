// ============================================================================
// ORGANIZATIONS - Inline create form and dashboard list
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement};
use wasm_bindgen::JsCast;
use crate::dom::{on_submit, ElementBuilder};
use crate::models::{Organization, OrganizationFields};
use crate::utils::constants::{NO_ORGANIZATIONS, ORGANIZATION_LIST_ID};
use crate::viewmodels::DashboardViewModel;
use crate::views::shared::{field_value, input_group, placeholder, run_busy_release, submit_button, submit_of};

pub fn render_organization_form(vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .class("organization-form")
        .child(input_group("org_name", "Organization Name", "text", "", None)?)?
        .child(input_group("org_email", "Organization Email", "email", "", Some("optional"))?)?
        .child(submit_button("Add Organization")?)?
        .build();

    {
        let vm = vm.clone();
        let form_ref = form.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            let form_ref = form_ref.clone();
            let fields = OrganizationFields {
                name: field_value(&form_ref, "org_name"),
                email: Some(field_value(&form_ref, "org_email")),
            };
            run_busy_release(submit_of(&form_ref), async move {
                vm.create_organization(fields).await?;
                if let Some(html_form) = form_ref.dyn_ref::<HtmlFormElement>() {
                    html_form.reset();
                }
                Ok(())
            });
        })?;
    }
    Ok(form)
}

/// Content of `#organization-list`
pub fn render_organization_list(organizations: &[Organization]) -> Result<Element, JsValue> {
    if organizations.is_empty() {
        return placeholder(NO_ORGANIZATIONS);
    }
    let items = organizations
        .iter()
        .map(|org| {
            let mut item = ElementBuilder::new("li")?
                .class("list-group-item")
                .child(ElementBuilder::new("strong")?.text(&org.name).build())?;
            if let Some(email) = org.email.as_deref().filter(|e| !e.is_empty()) {
                item = item.child(ElementBuilder::new("small")?.class("text-muted").text(email).build())?;
            }
            Ok(item.build())
        })
        .collect::<Result<Vec<_>, JsValue>>()?;
    ElementBuilder::new("ul")?
        .class("list-group")
        .children(items)
        .map(ElementBuilder::build)
}

/// Dashboard panel: list region plus create form
pub fn render_organizations_panel(vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?
        .id(ORGANIZATION_LIST_ID)?
        .child(render_organization_list(&vm.state().roster.get_organizations())?)?
        .build();
    Ok(ElementBuilder::new("section")?
        .class("card organizations-panel")
        .child(ElementBuilder::new("h5")?.class("card-header").text("Organizations").build())?
        .child(ElementBuilder::new("div")?.class("card-body").child(list)?.child(render_organization_form(vm)?)?.build())?
        .build())
}
