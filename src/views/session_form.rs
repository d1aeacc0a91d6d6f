// ============================================================================
// SESSION FORM - Create / edit dialog
// ============================================================================
// Existing attachments are listed as checked boxes carrying their position
// in `data-index`; unchecking one drops that entry on save.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{on_submit, query_within, ElementBuilder};
use crate::models::{filename_from_url, Session, SessionFields};
use crate::state::SessionEditor;
use crate::viewmodels::DashboardViewModel;
use crate::views::shared::{
    cancel_button, field_files, field_value, file_group, input_group, modal_shell, run_busy, submit_of,
    submit_button, textarea_group,
};

const EXISTING_ATTACHMENTS_CLASS: &str = "existing-attachments";

pub fn render_session_editor(vm: &DashboardViewModel, editor: &SessionEditor) -> Result<Element, JsValue> {
    match editor {
        SessionEditor::Create { coachee_id, default_date } => render_create(vm, *coachee_id, default_date),
        SessionEditor::Edit(session) => render_edit(vm, session),
    }
}

fn session_inputs(fields: &SessionFields, date_placeholder: Option<&str>) -> Result<Vec<Element>, JsValue> {
    Ok(vec![
        input_group("date", "Date & Time", "text", &fields.date, date_placeholder)?,
        input_group("topic", "Topic", "text", &fields.topic, Some("Session topic"))?,
        textarea_group("notes", "Notes", &fields.notes, 3)?,
        textarea_group("approach", "Approach", &fields.approach, 2)?,
        textarea_group("goals", "Goals", &fields.goals, 2)?,
        textarea_group("nextsteps", "Next Steps", &fields.nextsteps, 2)?,
    ])
}

fn read_fields(form: &Element) -> SessionFields {
    SessionFields {
        date: field_value(form, "date"),
        topic: field_value(form, "topic"),
        notes: field_value(form, "notes"),
        approach: field_value(form, "approach"),
        goals: field_value(form, "goals"),
        nextsteps: field_value(form, "nextsteps"),
    }
}

fn footer(submit_text: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("modal-footer")
        .child(cancel_button("Cancel")?)?
        .child(submit_button(submit_text)?)
        .map(ElementBuilder::build)
}

fn render_create(vm: &DashboardViewModel, coachee_id: i64, default_date: &str) -> Result<Element, JsValue> {
    let fields = SessionFields {
        date: default_date.to_string(),
        ..Default::default()
    };
    let form = ElementBuilder::new("form")?
        .class("session-form")
        .attr("enctype", "multipart/form-data")?
        .children(session_inputs(&fields, Some("MM/DD/YYYY HH:MM"))?)?
        .child(file_group("attachments", "Attachments", true, Some("You can select multiple files"))?)?
        .child(footer("Create Session")?)?
        .build();

    {
        let vm = vm.clone();
        let form_ref = form.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            let fields = read_fields(&form_ref);
            let files = field_files(&form_ref, "attachments");
            run_busy(submit_of(&form_ref), async move {
                vm.create_session(coachee_id, fields, files).await
            });
        })?;
    }

    let name = vm
        .state()
        .sessions
        .get_open_coachee()
        .map(|c| c.name)
        .unwrap_or_default();
    modal_shell(&format!("Add Session for {}", name), form, None)
}

fn attachment_checkbox(url: &str, index: usize) -> Result<Element, JsValue> {
    let id = format!("attach_{}", index);
    let input = ElementBuilder::new("input")?
        .attr("type", "checkbox")?
        .attr("id", &id)?
        .data("index", &index.to_string())?
        .data("url", url)?
        .build();
    if let Some(cb) = input.dyn_ref::<HtmlInputElement>() {
        cb.set_checked(true);
    }
    let label = ElementBuilder::new("label")?
        .attr("for", &id)?
        .text(filename_from_url(url))
        .build();
    ElementBuilder::new("div")?
        .class("attachment-choice")
        .children(vec![input, label])
        .map(ElementBuilder::build)
}

fn existing_attachments(session: &Session) -> Result<Option<Element>, JsValue> {
    let list = session.attachment_list();
    if list.is_empty() {
        return Ok(None);
    }
    let boxes = list
        .urls()
        .iter()
        .enumerate()
        .map(|(i, url)| attachment_checkbox(url, i))
        .collect::<Result<Vec<_>, _>>()?;
    let group = ElementBuilder::new("div")?
        .class("mb-3")
        .child(ElementBuilder::new("label")?.class("form-label").text("Existing Attachments").build())?
        .child(ElementBuilder::new("div")?.class(EXISTING_ATTACHMENTS_CLASS).children(boxes)?.build())?
        .child(ElementBuilder::new("small")?.class("text-muted").text("Uncheck to remove").build())?
        .build();
    Ok(Some(group))
}

/// Positions of the attachment boxes still checked, in display order
pub fn checked_attachment_positions(form: &Element) -> Vec<usize> {
    let selector = format!(".{} input[type=\"checkbox\"]", EXISTING_ATTACHMENTS_CLASS);
    query_within(form, &selector)
        .unwrap_or_default()
        .into_iter()
        .filter(|el| el.dyn_ref::<HtmlInputElement>().map_or(false, |cb| cb.checked()))
        .filter_map(|el| el.get_attribute("data-index"))
        .filter_map(|index| index.parse().ok())
        .collect()
}

fn render_edit(vm: &DashboardViewModel, session: &Session) -> Result<Element, JsValue> {
    let fields = SessionFields::from_session(session);
    let mut form = ElementBuilder::new("form")?
        .class("session-form")
        .attr("enctype", "multipart/form-data")?
        .children(session_inputs(&fields, None)?)?;
    if let Some(existing) = existing_attachments(session)? {
        form = form.child(existing)?;
    }
    let form = form
        .child(file_group("attachments", "Add New Attachments", true, None)?)?
        .child(footer("Save Changes")?)?
        .build();

    {
        let vm = vm.clone();
        let original = session.clone();
        let form_ref = form.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            let original = original.clone();
            let fields = read_fields(&form_ref);
            let files = field_files(&form_ref, "attachments");
            let kept = checked_attachment_positions(&form_ref);
            run_busy(submit_of(&form_ref), async move {
                vm.update_session(&original, fields, files, kept).await
            });
        })?;
    }

    modal_shell("Edit Session", form, None)
}
