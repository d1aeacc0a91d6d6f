#![cfg(target_arch = "wasm32")]
//! Browser tests: `wasm-pack test --headless --chrome`

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use chrono::{Duration, NaiveDateTime};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

use coach_dashboard::dom::{
    append_child, close_modal, create_element, document, get_element_by_id, is_modal_shown, open_modal,
    query_selector_all, query_within, remove_matching, session_row_selector, set_text_matching, summary_selector,
    DISMISS_ATTR,
};
use coach_dashboard::app::App;
use coach_dashboard::models::{Coachee, Session, SessionFields};
use coach_dashboard::services::{ApiClient, ApiRoutes};
use coach_dashboard::state::{AppState, IncrementalUpdate, Loadable, ModalView, Page};
use coach_dashboard::utils::constants::{
    COACH_SESSIONS_ID, MODAL_BACKDROP_ID, MODAL_CONTAINER_ID, NO_ASSIGNMENTS, NO_COACHEES, NO_SESSIONS,
    NO_UPCOMING_SESSIONS, ROOT_ID,
};
use coach_dashboard::utils::dates::now_local;
use coach_dashboard::viewmodels::{DashboardViewModel, Prompts, DELETE_SESSION_PROMPT, PAST_EDIT_PROMPT};
use coach_dashboard::views::{
    checked_attachment_positions, render_assignment_list, render_coachee_list, render_session_editor,
    render_session_list, render_session_row,
};
use coach_dashboard::state::SessionEditor;

wasm_bindgen_test_configure!(run_in_browser);

fn dashboard_vm() -> DashboardViewModel {
    DashboardViewModel::new(AppState::new(Page::Dashboard { coach_id: 1 }), 1)
}

/// View-model whose backend refuses connections and whose dialogs are
/// recorded instead of shown
fn offline_vm(answer: bool) -> (DashboardViewModel, Rc<RefCell<Vec<String>>>) {
    let shown = Rc::new(RefCell::new(Vec::new()));
    let notified = shown.clone();
    let asked = shown.clone();
    let prompts = Prompts {
        notify: Rc::new(move |msg: &str| notified.borrow_mut().push(msg.to_string())),
        confirm: Rc::new(move |msg: &str| {
            asked.borrow_mut().push(msg.to_string());
            answer
        }),
    };
    let api = ApiClient::with_routes(ApiRoutes::new("http://127.0.0.1:9", ""));
    let vm = DashboardViewModel::with_prompts(api, AppState::new(Page::Dashboard { coach_id: 1 }), 1, prompts);
    (vm, shown)
}

fn mount(el: &Element) {
    let body = document().and_then(|d| d.body()).expect("body");
    body.append_child(el).expect("append");
}

fn session_at(id: i64, at: NaiveDateTime) -> Session {
    Session {
        id,
        coachee_id: Some(5),
        date: at.format("%Y-%m-%d %H:%M").to_string(),
        topic: Some(format!("Topic {}", id)),
        status: Some("open".into()),
        ..Default::default()
    }
}

fn ensure_modal_host() {
    for id in [MODAL_CONTAINER_ID, MODAL_BACKDROP_ID] {
        if get_element_by_id(id).is_none() {
            let el = create_element("div").unwrap();
            el.set_id(id);
            mount(&el);
        }
    }
}

#[wasm_bindgen_test]
fn empty_lists_render_placeholders() {
    let vm = dashboard_vm();
    vm.state().roster.set_coachees(Loadable::Loaded(vec![]));
    let list = render_coachee_list(&vm).unwrap();
    assert_eq!(list.text_content().as_deref(), Some(NO_COACHEES));

    vm.state().sessions.set_sessions(Loadable::Loaded(vec![]));
    let sessions = render_session_list(&vm).unwrap();
    assert_eq!(sessions.text_content().as_deref(), Some(NO_SESSIONS));

    let assignments = render_assignment_list(&Loadable::Loaded(vec![])).unwrap();
    assert_eq!(assignments.text_content().as_deref(), Some(NO_ASSIGNMENTS));
}

#[wasm_bindgen_test]
fn coachees_render_active_first_with_text_only() {
    let vm = dashboard_vm();
    vm.state().roster.set_coachees(Loadable::Loaded(vec![
        Coachee { id: 1, firstname: "Bob".into(), lastname: "<b>X</b>".into(), status: false, ..Default::default() },
        Coachee { id: 2, firstname: "Amy".into(), lastname: "Lee".into(), status: true, ..Default::default() },
    ]));
    let list = render_coachee_list(&vm).unwrap();
    let items = query_within(&list, ".coachee-item").unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get_attribute("data-coachee-id").as_deref(), Some("2"));
    // Markup in data stays text
    assert!(query_within(&list, "b").unwrap().is_empty());
    assert!(items[1].text_content().unwrap_or_default().contains("Bob <b>X</b>"));
}

#[wasm_bindgen_test]
fn delete_only_offered_for_future_sessions() {
    let vm = dashboard_vm();
    let now = now_local();
    let future = render_session_row(&vm, &session_at(1, now + Duration::days(1)), now).unwrap();
    let past = render_session_row(&vm, &session_at(2, now - Duration::days(1)), now).unwrap();

    let labels = |row: &Element| -> Vec<String> {
        query_within(row, "button").unwrap().iter().filter_map(|b| b.text_content()).collect()
    };
    assert_eq!(labels(&future), vec!["View", "Edit", "Delete"]);
    assert_eq!(labels(&past), vec!["View", "Edit"]);
    assert!(future.text_content().unwrap_or_default().contains("scheduled"));
    assert!(past.text_content().unwrap_or_default().contains("needs reschedule"));
}

#[wasm_bindgen_test]
fn removed_session_row_leaves_the_others() {
    let vm = dashboard_vm();
    let now = now_local();
    let tomorrow = now + Duration::days(1);
    let container = create_element("div").unwrap();
    for id in [101, 102, 103] {
        append_child(&container, &render_session_row(&vm, &session_at(id, tomorrow), now).unwrap()).unwrap();
    }
    mount(&container);

    assert_eq!(remove_matching(&session_row_selector(102)).unwrap(), 1);
    let remaining: Vec<String> = query_within(&container, "[data-session-row]")
        .unwrap()
        .iter()
        .filter_map(|el| el.get_attribute("data-session-row"))
        .collect();
    assert_eq!(remaining, vec!["101", "103"]);
    container.remove();
}

#[wasm_bindgen_test]
fn summary_text_is_replaced_everywhere() {
    let container = create_element("div").unwrap();
    for _ in 0..2 {
        let p = create_element("p").unwrap();
        p.set_attribute("data-summary-for", "9").unwrap();
        p.set_text_content(Some("old"));
        append_child(&container, &p).unwrap();
    }
    mount(&container);
    assert_eq!(set_text_matching(&summary_selector(9), "new summary").unwrap(), 2);
    let texts: Vec<String> = query_selector_all("[data-summary-for=\"9\"]")
        .unwrap()
        .iter()
        .filter_map(|el| el.text_content())
        .collect();
    assert_eq!(texts, vec!["new summary", "new summary"]);
    container.remove();
}

#[wasm_bindgen_test]
fn edit_form_lists_existing_attachments_checked() {
    let vm = dashboard_vm();
    let mut session = session_at(7, now_local() + Duration::days(2));
    session.attachments = Some("/uploads/a.pdf,/uploads/b.png,/uploads/c.txt".into());
    let modal = render_session_editor(&vm, &SessionEditor::Edit(session)).unwrap();
    let form = query_within(&modal, "form").unwrap().remove(0);

    let boxes = query_within(&form, "input[type=\"checkbox\"]").unwrap();
    assert_eq!(boxes.len(), 3);
    assert!(modal.text_content().unwrap_or_default().contains("Uncheck to remove"));

    boxes[1].dyn_ref::<web_sys::HtmlInputElement>().unwrap().set_checked(false);
    assert_eq!(checked_attachment_positions(&form), vec![0, 2]);
}

#[wasm_bindgen_test]
fn duplicate_attachments_get_their_own_boxes() {
    let vm = dashboard_vm();
    let mut session = session_at(8, now_local() + Duration::days(2));
    session.attachments = Some("/u/a.pdf,/u/b.pdf,/u/a.pdf".into());
    let modal = render_session_editor(&vm, &SessionEditor::Edit(session.clone())).unwrap();
    let form = query_within(&modal, "form").unwrap().remove(0);

    let boxes = query_within(&form, "input[type=\"checkbox\"]").unwrap();
    boxes[2].dyn_ref::<web_sys::HtmlInputElement>().unwrap().set_checked(false);
    let kept = session.attachment_list().retain_positions(&checked_attachment_positions(&form));
    assert_eq!(kept.joined(), "/u/a.pdf,/u/b.pdf");
}

#[wasm_bindgen_test]
fn deleted_session_leaves_the_dashboard_panel() {
    let root = create_element("div").unwrap();
    root.set_id(ROOT_ID);
    mount(&root);

    let mut app = App::new(Page::Dashboard { coach_id: 1 }).unwrap();
    app.render().unwrap();
    let now = now_local();
    app.state()
        .sessions
        .set_coach_sessions(Loadable::Loaded(vec![session_at(41, now + Duration::days(1))]));
    app.update_incremental(IncrementalUpdate::CoachSessions).unwrap();
    assert_eq!(query_selector_all(&session_row_selector(41)).unwrap().len(), 1);

    let vm = DashboardViewModel::new(app.state().clone(), 1);
    vm.session_removed(41);
    app.update_incremental(IncrementalUpdate::SessionRemoved(41)).unwrap();

    assert!(query_selector_all(&session_row_selector(41)).unwrap().is_empty());
    let panel = get_element_by_id(COACH_SESSIONS_ID).unwrap();
    assert_eq!(panel.text_content().as_deref(), Some(NO_UPCOMING_SESSIONS));
    drop(app);
    root.remove();
}

#[wasm_bindgen_test]
async fn declined_delete_keeps_the_session() {
    let (vm, shown) = offline_vm(false);
    let tomorrow = session_at(51, now_local() + Duration::days(1));
    vm.state().sessions.set_sessions(Loadable::Loaded(vec![tomorrow]));

    assert_eq!(vm.delete_session(51).await, Err("Delete cancelled".to_string()));
    assert!(vm.state().sessions.find_session(51).is_some());
    assert_eq!(*shown.borrow(), vec![DELETE_SESSION_PROMPT.to_string()]);
}

#[wasm_bindgen_test]
async fn unknown_session_is_read_back_before_deleting() {
    let (vm, shown) = offline_vm(true);
    // Nothing cached and the backend is unreachable: no confirmation, no delete
    assert_eq!(vm.delete_session(404).await, Err("Failed to load session".to_string()));
    assert_eq!(*shown.borrow(), vec!["Failed to load session".to_string()]);
}

#[wasm_bindgen_test]
async fn declined_past_edit_sends_nothing() {
    let (vm, shown) = offline_vm(false);
    let past = session_at(52, now_local() - Duration::days(1));
    let fields = SessionFields { date: past.date.clone(), ..Default::default() };

    // An attempted request would have failed with "Failed to update session"
    assert_eq!(vm.update_session(&past, fields, vec![], vec![]).await, Err("Edit cancelled".to_string()));
    assert_eq!(*shown.borrow(), vec![PAST_EDIT_PROMPT.to_string()]);
}

#[wasm_bindgen_test]
async fn failed_create_keeps_the_form_open() {
    let (vm, shown) = offline_vm(true);
    vm.open_new_session_form(5);
    let fields = SessionFields { date: "03/20/2030 10:00".into(), topic: "Kickoff".into(), ..Default::default() };

    let result = vm.create_session(5, fields, vec![]).await;
    assert_eq!(result, Err("Failed to create session".to_string()));
    assert!(matches!(vm.state().modal.get(), Some(ModalView::SessionEditor(_))));
    assert_eq!(*shown.borrow(), vec!["Failed to create session".to_string()]);
}

#[wasm_bindgen_test]
async fn modal_host_opens_dismisses_and_clears() {
    ensure_modal_host();
    let dismissed = Rc::new(Cell::new(false));

    let modal = create_element("div").unwrap();
    modal.set_class_name("modal");
    let close = create_element("button").unwrap();
    close.set_attribute(DISMISS_ATTR, "modal").unwrap();
    append_child(&modal, &close).unwrap();

    {
        let dismissed = dismissed.clone();
        open_modal(&modal, Rc::new(move || dismissed.set(true))).unwrap();
    }
    assert!(is_modal_shown());
    assert!(modal.class_list().contains("show"));

    close.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(dismissed.get());

    close_modal().unwrap();
    assert!(!is_modal_shown());
    let container = get_element_by_id(MODAL_CONTAINER_ID).unwrap();
    assert_eq!(container.child_element_count(), 1);

    TimeoutFuture::new(400).await;
    assert_eq!(container.child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn reopening_before_the_delay_keeps_the_new_modal() {
    ensure_modal_host();
    let first = create_element("div").unwrap();
    first.set_class_name("modal");
    open_modal(&first, Rc::new(|| {})).unwrap();
    close_modal().unwrap();

    let second = create_element("div").unwrap();
    second.set_class_name("modal second");
    open_modal(&second, Rc::new(|| {})).unwrap();

    TimeoutFuture::new(400).await;
    let container = get_element_by_id(MODAL_CONTAINER_ID).unwrap();
    assert_eq!(container.child_element_count(), 1);
    assert!(is_modal_shown());
    close_modal().unwrap();
}
