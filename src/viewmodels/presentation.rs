// ============================================================================
// PRESENTATION - Display models derived from state
// ============================================================================
// Pure functions: no DOM, no network. Views render exactly what these return.
// ============================================================================

use chrono::NaiveDateTime;
use crate::models::{organization_name, Assignment, Coachee, Organization, Session, SessionLabel};
use crate::state::Loadable;
use crate::utils::constants::NO_SUMMARY;

/// What a list region shows
#[derive(Debug, PartialEq)]
pub enum ListContent<'a, T> {
    Loading,
    Failed(&'static str),
    Empty(&'static str),
    Items(&'a [T]),
}

pub fn list_content<'a, T>(
    list: &'a Loadable<T>,
    empty: &'static str,
    failed: &'static str,
) -> ListContent<'a, T> {
    match list {
        Loadable::Loading => ListContent::Loading,
        Loadable::Failed(_) => ListContent::Failed(failed),
        Loadable::Loaded(items) if items.is_empty() => ListContent::Empty(empty),
        Loadable::Loaded(items) => ListContent::Items(items),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionRowModel {
    pub id: i64,
    pub topic: String,
    pub date: String,
    pub label: SessionLabel,
    pub can_delete: bool,
    pub attachments: Vec<(String, String)>,
}

impl SessionRowModel {
    pub fn new(session: &Session, now: NaiveDateTime) -> Self {
        Self {
            id: session.id,
            topic: session.display_topic().to_string(),
            date: session.date.clone(),
            label: session.label(now),
            can_delete: session.can_delete(now),
            attachments: attachment_links(session),
        }
    }
}

/// `(url, filename)` pairs in stored order
pub fn attachment_links(session: &Session) -> Vec<(String, String)> {
    session
        .attachment_list()
        .urls()
        .iter()
        .map(|url| (url.clone(), crate::models::filename_from_url(url).to_string()))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoacheeCardModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub organization: Option<String>,
    pub summary: String,
    pub next_session: Option<String>,
    pub last_session: Option<String>,
}

impl CoacheeCardModel {
    pub fn new(coachee: &Coachee, organizations: &[Organization]) -> Self {
        let non_empty = |date: &str| (!date.trim().is_empty()).then(|| date.to_string());
        Self {
            id: coachee.id,
            name: coachee.full_name(),
            email: coachee.email.clone(),
            active: coachee.status,
            organization: organization_name(organizations, coachee.org_id).map(str::to_string),
            summary: coachee
                .summary
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(NO_SUMMARY)
                .to_string(),
            next_session: coachee.next_session.as_ref().and_then(|s| non_empty(s.date())),
            last_session: coachee.last_session.as_ref().and_then(|s| non_empty(s.date())),
        }
    }

    pub fn status_text(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

/// Upcoming-sessions panel: future sessions first (soonest first), then the
/// rest newest first. Unparseable dates go last.
pub fn order_coach_sessions(sessions: &[Session], now: NaiveDateTime) -> Vec<Session> {
    let mut upcoming: Vec<Session> = sessions.iter().filter(|s| s.is_future(now)).cloned().collect();
    let mut past: Vec<Session> = sessions.iter().filter(|s| !s.is_future(now)).cloned().collect();
    upcoming.sort_by_key(|s| s.scheduled_at());
    past.sort_by(|a, b| match (a.scheduled_at(), b.scheduled_at()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    upcoming.extend(past);
    upcoming
}

pub fn assignment_line(assignment: &Assignment) -> (String, String) {
    let due = assignment
        .duedate
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!("Due {}", d))
        .unwrap_or_else(|| "No due date".to_string());
    (assignment.title().to_string(), format!("{} · {}", due, assignment.status_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::SessionRef;
    use crate::utils::constants::{COACHEES_LOAD_FAILED, NO_COACHEES};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn session(id: i64, date: &str) -> Session {
        Session { id, date: date.to_string(), status: Some("open".into()), ..Default::default() }
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let empty: Loadable<Coachee> = Loadable::Loaded(vec![]);
        assert_eq!(list_content(&empty, NO_COACHEES, COACHEES_LOAD_FAILED), ListContent::Empty(NO_COACHEES));

        let failed: Loadable<Coachee> = Loadable::Failed("HTTP 500".into());
        assert_eq!(
            list_content(&failed, NO_COACHEES, COACHEES_LOAD_FAILED),
            ListContent::Failed(COACHEES_LOAD_FAILED)
        );

        let loading: Loadable<Coachee> = Loadable::Loading;
        assert_eq!(list_content(&loading, NO_COACHEES, COACHEES_LOAD_FAILED), ListContent::Loading);
    }

    #[test]
    fn session_row_flags() {
        let tomorrow = SessionRowModel::new(&session(1, "2026-03-11 09:00"), now());
        assert_eq!(tomorrow.label, SessionLabel::Scheduled);
        assert!(tomorrow.can_delete);
        assert_eq!(tomorrow.topic, "No topic");

        let yesterday = SessionRowModel::new(&session(2, "2026-03-09 09:00"), now());
        assert_eq!(yesterday.label, SessionLabel::NeedsReschedule);
        assert!(!yesterday.can_delete);
    }

    #[test]
    fn attachment_links_use_last_segment() {
        let mut s = session(1, "2026-03-11");
        s.attachments = Some("/uploads/a/notes.pdf,/uploads/b/plan.docx".into());
        assert_eq!(
            attachment_links(&s),
            vec![
                ("/uploads/a/notes.pdf".to_string(), "notes.pdf".to_string()),
                ("/uploads/b/plan.docx".to_string(), "plan.docx".to_string()),
            ]
        );
    }

    #[test]
    fn coachee_card_fallbacks() {
        let orgs = vec![Organization { id: 3, name: "Acme".into(), ..Default::default() }];
        let coachee = Coachee {
            id: 7,
            firstname: "Amy".into(),
            lastname: "Lee".into(),
            status: false,
            org_id: Some(3),
            summary: Some("  ".into()),
            next_session: Some(SessionRef::Date("2026-04-01".into())),
            ..Default::default()
        };
        let card = CoacheeCardModel::new(&coachee, &orgs);
        assert_eq!(card.name, "Amy Lee");
        assert_eq!(card.status_text(), "Inactive");
        assert_eq!(card.organization.as_deref(), Some("Acme"));
        assert_eq!(card.summary, NO_SUMMARY);
        assert_eq!(card.next_session.as_deref(), Some("2026-04-01"));
        assert_eq!(card.last_session, None);
    }

    #[test]
    fn coach_sessions_upcoming_first() {
        let sessions = vec![
            session(1, "2026-03-01 10:00"),
            session(2, "2026-03-20 10:00"),
            session(3, "garbage"),
            session(4, "2026-03-12 10:00"),
            session(5, "2026-03-05 10:00"),
        ];
        let ids: Vec<i64> = order_coach_sessions(&sessions, now()).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4, 2, 5, 1, 3]);
    }
}
