use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::models::attachments::AttachmentList;
use crate::utils::dates::parse_session_date;

// ============================================================================
// COACHING SESSION
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    pub id: i64,
    #[serde(default, alias = "session_coachee")]
    pub coachee_id: Option<i64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub approach: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub nextsteps: Option<String>,
    /// Backend tag, usually "open" or "completed"
    #[serde(default)]
    pub status: Option<String>,
    /// Comma-joined attachment URLs
    #[serde(default)]
    pub attachments: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Status shown to the coach. Derived on the client, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLabel {
    Completed,
    Scheduled,
    NeedsReschedule,
}

impl SessionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionLabel::Completed => "completed",
            SessionLabel::Scheduled => "scheduled",
            SessionLabel::NeedsReschedule => "needs reschedule",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SessionLabel::Completed => "badge-completed",
            SessionLabel::Scheduled => "badge-scheduled",
            SessionLabel::NeedsReschedule => "badge-reschedule",
        }
    }
}

impl Session {
    pub fn is_completed(&self) -> bool {
        self.status
            .as_deref()
            .map_or(false, |s| s.trim().eq_ignore_ascii_case("completed"))
    }

    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        parse_session_date(&self.date)
    }

    /// Strictly after `now`. An unreadable date is never in the future.
    pub fn is_future(&self, now: NaiveDateTime) -> bool {
        self.scheduled_at().map_or(false, |at| at > now)
    }

    pub fn label(&self, now: NaiveDateTime) -> SessionLabel {
        if self.is_completed() {
            SessionLabel::Completed
        } else if self.is_future(now) {
            SessionLabel::Scheduled
        } else {
            SessionLabel::NeedsReschedule
        }
    }

    /// Delete is only exposed for sessions that have not happened yet
    pub fn can_delete(&self, now: NaiveDateTime) -> bool {
        self.is_future(now)
    }

    /// Saving an edit to a past session asks the coach to confirm first
    pub fn edit_needs_confirmation(&self, now: NaiveDateTime) -> bool {
        !self.is_future(now)
    }

    pub fn attachment_list(&self) -> AttachmentList {
        AttachmentList::parse(self.attachments.as_deref())
    }

    pub fn display_topic(&self) -> &str {
        match self.topic.as_deref().map(str::trim) {
            Some(topic) if !topic.is_empty() => topic,
            _ => "No topic",
        }
    }
}
