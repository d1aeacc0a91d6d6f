use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Training module assigned to a coachee (`GET /coach/{id}/assignments`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    #[serde(alias = "assignment_id")]
    pub id: i64,
    #[serde(default, alias = "assignment_module")]
    pub module: Option<String>,
    #[serde(default, alias = "assignment_description")]
    pub description: Option<String>,
    #[serde(default, alias = "assignment_duedate", alias = "due_date")]
    pub duedate: Option<String>,
    #[serde(default, alias = "assignment_status")]
    pub status: Option<String>,
    #[serde(default, alias = "assignment_coachee")]
    pub coachee_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Assignment {
    pub fn title(&self) -> &str {
        self.module
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("Untitled module")
    }

    /// "not_started" -> "not started"
    pub fn status_text(&self) -> String {
        self.status.as_deref().unwrap_or("not_started").replace('_', " ")
    }
}
