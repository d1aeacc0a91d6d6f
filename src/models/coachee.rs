use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Coachee as returned by `GET /coach/{id}/coachees` and `GET /coachee/{id}`.
/// Fields this client does not read are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Coachee {
    pub id: i64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    /// Active flag; the backend sends either a bool or "active"/"inactive"
    #[serde(default, deserialize_with = "active_flag")]
    pub status: bool,
    #[serde(default, alias = "coachee_org")]
    pub org_id: Option<i64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub next_session: Option<SessionRef>,
    #[serde(default)]
    pub last_session: Option<SessionRef>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default, alias = "edu")]
    pub education: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference to a neighbouring session: either a small object or just a date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SessionRef {
    Summary {
        #[serde(default)]
        id: Option<i64>,
        date: String,
        #[serde(default)]
        topic: Option<String>,
    },
    Date(String),
    Other(Value),
}

impl SessionRef {
    pub fn date(&self) -> &str {
        match self {
            SessionRef::Summary { date, .. } => date,
            SessionRef::Date(date) => date,
            SessionRef::Other(_) => "",
        }
    }
}

impl Coachee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname).trim().to_string()
    }
}

/// Active coachees first, then case-insensitive full name. Stable, so equal
/// names keep their backend order.
pub fn compare_coachees(a: &Coachee, b: &Coachee) -> Ordering {
    b.status
        .cmp(&a.status)
        .then_with(|| a.full_name().to_lowercase().cmp(&b.full_name().to_lowercase()))
}

pub fn sort_coachees(coachees: &mut [Coachee]) {
    coachees.sort_by(compare_coachees);
}

pub(crate) fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_i64().map_or(false, |n| n != 0),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "active" | "true" | "1"),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coachee(first: &str, last: &str, status: bool) -> Coachee {
        Coachee {
            firstname: first.to_string(),
            lastname: last.to_string(),
            status,
            ..Default::default()
        }
    }

    fn names(list: &[Coachee]) -> Vec<String> {
        list.iter().map(Coachee::full_name).collect()
    }

    #[test]
    fn active_before_inactive() {
        let mut list = vec![coachee("Bob", "", false), coachee("Amy", "", true)];
        sort_coachees(&mut list);
        assert_eq!(names(&list), vec!["Amy", "Bob"]);
    }

    #[test]
    fn groups_are_sorted_case_insensitively() {
        let mut list = vec![
            coachee("zoe", "Hart", true),
            coachee("Carl", "Ng", false),
            coachee("adam", "Smith", false),
            coachee("Beth", "Lee", true),
            coachee("abe", "Young", true),
        ];
        sort_coachees(&mut list);
        assert_eq!(
            names(&list),
            vec!["abe Young", "Beth Lee", "zoe Hart", "adam Smith", "Carl Ng"]
        );
        let first_inactive = list.iter().position(|c| !c.status).unwrap();
        assert!(list[first_inactive..].iter().all(|c| !c.status));
    }

    #[test]
    fn status_accepts_bool_and_tags() {
        let json = r#"[
            {"id": 1, "firstname": "A", "status": true},
            {"id": 2, "firstname": "B", "status": "inactive"},
            {"id": 3, "firstname": "C", "status": "active"},
            {"id": 4, "firstname": "D"},
            {"id": 5, "firstname": "E", "status": null}
        ]"#;
        let list: Vec<Coachee> = serde_json::from_str(json).unwrap();
        let flags: Vec<bool> = list.iter().map(|c| c.status).collect();
        assert_eq!(flags, vec![true, false, true, false, false]);
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let json = r#"{"id": 7, "firstname": "Ana", "lastname": "Ruiz", "email": "ana@x.org",
                       "status": true, "coachee_org": 3, "favourite_colour": "teal",
                       "next_session": {"id": 9, "date": "2026-11-01T10:00:00"},
                       "last_session": "2026-10-01"}"#;
        let parsed: Coachee = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.org_id, Some(3));
        assert_eq!(parsed.extra.get("favourite_colour"), Some(&Value::from("teal")));
        assert_eq!(parsed.next_session.as_ref().map(SessionRef::date), Some("2026-11-01T10:00:00"));
        assert_eq!(parsed.last_session.as_ref().map(SessionRef::date), Some("2026-10-01"));

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["favourite_colour"], "teal");
    }
}
