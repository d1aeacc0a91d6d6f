// ============================================================================
// FORMS - Field sets submitted as multipart bodies
// ============================================================================
// Each form turns into an ordered list of (name, value) pairs. Files are
// appended separately by `services::form_data`.
// ============================================================================

use crate::models::{Coach, Coachee, Session};

pub type FormEntries = Vec<(&'static str, String)>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionFields {
    pub date: String,
    pub topic: String,
    pub notes: String,
    pub approach: String,
    pub goals: String,
    pub nextsteps: String,
}

impl SessionFields {
    pub fn from_session(session: &Session) -> Self {
        Self {
            date: session.date.clone(),
            topic: session.topic.clone().unwrap_or_default(),
            notes: session.notes.clone().unwrap_or_default(),
            approach: session.approach.clone().unwrap_or_default(),
            goals: session.goals.clone().unwrap_or_default(),
            nextsteps: session.nextsteps.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.date.trim().is_empty() {
            return Err("Date & Time is required".to_string());
        }
        Ok(())
    }

    pub fn entries(&self) -> FormEntries {
        vec![
            ("date", self.date.trim().to_string()),
            ("topic", self.topic.clone()),
            ("notes", self.notes.clone()),
            ("approach", self.approach.clone()),
            ("goals", self.goals.clone()),
            ("nextsteps", self.nextsteps.clone()),
        ]
    }

    /// Body for `POST /session`
    pub fn create_entries(&self, coachee_id: i64) -> FormEntries {
        let mut entries = vec![("coachee_id", coachee_id.to_string())];
        entries.extend(self.entries());
        entries
    }

    /// Body for `PUT /session/{id}`. `existing_attachments` is always sent so
    /// that removing the last attachment is expressed too.
    pub fn update_entries(&self, session_id: i64, kept_attachments: &str) -> FormEntries {
        let mut entries = vec![("session_id", session_id.to_string())];
        entries.extend(self.entries());
        entries.push(("existing_attachments", kept_attachments.to_string()));
        entries
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoacheeFields {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub org_id: Option<i64>,
    pub status: bool,
    pub background: String,
    pub education: String,
    pub challenges: String,
    pub goals: String,
}

impl Default for CoacheeFields {
    fn default() -> Self {
        Self {
            firstname: String::new(),
            lastname: String::new(),
            email: String::new(),
            org_id: None,
            status: true,
            background: String::new(),
            education: String::new(),
            challenges: String::new(),
            goals: String::new(),
        }
    }
}

impl CoacheeFields {
    pub fn from_coachee(coachee: &Coachee) -> Self {
        Self {
            firstname: coachee.firstname.clone(),
            lastname: coachee.lastname.clone(),
            email: coachee.email.clone(),
            org_id: coachee.org_id,
            status: coachee.status,
            background: coachee.background.clone().unwrap_or_default(),
            education: coachee.education.clone().unwrap_or_default(),
            challenges: coachee.challenges.clone().unwrap_or_default(),
            goals: coachee.goals.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.firstname.trim().is_empty() || self.lastname.trim().is_empty() {
            return Err("First and last name are required".to_string());
        }
        if !self.email.contains('@') {
            return Err("A valid email is required".to_string());
        }
        Ok(())
    }

    pub fn entries(&self) -> FormEntries {
        let mut entries = vec![
            ("firstname", self.firstname.trim().to_string()),
            ("lastname", self.lastname.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("status", if self.status { "active" } else { "inactive" }.to_string()),
            ("background", self.background.clone()),
            ("education", self.education.clone()),
            ("challenges", self.challenges.clone()),
            ("goals", self.goals.clone()),
        ];
        if let Some(org_id) = self.org_id {
            entries.push(("org_id", org_id.to_string()));
        }
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileFields {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub qualifications: String,
    pub profile: String,
}

impl ProfileFields {
    pub fn from_coach(coach: &Coach) -> Self {
        Self {
            firstname: coach.firstname.clone(),
            lastname: coach.lastname.clone(),
            email: coach.email.clone(),
            qualifications: coach.qualifications.clone().unwrap_or_default(),
            profile: coach.profile.clone().unwrap_or_default(),
        }
    }

    pub fn entries(&self) -> FormEntries {
        vec![
            ("firstname", self.firstname.trim().to_string()),
            ("lastname", self.lastname.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("qualifications", self.qualifications.clone()),
            ("profile", self.profile.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrganizationFields {
    pub name: String,
    pub email: Option<String>,
}

impl OrganizationFields {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Organization name is required".to_string());
        }
        Ok(())
    }

    pub fn entries(&self) -> FormEntries {
        let mut entries = vec![("name", self.name.trim().to_string())];
        if let Some(email) = self.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            entries.push(("email", email.to_string()));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(entries: &'a FormEntries, name: &str) -> Option<&'a str> {
        entries.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn session_update_always_carries_kept_attachments() {
        let fields = SessionFields { date: " 10/20/2026 09:00 ".into(), ..Default::default() };
        let entries = fields.update_entries(5, "");
        assert_eq!(value(&entries, "session_id"), Some("5"));
        assert_eq!(value(&entries, "date"), Some("10/20/2026 09:00"));
        assert_eq!(value(&entries, "existing_attachments"), Some(""));
    }

    #[test]
    fn session_requires_a_date() {
        assert!(SessionFields::default().validate().is_err());
        let create = SessionFields { date: "10/20/2026 09:00".into(), ..Default::default() }
            .create_entries(8);
        assert_eq!(create[0], ("coachee_id", "8".to_string()));
    }

    #[test]
    fn coachee_entries_encode_status_and_optional_org() {
        let mut fields = CoacheeFields {
            firstname: "Ana".into(),
            lastname: "Ruiz".into(),
            email: "ana@x.org".into(),
            ..Default::default()
        };
        assert!(fields.validate().is_ok());
        assert_eq!(value(&fields.entries(), "status"), Some("active"));
        assert_eq!(value(&fields.entries(), "org_id"), None);

        fields.status = false;
        fields.org_id = Some(4);
        assert_eq!(value(&fields.entries(), "status"), Some("inactive"));
        assert_eq!(value(&fields.entries(), "org_id"), Some("4"));

        fields.email = "nope".into();
        assert!(fields.validate().is_err());
    }

    #[test]
    fn organization_email_is_optional() {
        let fields = OrganizationFields { name: " Acme ".into(), email: Some("  ".into()) };
        assert_eq!(fields.entries(), vec![("name", "Acme".to_string())]);
        assert!(OrganizationFields::default().validate().is_err());
    }
}
