use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_active() -> bool {
    true
}

/// Coach profile (`GET /coach/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coach {
    pub id: i64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub qualifications: Option<String>,
    /// Free-text bio
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default = "default_active", deserialize_with = "crate::models::coachee::active_flag")]
    pub status: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Coach {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname).trim().to_string()
    }

    pub fn bio(&self) -> Option<&str> {
        self.profile.as_deref().map(str::trim).filter(|bio| !bio.is_empty())
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_active_and_bio_is_trimmed() {
        let json = r#"{"id": 3, "firstname": "Maya", "lastname": "Okafor",
                       "email": "maya@coach.io", "profile": "   ", "photo": ""}"#;
        let coach: Coach = serde_json::from_str(json).unwrap();
        assert!(coach.status);
        assert_eq!(coach.full_name(), "Maya Okafor");
        assert_eq!(coach.bio(), None);
        assert_eq!(coach.photo_url(), None);
    }
}
