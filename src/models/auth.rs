use serde::{Deserialize, Serialize};
use crate::utils::constants::{COACH_ID_PARAM, DASHBOARD_PAGE};

/// `POST /login` success body
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub role: String,
    pub id: i64,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Role {
    Coach,
    Admin,
    CoachOrg,
    CoacheeOrg,
    Coachee,
    Unknown(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "coach" => Role::Coach,
            "admin" => Role::Admin,
            "coach_org" => Role::CoachOrg,
            "coachee_org" => Role::CoacheeOrg,
            "coachee" => Role::Coachee,
            other => Role::Unknown(other.to_string()),
        }
    }
}

/// What the login page does after a successful login
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LoginDestination {
    Navigate(String),
    Notice(&'static str),
}

impl LoginResponse {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    /// Only coaches have a dashboard today; every other role gets a notice
    pub fn destination(&self) -> LoginDestination {
        match self.role() {
            Role::Coach => LoginDestination::Navigate(format!(
                "{}?{}={}",
                DASHBOARD_PAGE, COACH_ID_PARAM, self.id
            )),
            Role::Admin => LoginDestination::Notice("Admin dashboard coming soon!"),
            Role::CoachOrg => LoginDestination::Notice("Coach organization dashboard coming soon!"),
            Role::CoacheeOrg => LoginDestination::Notice("Coachee organization dashboard coming soon!"),
            Role::Coachee => LoginDestination::Notice("Coachee dashboard coming soon!"),
            Role::Unknown(_) => LoginDestination::Notice("Unknown user type."),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("email", self.email.trim().to_string()),
            ("password", self.password.trim().to_string()),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err("Please enter your email and password".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(role: &str, id: i64) -> LoginResponse {
        LoginResponse { role: role.to_string(), id }
    }

    #[test]
    fn coach_goes_to_dashboard() {
        assert_eq!(
            response("coach", 42).destination(),
            LoginDestination::Navigate("coach_dashboard.html?coach_id=42".to_string())
        );
    }

    #[test]
    fn other_roles_get_notices() {
        assert_eq!(
            response("admin", 1).destination(),
            LoginDestination::Notice("Admin dashboard coming soon!")
        );
        assert_eq!(
            response("coachee_org", 1).destination(),
            LoginDestination::Notice("Coachee organization dashboard coming soon!")
        );
        assert_eq!(
            response("wizard", 1).destination(),
            LoginDestination::Notice("Unknown user type.")
        );
    }

    #[test]
    fn form_is_trimmed_and_validated() {
        let form = LoginForm { email: " coach@x.io ".into(), password: " pw ".into() };
        assert!(form.validate().is_ok());
        assert_eq!(form.entries()[0], ("email", "coach@x.io".to_string()));

        let empty = LoginForm { email: "a@b.c".into(), password: "   ".into() };
        assert!(empty.validate().is_err());
    }
}
