// ============================================================================
// API ROUTES - Single place where backend paths are spelled out
// ============================================================================

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRoutes {
    base_url: String,
    prefix: String,
}

impl ApiRoutes {
    /// `base_url` may be empty (same origin). `prefix` is normalised to
    /// either "" or "/segment" without a trailing slash.
    pub fn new(base_url: &str, prefix: &str) -> Self {
        let prefix = prefix.trim().trim_matches('/');
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            prefix: if prefix.is_empty() {
                String::new()
            } else {
                format!("/{}", prefix)
            },
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.backend_url(), &config.api_prefix)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.prefix, path)
    }

    fn scoped(&self, path: &str, coach_id: i64) -> String {
        format!("{}?coach_id={}", self.url(path), coach_id)
    }

    pub fn ping(&self) -> String {
        self.url("/ping")
    }

    pub fn login(&self) -> String {
        self.url("/login")
    }

    pub fn coach(&self, coach_id: i64) -> String {
        self.url(&format!("/coach/{}", coach_id))
    }

    pub fn coach_coachees(&self, coach_id: i64) -> String {
        self.url(&format!("/coach/{}/coachees", coach_id))
    }

    pub fn coach_sessions(&self, coach_id: i64) -> String {
        self.url(&format!("/coach/{}/sessions", coach_id))
    }

    pub fn coach_assignments(&self, coach_id: i64) -> String {
        self.url(&format!("/coach/{}/assignments", coach_id))
    }

    pub fn coach_add_coachee(&self, coach_id: i64) -> String {
        self.url(&format!("/coach/{}/add_coachee", coach_id))
    }

    pub fn coachees(&self) -> String {
        self.url("/coachee")
    }

    pub fn coachee(&self, coachee_id: i64) -> String {
        self.url(&format!("/coachee/{}", coachee_id))
    }

    pub fn coachee_sessions(&self, coachee_id: i64, coach_id: i64) -> String {
        self.scoped(&format!("/coachee/{}/sessions", coachee_id), coach_id)
    }

    pub fn regenerate_summary(&self, coachee_id: i64) -> String {
        self.url(&format!("/coachee/{}/regenerate_summary", coachee_id))
    }

    pub fn organizations(&self) -> String {
        self.url("/coachee_organizations")
    }

    pub fn sessions(&self, coach_id: i64) -> String {
        self.scoped("/session", coach_id)
    }

    pub fn session(&self, session_id: i64) -> String {
        self.url(&format!("/session/{}", session_id))
    }

    pub fn session_scoped(&self, session_id: i64, coach_id: i64) -> String {
        self.scoped(&format!("/session/{}", session_id), coach_id)
    }
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self::from_config(&crate::config::CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_without_prefix() {
        let routes = ApiRoutes::new("", "");
        assert_eq!(routes.coach(3), "/coach/3");
        assert_eq!(routes.coach_coachees(3), "/coach/3/coachees");
        assert_eq!(routes.organizations(), "/coachee_organizations");
        assert_eq!(routes.regenerate_summary(9), "/coachee/9/regenerate_summary");
    }

    #[test]
    fn base_url_and_prefix_are_normalised() {
        let routes = ApiRoutes::new("http://127.0.0.1:8000/", "api/");
        assert_eq!(routes.login(), "http://127.0.0.1:8000/api/login");
        assert_eq!(routes.coachees(), "http://127.0.0.1:8000/api/coachee");

        let slashed = ApiRoutes::new("http://h", "/api");
        assert_eq!(slashed, routes_with("http://h", "/api"));
    }

    fn routes_with(base: &str, prefix: &str) -> ApiRoutes {
        ApiRoutes { base_url: base.to_string(), prefix: prefix.to_string() }
    }

    #[test]
    fn session_mutations_are_scoped_to_the_coach() {
        let routes = ApiRoutes::new("", "");
        assert_eq!(routes.sessions(2), "/session?coach_id=2");
        assert_eq!(routes.session_scoped(11, 2), "/session/11?coach_id=2");
        assert_eq!(routes.coachee_sessions(5, 2), "/coachee/5/sessions?coach_id=2");
        assert_eq!(routes.session(11), "/session/11");
    }
}
