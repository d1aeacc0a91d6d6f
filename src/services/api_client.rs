// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic: one method per backend route. Reads return JSON,
// writes send multipart bodies.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;
use crate::models::{Assignment, Coach, Coachee, LoginResponse, Organization, Session};
use crate::services::error::ApiError;
use crate::services::routes::ApiRoutes;

#[derive(Clone, Default)]
pub struct ApiClient {
    routes: ApiRoutes,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client for another backend, such as a local test server
    pub fn with_routes(routes: ApiRoutes) -> Self {
        Self { routes }
    }

    // ---- transport helpers ----

    async fn checked(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::http(status, &status_text, &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = Request::get(url).send().await?;
        let response = Self::checked(response).await?;
        response.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn send_form(builder: RequestBuilder, form: FormData) -> Result<Response, ApiError> {
        let request = builder.body(form).map_err(|e| ApiError::Form(e.to_string()))?;
        let response = request.send().await?;
        Self::checked(response).await
    }

    async fn send_empty(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        Self::checked(response).await
    }

    /// Mutations may or may not echo the record back
    async fn optional_json<T: DeserializeOwned>(response: Response) -> Option<T> {
        let text = response.text().await.ok()?;
        serde_json::from_str(&text).ok()
    }

    // ---- auth ----

    pub async fn ping(&self) -> bool {
        match Request::get(&self.routes.ping()).send().await {
            Ok(response) => response.ok(),
            Err(_) => false,
        }
    }

    pub async fn login(&self, form: FormData) -> Result<LoginResponse, ApiError> {
        let response = Self::send_form(Request::post(&self.routes.login()), form).await?;
        response.json::<LoginResponse>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    // ---- coach ----

    pub async fn get_coach(&self, coach_id: i64) -> Result<Coach, ApiError> {
        log::info!("👤 [API] GET coach {}", coach_id);
        self.get_json(&self.routes.coach(coach_id)).await
    }

    pub async fn update_coach(&self, coach_id: i64, form: FormData) -> Result<Option<Coach>, ApiError> {
        log::info!("📝 [API] PUT coach {}", coach_id);
        let response = Self::send_form(Request::put(&self.routes.coach(coach_id)), form).await?;
        Ok(Self::optional_json(response).await)
    }

    pub async fn get_coach_coachees(&self, coach_id: i64) -> Result<Vec<Coachee>, ApiError> {
        self.get_json(&self.routes.coach_coachees(coach_id)).await
    }

    pub async fn get_coach_sessions(&self, coach_id: i64) -> Result<Vec<Session>, ApiError> {
        self.get_json(&self.routes.coach_sessions(coach_id)).await
    }

    pub async fn get_coach_assignments(&self, coach_id: i64) -> Result<Vec<Assignment>, ApiError> {
        self.get_json(&self.routes.coach_assignments(coach_id)).await
    }

    /// Link an existing coachee to the coach by email
    pub async fn add_coachee_to_coach(&self, coach_id: i64, form: FormData) -> Result<(), ApiError> {
        log::info!("🔗 [API] POST add_coachee for coach {}", coach_id);
        Self::send_form(Request::post(&self.routes.coach_add_coachee(coach_id)), form).await?;
        Ok(())
    }

    // ---- coachee ----

    pub async fn get_coachee(&self, coachee_id: i64) -> Result<Coachee, ApiError> {
        self.get_json(&self.routes.coachee(coachee_id)).await
    }

    pub async fn create_coachee(&self, form: FormData) -> Result<Option<Coachee>, ApiError> {
        log::info!("➕ [API] POST coachee");
        let response = Self::send_form(Request::post(&self.routes.coachees()), form).await?;
        Ok(Self::optional_json(response).await)
    }

    pub async fn update_coachee(&self, coachee_id: i64, form: FormData) -> Result<Option<Coachee>, ApiError> {
        log::info!("📝 [API] PUT coachee {}", coachee_id);
        let response = Self::send_form(Request::put(&self.routes.coachee(coachee_id)), form).await?;
        Ok(Self::optional_json(response).await)
    }

    pub async fn delete_coachee(&self, coachee_id: i64) -> Result<(), ApiError> {
        log::info!("🗑️ [API] DELETE coachee {}", coachee_id);
        Self::send_empty(Request::delete(&self.routes.coachee(coachee_id))).await?;
        Ok(())
    }

    pub async fn regenerate_summary(&self, coachee_id: i64) -> Result<String, ApiError> {
        log::info!("✨ [API] POST regenerate_summary for coachee {}", coachee_id);
        let response = Self::send_empty(Request::post(&self.routes.regenerate_summary(coachee_id))).await?;
        let text = response.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        parse_summary(&text)
    }

    // ---- organizations ----

    pub async fn get_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.get_json(&self.routes.organizations()).await
    }

    pub async fn create_organization(&self, form: FormData) -> Result<Option<Organization>, ApiError> {
        log::info!("🏢 [API] POST coachee_organizations");
        let response = Self::send_form(Request::post(&self.routes.organizations()), form).await?;
        Ok(Self::optional_json(response).await)
    }

    // ---- sessions ----

    pub async fn get_coachee_sessions(&self, coachee_id: i64, coach_id: i64) -> Result<Vec<Session>, ApiError> {
        log::info!("📋 [API] GET sessions for coachee {}", coachee_id);
        self.get_json(&self.routes.coachee_sessions(coachee_id, coach_id)).await
    }

    pub async fn get_session(&self, session_id: i64) -> Result<Session, ApiError> {
        self.get_json(&self.routes.session(session_id)).await
    }

    pub async fn create_session(&self, coach_id: i64, form: FormData) -> Result<Option<Session>, ApiError> {
        log::info!("➕ [API] POST session");
        let response = Self::send_form(Request::post(&self.routes.sessions(coach_id)), form).await?;
        Ok(Self::optional_json(response).await)
    }

    pub async fn update_session(&self, session_id: i64, coach_id: i64, form: FormData) -> Result<Option<Session>, ApiError> {
        log::info!("📝 [API] PUT session {}", session_id);
        let response = Self::send_form(Request::put(&self.routes.session_scoped(session_id, coach_id)), form).await?;
        Ok(Self::optional_json(response).await)
    }

    pub async fn delete_session(&self, session_id: i64, coach_id: i64) -> Result<(), ApiError> {
        log::info!("🗑️ [API] DELETE session {}", session_id);
        Self::send_empty(Request::delete(&self.routes.session_scoped(session_id, coach_id))).await?;
        Ok(())
    }
}

/// `regenerate_summary` answers with `{"summary": "..."}`, the updated
/// coachee, or a bare JSON string
pub fn parse_summary(body: &str) -> Result<String, ApiError> {
    let json: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    match json {
        serde_json::Value::String(summary) => Ok(summary),
        serde_json::Value::Object(map) => map
            .get("summary")
            .and_then(|s| s.as_str())
            .map(str::to_string)
            .ok_or_else(|| ApiError::Parse("response has no summary".to_string())),
        _ => Err(ApiError::Parse("unexpected summary payload".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_payload_shapes() {
        assert_eq!(parse_summary(r#"{"summary": "Making progress"}"#).unwrap(), "Making progress");
        assert_eq!(parse_summary(r#"{"id": 2, "firstname": "A", "summary": "S"}"#).unwrap(), "S");
        assert_eq!(parse_summary(r#""plain""#).unwrap(), "plain");
        assert!(matches!(parse_summary(r#"{"id": 2}"#), Err(ApiError::Parse(_))));
        assert!(matches!(parse_summary("not json"), Err(ApiError::Parse(_))));
    }
}
