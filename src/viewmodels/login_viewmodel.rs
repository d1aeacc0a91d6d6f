// ============================================================================
// LOGIN VIEWMODEL
// ============================================================================

use crate::models::{LoginDestination, LoginForm};
use crate::services::{build_form_data, ApiClient, ApiError};
use crate::state::{AppState, IncrementalUpdate};

pub const CONNECTION_FAILED: &str = "Error connecting to server. Check if backend is running.";

pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => CONNECTION_FAILED.to_string(),
        ApiError::Http { .. } => format!("Login failed: {}", err.detail()),
        ApiError::Parse(_) => "Login failed: unexpected response from server".to_string(),
        ApiError::Form(detail) => format!("Login failed: {}", detail),
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    api: ApiClient,
    state: AppState,
}

impl LoginViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            api: ApiClient::new(),
            state,
        }
    }

    /// Where to go next; the error is already phrased for the user
    pub async fn login(&self, form: LoginForm) -> Result<LoginDestination, String> {
        form.validate()?;
        log::info!("🔐 [LOGIN] Signing in {}", form.email.trim());

        let body = build_form_data(&form.entries(), &[]).map_err(|e| login_error_message(&e))?;
        match self.api.login(body).await {
            Ok(response) => {
                log::info!("✅ [LOGIN] role={} id={}", response.role, response.id);
                Ok(response.destination())
            }
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                Err(login_error_message(&e))
            }
        }
    }

    pub async fn check_server(&self) {
        let online = self.api.ping().await;
        if self.state.get_server_online() != Some(online) {
            log::info!("📡 [LOGIN] Server {}", if online { "online" } else { "offline" });
        }
        self.state.set_server_online(online);
        self.state.notify(IncrementalUpdate::ServerStatus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_backend_has_a_fixed_message() {
        let err = ApiError::Network("TypeError: NetworkError".into());
        assert_eq!(login_error_message(&err), CONNECTION_FAILED);
    }

    #[test]
    fn rejected_credentials_show_the_detail() {
        let err = ApiError::http(401, "Unauthorized", r#"{"detail": "Invalid email or password"}"#);
        assert_eq!(login_error_message(&err), "Login failed: Invalid email or password");
    }
}
