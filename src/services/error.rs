use thiserror::Error;

/// Failures of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch() rejected: backend unreachable, CORS, offline
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// Body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),
    /// The multipart body could not be assembled
    #[error("Form error: {0}")]
    Form(String),
}

impl ApiError {
    pub fn http(status: u16, status_text: &str, body: &str) -> Self {
        ApiError::Http {
            status,
            message: http_error_message(status_text, body),
        }
    }

    /// Short text for alerts: the backend's `detail` when it sent one
    pub fn detail(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// FastAPI reports errors as `{"detail": "..."}` or `{"detail": [{"msg": ...}]}`
pub fn http_error_message(status_text: &str, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| match json.get("detail")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            other => Some(other.to_string()),
        });

    match detail {
        Some(detail) => detail,
        None if !body.trim().is_empty() && body.len() <= 200 => body.trim().to_string(),
        None if !status_text.is_empty() => status_text.to_string(),
        None => "Unknown error".to_string(),
    }
}
