use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    /// Prefix shared by every backend route ("" or e.g. "/api")
    pub api_prefix: String,
    pub enable_logging: bool,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://127.0.0.1:8000".to_string(),
            backend_url_production: String::new(),
            environment: "development".to_string(),
            api_prefix: String::new(),
            enable_logging: true,
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UIConfig {
    /// Time the modal close animation gets before the container is cleared
    pub modal_close_delay_ms: u32,
    pub server_ping_interval_ms: u32,
    pub toast_duration_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            modal_close_delay_ms: 300,
            server_ping_interval_ms: 5000,
            toast_duration_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL_DEVELOPMENT" => option_env!("BACKEND_URL_DEVELOPMENT"),
            "BACKEND_URL_PRODUCTION" => option_env!("BACKEND_URL_PRODUCTION"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "API_PREFIX" => option_env!("API_PREFIX"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "MODAL_CLOSE_DELAY_MS" => option_env!("MODAL_CLOSE_DELAY_MS"),
            "SERVER_PING_INTERVAL_MS" => option_env!("SERVER_PING_INTERVAL_MS"),
            "TOAST_DURATION_MS" => option_env!("TOAST_DURATION_MS"),
            _ => None,
        })
    }

    /// Build from an arbitrary key lookup, falling back to defaults for
    /// missing or unparseable values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        let string = |key: &str, default: String| lookup(key).map(str::to_string).unwrap_or(default);
        let number = |key: &str, default: u32| lookup(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default);

        Self {
            backend_url_development: string("BACKEND_URL_DEVELOPMENT", defaults.backend_url_development),
            backend_url_production: string("BACKEND_URL_PRODUCTION", defaults.backend_url_production),
            environment: string("ENVIRONMENT", defaults.environment),
            api_prefix: string("API_PREFIX", defaults.api_prefix),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            ui_config: UIConfig {
                modal_close_delay_ms: number("MODAL_CLOSE_DELAY_MS", defaults.ui_config.modal_close_delay_ms),
                server_ping_interval_ms: number("SERVER_PING_INTERVAL_MS", defaults.ui_config.server_ping_interval_ms),
                toast_duration_ms: number("TOAST_DURATION_MS", defaults.ui_config.toast_duration_ms),
            },
        }
    }

    /// Backend URL for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn production_uses_production_url() {
        let config = AppConfig::from_lookup(|key| match key {
            "ENVIRONMENT" => Some("production"),
            "BACKEND_URL_PRODUCTION" => Some("https://coach.example.org"),
            _ => None,
        });
        assert_eq!(config.backend_url(), "https://coach.example.org");
    }

    #[test]
    fn bad_numbers_keep_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            "MODAL_CLOSE_DELAY_MS" => Some("soon"),
            "SERVER_PING_INTERVAL_MS" => Some(" 1000 "),
            "ENABLE_LOGGING" => Some("false"),
            _ => None,
        });
        assert_eq!(config.ui_config.modal_close_delay_ms, 300);
        assert_eq!(config.ui_config.server_ping_interval_ms, 1000);
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
