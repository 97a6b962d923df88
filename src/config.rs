//! App Configuration
//!
//! Read once at compile time from `TODO_*` environment variables,
//! falling back to local development defaults.

use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:5001/api";
const DEFAULT_LOGIN_PATH: &str = "/users/login";
const DEFAULT_REGISTER_PATH: &str = "/users/register";
const DEFAULT_TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every API path is appended to
    pub api_url: String,
    pub login_path: String,
    pub register_path: String,
    /// Prefix for the token in `Authorization`; empty sends the bare token
    pub auth_scheme: String,
    /// How long a toast stays visible
    pub toast_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            auth_scheme: String::new(),
            toast_ms: DEFAULT_TOAST_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "TODO_API_URL" => option_env!("TODO_API_URL"),
            "TODO_LOGIN_PATH" => option_env!("TODO_LOGIN_PATH"),
            "TODO_REGISTER_PATH" => option_env!("TODO_REGISTER_PATH"),
            "TODO_AUTH_SCHEME" => option_env!("TODO_AUTH_SCHEME"),
            "TODO_TOAST_MS" => option_env!("TODO_TOAST_MS"),
            "TODO_LOG_LEVEL" => option_env!("TODO_LOG_LEVEL"),
            _ => None,
        })
    }

    fn from_lookup(get: impl Fn(&str) -> Option<&'static str>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: non_empty(get("TODO_API_URL"))
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            login_path: non_empty(get("TODO_LOGIN_PATH"))
                .map(normalize_path)
                .unwrap_or(defaults.login_path),
            register_path: non_empty(get("TODO_REGISTER_PATH"))
                .map(normalize_path)
                .unwrap_or(defaults.register_path),
            auth_scheme: non_empty(get("TODO_AUTH_SCHEME"))
                .map(str::to_string)
                .unwrap_or(defaults.auth_scheme),
            toast_ms: get("TODO_TOAST_MS")
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.toast_ms),
            log_level: get("TODO_LOG_LEVEL")
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// `Authorization` header value for a session token
    pub fn authorization(&self, token: &str) -> String {
        if self.auth_scheme.is_empty() {
            token.to_string()
        } else {
            format!("{} {}", self.auth_scheme, token)
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
