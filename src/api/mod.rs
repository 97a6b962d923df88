//! Remote API Client
//!
//! Typed wrappers over the todo API, organized by domain. Every call
//! reports its outcome through [`ClientHooks`] before returning.

mod error;
mod transport;
mod fetch;
mod todo;
mod auth;

#[cfg(test)]
mod tests;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::notice::{Notice, Operation};

pub use error::{ApiError, ApiResult};
pub use fetch::FetchTransport;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Characters escaped in an id path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Side effects of API outcomes on the rest of the app
pub trait ClientHooks {
    /// Show a toast
    fn notify(&self, notice: Notice);

    /// Drop the stored session and return to the login page
    fn session_expired(&self);
}

pub struct ApiClient<T, H> {
    base_url: String,
    login_path: String,
    register_path: String,
    config: AppConfig,
    transport: T,
    hooks: H,
}

impl<T: Transport, H: ClientHooks> ApiClient<T, H> {
    pub fn new(config: &AppConfig, transport: T, hooks: H) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            login_path: config.login_path.clone(),
            register_path: config.register_path.clone(),
            config: config.clone(),
            transport,
            hooks,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn todo_path(id: &str) -> String {
        format!("/todos/{}", utf8_percent_encode(id, PATH_SEGMENT))
    }

    fn request(&self, method: HttpMethod, path: &str, token: Option<&str>) -> HttpRequest {
        let request = HttpRequest::new(method, self.url(path))
            .with_header("Content-Type", "application/json");
        match token {
            Some(token) => request.with_header("Authorization", self.config.authorization(token)),
            None => request,
        }
    }

    /// Send, classify, decode, then report the outcome
    async fn call<R, F>(&self, op: Operation, request: ApiResult<HttpRequest>, decode: F) -> ApiResult<R>
    where
        F: FnOnce(&str) -> ApiResult<R>,
    {
        let outcome = match request {
            Ok(request) => self.dispatch(op, request).await.and_then(|body| decode(&body)),
            Err(err) => Err(err),
        };
        self.report(op, &outcome);
        outcome
    }

    async fn dispatch(&self, op: Operation, request: HttpRequest) -> ApiResult<String> {
        log::debug!("[API] {} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|err| {
            if self.transport.is_online() {
                ApiError::Failed(err.to_string())
            } else {
                ApiError::Offline
            }
        })?;

        match ApiError::from_status(op, response.status) {
            Some(err) => Err(err),
            None => Ok(response.body),
        }
    }

    fn report<R>(&self, op: Operation, outcome: &ApiResult<R>) {
        match outcome {
            Ok(_) => {
                if let Some(notice) = op.success_notice() {
                    self.hooks.notify(notice);
                }
            }
            Err(err) => {
                log::warn!("[API] {:?} failed: {}", op, err);
                if *err == ApiError::SessionExpired {
                    self.hooks.session_expired();
                }
                self.hooks.notify(op.failure_notice(err));
            }
        }
    }
}

fn decode_json<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    serde_json::from_str(body).map_err(|e| ApiError::Failed(format!("invalid response: {}", e)))
}

fn with_json<B: serde::Serialize>(request: HttpRequest, body: &B) -> ApiResult<HttpRequest> {
    serde_json::to_string(body)
        .map(|json| request.with_body(json))
        .map_err(|e| ApiError::Failed(format!("invalid request: {}", e)))
}
