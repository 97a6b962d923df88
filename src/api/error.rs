//! API Errors
//!
//! Failure categories the client reports to callers.

use thiserror::Error;

use crate::notice::Operation;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("session expired")]
    SessionExpired,
    #[error("not found")]
    NotFound,
    #[error("duplicate resource")]
    Duplicate,
    #[error("credentials rejected")]
    Forbidden,
    #[error("browser is offline")]
    Offline,
    #[error("request failed: {0}")]
    Failed(String),
}

impl ApiError {
    /// Classify a response status; `None` for success
    pub fn from_status(op: Operation, status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 if op.requires_session() => Some(ApiError::SessionExpired),
            401 | 403 => Some(ApiError::Forbidden),
            404 => Some(ApiError::NotFound),
            409 => Some(ApiError::Duplicate),
            other => Some(ApiError::Failed(format!("unexpected status {}", other))),
        }
    }
}
