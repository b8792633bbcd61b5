//! API error type and its HTTP mapping.
//!
//! Status codes follow the message text: anything mentioning
//! "not exist" or "not found" is a 404, every other caller error is a
//! 400. Clients depend on this, so the mapping stays text-based even
//! though the domain errors are typed. Corruption and storage failures
//! are 500s and never echo their message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use colony_domain::ParseAlienTypeError;
use colony_usecase::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a colony endpoint can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    InvalidType(#[from] ParseAlienTypeError),
}

impl ApiError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(e) if e.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
            _ => status_for_message(&self.to_string()),
        }
    }
}

/// 404 for messages about missing aliens, 400 otherwise.
pub fn status_for_message(message: &str) -> StatusCode {
    if message.contains("not exist") || message.contains("not found") {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Colony operation failed");
            return (status, "Internal server error").into_response();
        }

        warn!(status = status.as_u16(), "{}", self);
        (status, self.to_string()).into_response()
    }
}
