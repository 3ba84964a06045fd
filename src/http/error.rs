use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::PressroomError;

/// Request-facing errors. Everything that is not a client mistake collapses
/// into a generic 500; the detail goes to the log, never to the client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<PressroomError> for ApiError {
    fn from(err: PressroomError) -> Self {
        match err {
            PressroomError::Validation(message) => ApiError::Validation(message),
            PressroomError::NotFound(message) => ApiError::NotFound(message),
            other => {
                error!(error = %other, "request failed");
                ApiError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_io_failures_do_not_leak_detail() {
        let err: ApiError =
            PressroomError::Io(std::io::Error::other("disk on fire")).into();
        assert!(matches!(err, ApiError::Internal));
        assert_eq!(err.to_string(), "Internal server error");
    }
}
