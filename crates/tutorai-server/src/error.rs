//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Server error type
///
/// Every variant is a client error raised at the request boundary; the
/// grading, recommendation and generation rules themselves cannot fail.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Well-formed JSON that does not match the request schema
    #[error("Validation error: {0}")]
    Validation(String),

    /// Body could not be parsed as JSON
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request without a JSON content type
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::debug!(status = status.as_u16(), "Rejecting request: {}", self);

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ServerError::Validation("missing field `answer`".to_string());
        assert_eq!(err.to_string(), "Validation error: missing field `answer`");
    }

    #[test]
    fn test_invalid_request_display() {
        let err = ServerError::InvalidRequest("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "Invalid request: expected value at line 1");
    }

    #[test]
    fn test_not_found_display() {
        let err = ServerError::NotFound("/grade".to_string());
        assert_eq!(err.to_string(), "Not found: /grade");
    }

    #[test]
    fn test_into_response_validation() {
        let response = ServerError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_into_response_invalid_request() {
        let response = ServerError::InvalidRequest("bad input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_unsupported_media_type() {
        let response = ServerError::UnsupportedMediaType("text/plain".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_into_response_not_found() {
        let response = ServerError::NotFound("resource missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServerError>();
    }
}
