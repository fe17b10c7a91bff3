//! Unit tests for ServerError responses

use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tutorai_server::error::ServerError;

async fn body_json(error: ServerError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_body() {
    let (status, json) = body_json(ServerError::Validation("missing field `topic`".to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json,
        json!({"error": "Validation error: missing field `topic`", "status": 422})
    );
}

#[tokio::test]
async fn test_invalid_request_body() {
    let (status, json) = body_json(ServerError::InvalidRequest("EOF while parsing".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_unsupported_media_type_body() {
    let (status, json) =
        body_json(ServerError::UnsupportedMediaType("text/plain".to_string())).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["status"], 415);
}

#[tokio::test]
async fn test_not_found_body() {
    let (status, json) = body_json(ServerError::NotFound("/nope".to_string())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found: /nope");
}

#[test]
fn test_status_code_mapping() {
    assert_eq!(
        ServerError::Validation(String::new()).status_code(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        ServerError::NotFound(String::new()).status_code(),
        StatusCode::NOT_FOUND
    );
}
