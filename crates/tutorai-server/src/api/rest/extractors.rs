//! Custom extractors
//!
//! Wraps axum's `Json` so that decoding failures use the server error body.

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

/// JSON extractor whose rejections are `ServerError`s
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(match rejection {
                JsonRejection::JsonDataError(err) => ServerError::Validation(err.body_text()),
                JsonRejection::JsonSyntaxError(err) => ServerError::InvalidRequest(err.body_text()),
                JsonRejection::MissingJsonContentType(_) => ServerError::UnsupportedMediaType(
                    "expected 'Content-Type: application/json'".to_string(),
                ),
                other => ServerError::InvalidRequest(other.body_text()),
            }),
        }
    }
}
