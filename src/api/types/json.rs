//! Lenient JSON extractor that reports errors in the API envelope

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use tracing::error;

use super::error::ApiError;

/// JSON extractor and response wrapper
///
/// As an extractor, a request without a JSON content type or with an empty
/// body yields `T::default()`, so field-level validation reports what is
/// missing. A body that does not deserialize into `T` (malformed JSON or a
/// field of the wrong type) is logged and answered with the generic 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            error!(error = %rejection.body_text(), "Failed to read request body");
            ApiError::internal()
        })?;

        if !json_content || body.is_empty() {
            return Ok(Json(T::default()));
        }

        serde_json::from_slice(&body).map(Json).map_err(|e| {
            error!(error = %e, "Failed to parse JSON request body");
            ApiError::internal()
        })
    }
}

/// `application/json` and `application/*+json`, parameters ignored
fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
