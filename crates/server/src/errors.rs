use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Request-boundary error. Always rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Storage failed; the cause is logged by the handler, not sent.
    Internal(&'static str),
    BadRequest(&'static str),
    /// Body was not JSON (or not declared as JSON).
    Rejected(JsonRejection),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::Rejected(r) => (r.status(), r.body_text()),
        };
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
