//! Response envelopes.
//!
//! Grounded on the teacher's `api/responses.rs` `ApiResponse`/`ApiError`
//! shape, trimmed to a uniform `{"error","message"}` envelope rather than
//! the teacher's fuller RFC 7807 surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::compute::ComputeError;
use crate::remote::RemoteError;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
        (StatusCode::BAD_REQUEST, Json(ApiError { error: "BadRequest", message: message.into() }))
    }

    fn internal(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError { error: "InternalError", message: message.into() }))
    }
}

/// Maps a `RemoteError` to its HTTP status: upstream NotFound becomes 404,
/// everything else (decoding, transport, other HTTP status) becomes a 500
/// InternalError with a diagnostic message.
impl IntoResponse for RemoteError {
    fn into_response(self) -> Response {
        match &self {
            RemoteError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(ApiError { error: "NotFound", message: self.to_string() }))
                    .into_response()
            }
            RemoteError::CreationError { .. } => {
                (StatusCode::BAD_REQUEST, Json(ApiError { error: "CreationError", message: self.to_string() }))
                    .into_response()
            }
            RemoteError::DeletionError { .. } => {
                (StatusCode::BAD_REQUEST, Json(ApiError { error: "DeletionError", message: self.to_string() }))
                    .into_response()
            }
            _ => ApiError::internal(self.to_string()).into_response(),
        }
    }
}

/// Per-item compute error, serialized as the failure side of a compute
/// response slot.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum ComputeErrorBody {
    BadRequest(String),
    EngineError,
}

impl From<ComputeError> for ComputeErrorBody {
    fn from(err: ComputeError) -> Self {
        match err {
            ComputeError::BadRequest(detail) => ComputeErrorBody::BadRequest(detail),
            ComputeError::EngineError => ComputeErrorBody::EngineError,
        }
    }
}
