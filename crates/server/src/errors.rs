use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Handler failure mapped onto a status code.
///
/// Client errors carry an optional plain-text message; `None` yields an empty body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest(Option<String>),
    #[error("not found")]
    NotFound(Option<String>),
    #[error("internal error: {0}")]
    Internal(String),
    /// Body extraction failure answered with axum's own status and text.
    #[error("{0}")]
    Rejected(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => plain(StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => plain(StatusCode::NOT_FOUND, msg),
            ApiError::Rejected(rejection) => rejection.into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "store request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
            }
        }
    }
}

fn plain(status: StatusCode, msg: Option<String>) -> Response {
    match msg {
        Some(m) => (status, m).into_response(),
        None => status.into_response(),
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound(None),
            ServiceError::Model(_) => ApiError::Internal(e.to_string()),
        }
    }
}
