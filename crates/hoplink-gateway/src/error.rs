use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hoplink_resolver::ResolveError;
use tracing::warn;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, ApiError>;

/// HTTP-visible failure cases.
///
/// There are exactly two: the link does not exist, or the system is
/// degraded. Everything else is recovered before it gets here.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Unavailable,
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => ApiError::NotFound,
            ResolveError::Unavailable(source) => {
                warn!(error = %source, "store unavailable during resolution");
                ApiError::Unavailable
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Short URL not found"),
            ApiError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service temporarily unavailable",
            ),
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
