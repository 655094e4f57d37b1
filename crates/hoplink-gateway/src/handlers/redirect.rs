use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use hoplink_core::ShortCode;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// `GET /{short_code}` — resolve and redirect.
///
/// A code that fails validation cannot exist in the store, so it maps to
/// the same 404 as an authoritative miss rather than a 400.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = ShortCode::new(short_code).map_err(|e| {
        debug!(error = %e, "rejecting malformed short code");
        ApiError::NotFound
    })?;

    let resolution = state.resolver().resolve(&code).await?;

    // 302 Found with the destination in Location. axum's Redirect helpers
    // use 303/307/308, so the response is built by hand.
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, resolution.long_url)
        .body(axum::body::Body::empty())
        .map_err(|_| ApiError::Unavailable)
}
