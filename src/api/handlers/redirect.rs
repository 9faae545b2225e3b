//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 303 See Other and a `Location` header; the body is empty.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the lookup fails or the stored
/// destination cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.url_service.resolve(&code).await?;

    let location = HeaderValue::try_from(url.redirect_url.as_str()).map_err(|e| {
        error!("Stored destination for {} is not a valid header value: {}", code, e);
        AppError::internal("invalid redirect url")
    })?;

    debug!("Redirecting {} to {}", code, url.redirect_url);

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]))
}
