//! Handler for short URL creation.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::url::{CreateUrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted destination.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "aB3xY9z", "redirectUrl": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `url` is missing or empty.
/// The `Content-Type` header is not checked; the body is parsed as JSON as is.
/// Returns 500 Internal Server Error if the write fails.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UrlResponse>, AppError> {
    let payload: CreateUrlRequest = serde_json::from_slice(&body)?;
    payload.validate()?;

    let url = state.url_service.create_short_url(payload.url).await?;

    Ok(Json(url.into()))
}
