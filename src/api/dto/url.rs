//! DTOs for short URL creation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Url;

/// Request to create a short URL.
///
/// A missing `url` field deserializes to an empty string and is then
/// rejected by validation, so `{}` and `{"url": ""}` fail the same way.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// Destination to redirect to. Not checked for URL syntax.
    #[serde(default)]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// A created short URL as returned to the client.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub short_url: String,
    pub redirect_url: String,
}

impl From<Url> for UrlResponse {
    fn from(url: Url) -> Self {
        Self {
            short_url: url.short_url,
            redirect_url: url.redirect_url,
        }
    }
}
