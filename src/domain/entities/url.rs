//! Url entity representing a short code to destination mapping.

/// A shortened URL.
///
/// Created once on a successful create request and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Url {
    #[sqlx(rename = "shorturl")]
    pub short_url: String,
    #[sqlx(rename = "redirecturl")]
    pub redirect_url: String,
}

impl Url {
    /// Creates a new Url instance.
    pub fn new(short_url: String, redirect_url: String) -> Self {
        Self {
            short_url,
            redirect_url,
        }
    }
}
