//! Short URL creation and resolution service.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::Url;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code};

/// Service for creating and resolving short URLs.
///
/// Holds the storage backend behind the [`UrlRepository`] trait, so the
/// backend can be swapped without touching request handling.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short URL pointing at `redirect_url`.
    ///
    /// A fresh random code is generated for every call. Collisions are not
    /// retried; the storage backend rejects them as a failed write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `redirect_url` is empty; storage is
    /// not touched in that case.
    ///
    /// Returns [`AppError::Internal`] if the write fails.
    pub async fn create_short_url(&self, redirect_url: String) -> Result<Url, AppError> {
        if redirect_url.is_empty() {
            return Err(AppError::bad_request("invalid request"));
        }

        let url = Url::new(generate_code(), redirect_url);
        self.repository.create(&url).await?;

        info!(short_url = %url.short_url, "Created short url");
        Ok(url)
    }

    /// Resolves a short code to its stored Url.
    ///
    /// Codes that cannot have been generated are reported as not found
    /// without a storage round-trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no Url has this code.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, short_url: &str) -> Result<Url, AppError> {
        if !is_valid_code(short_url) {
            debug!("Rejecting malformed short code {:?}", short_url);
            return Err(AppError::not_found("short url not found"));
        }

        self.repository
            .find_by_short_url(short_url)
            .await?
            .ok_or_else(|| AppError::not_found("short url not found"))
    }

    /// Returns `true` if the storage backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
