//! Repository trait for short URL data access.

use crate::domain::entities::Url;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for short URLs.
///
/// Request handling only ever sees this trait; the backend is chosen once at
/// startup and injected into [`crate::application::services::UrlService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new short URL.
    ///
    /// Does not check for an existing row with the same code itself; a
    /// collision is rejected by the backend and reported like any other
    /// write failure.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any storage failure.
    async fn create(&self, url: &Url) -> Result<(), AppError>;

    /// Finds a short URL by its code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Url))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Url>, AppError>;

    /// Returns `true` if the backend is reachable.
    async fn health_check(&self) -> bool;
}
