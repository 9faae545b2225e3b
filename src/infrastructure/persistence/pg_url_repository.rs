//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{error, warn};

use crate::domain::entities::Url;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_short_url;

/// PostgreSQL repository for short URL storage and retrieval.
///
/// Uses bound parameters for every query; no user input is ever interpolated
/// into SQL text.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Creates the `url` table if it does not exist yet.
    ///
    /// The short code is the primary key, so a colliding code fails the
    /// insert instead of producing an ambiguous lookup.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url (
                shortUrl VARCHAR(7) PRIMARY KEY,
                redirectUrl TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    /// Returns the number of stored short URLs.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, url: &Url) -> Result<(), AppError> {
        sqlx::query("INSERT INTO url (shortUrl, redirectUrl) VALUES ($1, $2)")
            .bind(&url.short_url)
            .bind(&url.redirect_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_short_url(&e) {
                    warn!("Short code collision on {}", url.short_url);
                } else {
                    error!("Failed to insert short url {}: {}", url.short_url, e);
                }
                AppError::internal("unable to write to database")
            })?;

        Ok(())
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Url>, AppError> {
        sqlx::query_as::<_, Url>("SELECT shortUrl, redirectUrl FROM url WHERE shortUrl = $1")
            .bind(short_url)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to look up short url {}: {}", short_url, e);
                AppError::internal("unable to read from database")
            })
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
