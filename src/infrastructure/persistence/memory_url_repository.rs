//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

use crate::domain::entities::Url;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Short URL storage backed by a concurrent hash map.
///
/// Mirrors the PostgreSQL primary key: inserting an existing code fails
/// rather than overwriting. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryUrlRepository {
    urls: DashMap<String, String>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory storage");
        Self::default()
    }

    /// Number of stored short URLs.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, url: &Url) -> Result<(), AppError> {
        match self.urls.entry(url.short_url.clone()) {
            Entry::Occupied(_) => {
                warn!("Short code collision on {}", url.short_url);
                Err(AppError::internal("unable to write to database"))
            }
            Entry::Vacant(slot) => {
                slot.insert(url.redirect_url.clone());
                Ok(())
            }
        }
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Url>, AppError> {
        Ok(self
            .urls
            .get(short_url)
            .map(|entry| Url::new(short_url.to_string(), entry.value().clone())))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryUrlRepository::new();
        let url = Url::new("abc1234".to_string(), "https://example.com".to_string());

        repo.create(&url).await.unwrap();

        let found = repo.find_by_short_url("abc1234").await.unwrap();
        assert_eq!(found, Some(url));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = MemoryUrlRepository::new();

        let found = repo.find_by_short_url("missing").await.unwrap();
        assert!(found.is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_code_fails_without_overwrite() {
        let repo = MemoryUrlRepository::new();
        let first = Url::new("dup0001".to_string(), "https://first.com".to_string());
        let second = Url::new("dup0001".to_string(), "https://second.com".to_string());

        repo.create(&first).await.unwrap();
        let result = repo.create(&second).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
        let found = repo.find_by_short_url("dup0001").await.unwrap().unwrap();
        assert_eq!(found.redirect_url, "https://first.com");
    }
}
