#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shorturl::domain::entities::Url;
use shorturl::domain::repositories::UrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::MemoryUrlRepository;
use shorturl::routes::app_router;
use shorturl::state::AppState;
use std::sync::Arc;

/// Repository whose every operation fails, for exercising 500 paths.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn create(&self, _url: &Url) -> Result<(), AppError> {
        Err(AppError::internal("unable to write to database"))
    }

    async fn find_by_short_url(&self, _short_url: &str) -> Result<Option<Url>, AppError> {
        Err(AppError::internal("unable to read from database"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_server(repository: Arc<dyn UrlRepository>) -> TestServer {
    let app = app_router(AppState::new(repository), 10);
    TestServer::new(app).unwrap()
}

pub fn create_memory_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let server = create_test_server(repository.clone());
    (server, repository)
}

pub async fn insert_url(repository: &MemoryUrlRepository, code: &str, redirect_url: &str) {
    repository
        .create(&Url::new(code.to_string(), redirect_url.to_string()))
        .await
        .unwrap();
}
