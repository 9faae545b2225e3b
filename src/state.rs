//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// State cloned into each request.
///
/// Holds only shared handles; no per-request data lives here.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    /// Builds the state around a storage backend.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository)),
        }
    }
}
