//! # shorturl
//!
//! A minimal URL shortening service built with Axum and PostgreSQL.
//!
//! `POST /` with `{"url": "..."}` returns a 7-character short code;
//! `GET /{code}` answers with a 303 redirect to the stored destination.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Url` entity and the storage trait
//! - **Application Layer** ([`application`]) - Short code generation and lookups
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-memory storage
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="postgresql://postgres@localhost/urlshortener"
//! cargo run
//! ```
//!
//! Or without a database:
//!
//! ```bash
//! STORAGE_BACKEND=memory cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::Url;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
