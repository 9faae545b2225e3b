//! Application layer services implementing business logic.
//!
//! - [`services::url_service::UrlService`] - Short URL creation and resolution

pub mod services;
