//! Core domain entities.
//!
//! The service has a single entity, [`Url`], mapping a short code to the
//! destination it redirects to.

pub mod url;

pub use url::Url;
