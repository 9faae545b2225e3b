//! Domain layer containing the business entity and the storage contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete storage lives in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
