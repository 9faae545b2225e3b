//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
