//! Shared utilities, configuration, and error handling for Mediahub
//!
//! This crate provides common functionality used across the Mediahub workspace:
//! - Configuration management following 12-factor principles
//! - The HTTP-facing error taxonomy
//! - Repository error mapping
//! - Validating JSON extractor

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, LogFormat};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
