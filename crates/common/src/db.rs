//! Shared database types for Mediahub
//!
//! This module provides common database-related types used across collections.

use crate::error::Error;
use thiserror::Error;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    /// A unique index rejected the write; carries the offending field when known
    #[error("{} already exists", .0.as_deref().unwrap_or("Resource"))]
    AlreadyExists(Option<String>),

    #[error("Database connection error: {0}")]
    Connection(sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(duplicate_field(db_err.message()))
            }
            _ => RepositoryError::Connection(err),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            e @ RepositoryError::AlreadyExists(_) => Error::Conflict(e.to_string()),
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::InvalidData(msg) => Error::Internal(msg),
        }
    }
}

/// Recover the field name from a SQLite unique-constraint message.
///
/// Handles both `UNIQUE constraint failed: users.email` (column constraint)
/// and `UNIQUE constraint failed: index 'users_email_key'` (expression index).
fn duplicate_field(message: &str) -> Option<String> {
    let target = message.split("UNIQUE constraint failed: ").nth(1)?.trim();

    if let Some(index) = target.strip_prefix("index '") {
        let index = index.trim_end_matches('\'');
        let without_suffix = index.strip_suffix("_key")?;
        let (_, field) = without_suffix.split_once('_')?;
        return Some(field.to_string());
    }

    target
        .split(',')
        .next()
        .and_then(|column| column.trim().split_once('.'))
        .map(|(_, field)| field.to_string())
}
