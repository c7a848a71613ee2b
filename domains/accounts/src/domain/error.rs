//! Registration and login failures

use mediahub_common::Error;

/// Account errors are client errors: each maps to 400 with its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Username already exists.")]
    DuplicateUsername,

    #[error("Email is already registered.")]
    DuplicateEmail,

    #[error("User not found.")]
    UserNotFound,

    #[error("Invalid credentials.")]
    InvalidCredentials,
}

impl From<AccountError> for Error {
    fn from(err: AccountError) -> Self {
        Error::BadRequest(err.to_string())
    }
}
