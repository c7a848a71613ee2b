//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication and authorization failures raised before a handler runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header, or no identity attached to the request
    MissingAuthorization,
    /// Authorization header present but not `Bearer <token>`
    InvalidAuthorizationFormat,
    /// Token failed signature, shape or expiry checks
    InvalidToken,
    /// Verified identity whose role is outside the route's allow-list
    InsufficientRole,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthorization | AuthError::InvalidAuthorizationFormat => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::InvalidToken | AuthError::InsufficientRole => StatusCode::FORBIDDEN,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "Authorization header required",
            AuthError::InvalidAuthorizationFormat => "Invalid authorization header format",
            AuthError::InvalidToken => "Invalid or expired token",
            AuthError::InsufficientRole => "Insufficient permissions",
        }
    }
}

impl std::fmt::Display for AuthError {
    #[mutants::skip] // Delegates to message()
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message() }));

        (self.status_code(), body).into_response()
    }
}
