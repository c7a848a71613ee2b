//! Authentication and authorization for the Mediahub API
//!
//! Provides stateless bearer-token issuance and verification, the auth
//! middleware that attaches an [`AuthContext`] to each request, the per-route
//! role gate, axum extractors, and password hashing.

mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod middleware;
mod password;
mod types;

pub use claims::Claims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{AuthUser, MaybeAuthUser};
pub use jwt::{TokenError, TokenService, ACCESS_TOKEN_TTL_SECS};
pub use middleware::{guard, require_auth, require_role, Access, RoleGate};
pub use password::{hash_password, verify_password, PasswordError, PASSWORD_HASH_COST};
pub use types::Role;
