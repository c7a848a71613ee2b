//! Token issuance, verification and bearer extraction

use axum::http::HeaderValue;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::types::Role;

/// Access tokens live for exactly one hour
pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

impl From<TokenError> for mediahub_common::Error {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(msg) => mediahub_common::Error::Internal(msg),
            other => mediahub_common::Error::Authorization(other.to_string()),
        }
    }
}

/// Issues and verifies HS256 access tokens with a shared secret.
///
/// Verification is pure: it never consults the user collection, so a token
/// stays valid until it expires even if the account changes.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::seconds(ACCESS_TOKEN_TTL_SECS),
        }
    }

    /// Issue a token for `user_id` with `role`, expiring one hour from now
    pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.issue_at(user_id, role, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        user_id: Uuid,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id,
            role,
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify signature, shape and expiry, returning the identity it carries
    pub fn verify(&self, token: &str) -> Result<AuthContext, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| AuthContext::from(data.claims))
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => {
                    tracing::debug!(error = %e, "JWT validation failed");
                    TokenError::Invalid
                }
            })
    }

    /// Lifetime of issued tokens in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    // Scheme names are case-insensitive
    match header_str.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            let token = token.trim();
            if token.is_empty() {
                Err(AuthError::InvalidAuthorizationFormat)
            } else {
                Ok(token.to_string())
            }
        }
        _ => Err(AuthError::InvalidAuthorizationFormat),
    }
}
