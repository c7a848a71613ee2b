//! Axum extractors for authentication
//!
//! Generic over any state `S` where `TokenService: FromRef<S>`.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, TokenService};

/// Authenticated user extractor.
///
/// Reuses the identity attached by `require_auth` when the route is guarded,
/// otherwise verifies the bearer token itself.
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        if let Some(context) = parts.extensions.get::<AuthContext>() {
            return Ok(AuthUser(*context));
        }

        let tokens = TokenService::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let context = tokens
            .verify(&token)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthUser(context))
    }
}

/// Identity attached by the auth middleware, if the route ran it.
///
/// Never rejects: public routes see `None`.
#[derive(Debug)]
pub struct MaybeAuthUser(pub Option<AuthContext>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(parts.extensions.get::<AuthContext>().copied()))
    }
}
