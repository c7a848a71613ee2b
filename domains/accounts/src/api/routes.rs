//! Route definitions for Accounts domain API

use axum::{
    routing::{get, post},
    Router,
};
use mediahub_api::{resource_routes, AccessPolicy};
use mediahub_auth::{guard, Access, TokenService};

use super::handlers::auth;
use super::middleware::AccountsState;
use crate::domain::entities::User;

/// Create registration, login and identity routes
fn auth_routes(tokens: &TokenService) -> Router<AccountsState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route(
            "/api/auth/me",
            guard(get(auth::me), Access::Authenticated, tokens),
        )
}

/// Create user management routes (admin only)
fn user_routes(tokens: &TokenService) -> Router<AccountsState> {
    resource_routes::<User, AccountsState>(
        "/api/users",
        AccessPolicy::uniform(Access::ADMIN),
        tokens,
    )
}

/// Create all Accounts domain API routes
pub fn routes(tokens: &TokenService) -> Router<AccountsState> {
    Router::new()
        .merge(auth_routes(tokens))
        .merge(user_routes(tokens))
}
