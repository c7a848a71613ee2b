//! Registration, login and identity handlers

use axum::{extract::State, http::StatusCode, Json};
use mediahub_auth::{hash_password, verify_password, AuthUser};
use mediahub_common::{Error, Result, ValidatedJson};
use serde_json::{json, Value};

use crate::api::middleware::AccountsState;
use crate::domain::entities::{CreateUserRequest, LoginRequest, LoginResponse, User, UserView};
use crate::domain::error::AccountError;

/// Register a new account
///
/// **POST /api/auth/register**
///
/// Username is checked before email. No token is issued; the caller logs in
/// separately.
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    if state
        .users
        .find_by_username(&request.username)
        .await?
        .is_some()
    {
        return Err(AccountError::DuplicateUsername.into());
    }

    if state.users.find_by_email(&request.email).await?.is_some() {
        return Err(AccountError::DuplicateEmail.into());
    }

    let password_hash = hash_password(&request.password)?;
    let user = User::new(request.username, request.email, password_hash, request.role);

    state.users.create(&user).await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully." })),
    ))
}

/// Exchange credentials for an access token
///
/// **POST /api/auth/login**
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .users
        .find_by_username(&request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!(username = %request.username, "Login for unknown user");
            AccountError::UserNotFound
        })?;

    if !verify_password(&request.password, &user.password)? {
        tracing::warn!(user_id = %user.id, "Login with wrong password");
        return Err(AccountError::InvalidCredentials.into());
    }

    let access_token = state.tokens.issue(user.id, user.role)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.ttl_seconds(),
    }))
}

/// Profile of the authenticated caller
///
/// **GET /api/auth/me**
pub async fn me(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Json<UserView>> {
    let user = state
        .users
        .get_by_id(ctx.user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found.".to_string()))?;

    Ok(Json(UserView::from(user)))
}
