//! Auth middleware and per-route role gate
//!
//! `require_auth` verifies the bearer token and attaches an [`AuthContext`]
//! to the request extensions. `require_role` runs after it and checks the
//! attached role against the route's allow-list. [`guard`] wires both onto a
//! method router in the right order.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::{from_fn_with_state, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, TokenService};
use crate::types::Role;

/// Who may call a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token required
    Public,
    /// Any verified token
    Authenticated,
    /// Verified token whose role is in the list
    Roles(&'static [Role]),
}

impl Access {
    pub const ADMIN: Access = Access::Roles(&[Role::Admin]);
    pub const ADMIN_OR_CREADOR: Access = Access::Roles(&[Role::Admin, Role::Creador]);
}

/// Allow-list configured for one route
#[derive(Debug, Clone, Copy)]
pub struct RoleGate {
    allowed: &'static [Role],
}

impl RoleGate {
    pub fn new(allowed: &'static [Role]) -> Self {
        Self { allowed }
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

/// Verify the bearer token and attach the caller's identity to the request.
///
/// Missing or malformed header → 401; present but unverifiable token → 403.
pub async fn require_auth(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = {
        let header = request
            .headers()
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;
        extract_bearer_token(header)?
    };

    let context = tokens.verify(&token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AuthError::InvalidToken
    })?;

    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

/// Reject callers whose role is outside the gate's allow-list.
///
/// Must be layered inside `require_auth`; without an attached identity the
/// request is treated as unauthenticated.
pub async fn require_role(
    State(gate): State<RoleGate>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let context = request
        .extensions()
        .get::<AuthContext>()
        .copied()
        .ok_or(AuthError::MissingAuthorization)?;

    if !gate.permits(context.role) {
        tracing::debug!(
            user_id = %context.user_id,
            role = %context.role,
            "Role not permitted for route"
        );
        return Err(AuthError::InsufficientRole);
    }

    Ok(next.run(request).await)
}

/// Apply the middleware stack required by `access` to a method router.
///
/// Layers added last run first, so the role gate is added before the auth
/// layer to make token verification run ahead of it.
pub fn guard<S>(route: MethodRouter<S>, access: Access, tokens: &TokenService) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    match access {
        Access::Public => route,
        Access::Authenticated => {
            route.route_layer(from_fn_with_state(tokens.clone(), require_auth))
        }
        Access::Roles(roles) => route
            .route_layer(from_fn_with_state(RoleGate::new(roles), require_role))
            .route_layer(from_fn_with_state(tokens.clone(), require_auth)),
    }
}
