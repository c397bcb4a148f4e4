//! Role-based authorization layers.
//!
//! Applied per route group with `axum::middleware::from_fn_with_state` on
//! top of the [`AuthUser`] authentication step: a missing or invalid token
//! answers 401 before the role is ever considered, and an authenticated
//! user outside the allowed set answers 403.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Membership check behind every role gate.
pub fn role_allowed(role: UserRole, allowed: &[UserRole]) -> bool {
    allowed.contains(&role)
}

/// Authenticates the request and enforces that the user's role is one of
/// `allowed_roles`.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if !role_allowed(auth_user.0.role, &allowed_roles) {
        return Err(AppError::forbidden(
            "Access denied. Insufficient privileges for this resource.",
        ));
    }

    // Identity stays in the extensions for the downstream handler.
    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Route layer for admin-only route groups.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
