use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use uuid::Uuid;

use crate::modules::auth::model::UserIdentity;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{TokenError, verify_token};

/// Extractor that authenticates a request end to end: bearer token →
/// signature/expiry check → identity load from the database.
///
/// Unknown and deactivated users are rejected with the same 401 so callers
/// cannot probe which accounts exist. The loaded identity is cached in the
/// request extensions, so stacking this extractor with a role layer costs a
/// single user lookup.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserIdentity);

pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))
}

fn token_rejection(err: TokenError, state: &AppState) -> AppError {
    if state.app_config.is_production() {
        AppError::unauthorized("Invalid or expired token")
    } else {
        AppError::unauthorized(format!("Invalid or expired token ({})", err.reason()))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<UserIdentity>() {
            return Ok(AuthUser(identity.clone()));
        }

        let token = bearer_token(&parts.headers)?;

        let claims =
            verify_token(token, &state.jwt_config).map_err(|e| token_rejection(e, state))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid token"))?;

        let identity = AuthService::find_active_identity(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid token"))?;

        parts.extensions.insert(identity.clone());

        Ok(AuthUser(identity))
    }
}
