use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::users::model::UserRole;

/// JWT claims bundle. Stateless; there is no server-side revocation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public identity returned on login and from `/me`, and the value the
/// auth middleware attaches to the request.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserIdentity,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_round_trip_serde() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: UserRole::Teacher,
            exp: 2_000_000_000,
            iat: 1_700_000_000,
        };

        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"role\":\"teacher\""));

        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sub, claims.sub);
        assert_eq!(back.role, UserRole::Teacher);
    }
}
