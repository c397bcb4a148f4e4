use sqlx::PgPool;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse, UserIdentity};

pub struct AuthService;

/// Internal row carrying the stored hash. Never serialized.
#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    role: UserRole,
    is_active: bool,
    password: String,
}

impl AuthService {
    /// Verifies credentials, records the login time, and mints a token.
    ///
    /// Login distinguishes a deactivated account from bad credentials;
    /// per-request auth checks deliberately do not.
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, email, first_name, last_name, role, is_active, password
             FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if !row.is_active {
            return Err(AppError::unauthorized(
                "Account is deactivated. Contact an administrator.",
            ));
        }

        let is_valid = verify_password(&dto.password, &row.password)?;
        if !is_valid {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        sqlx::query("UPDATE users SET last_login = NOW() WHERE id = $1")
            .bind(row.id)
            .execute(db)
            .await?;

        let token = create_access_token(row.id, row.role, jwt_config)?;

        Ok(LoginResponse {
            user: UserIdentity {
                id: row.id,
                email: row.email,
                first_name: row.first_name,
                last_name: row.last_name,
                role: row.role,
            },
            token,
        })
    }

    /// Loads the identity for a per-request auth check. Returns `None` for
    /// both unknown and deactivated users.
    pub async fn find_active_identity(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<UserIdentity>, AppError> {
        let identity = sqlx::query_as::<_, UserIdentity>(
            "SELECT id, email, first_name, last_name, role
             FROM users WHERE id = $1 AND is_active = TRUE",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        Ok(identity)
    }
}
