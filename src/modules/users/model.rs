//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - User entity as stored (password hash excluded)
//! - [`UserRole`] - Closed role enum (admin | teacher | student)
//!
//! # Request DTOs
//!
//! - [`CreateUserDto`] - Create a new user (admin only)
//! - [`UpdateUserDto`] - Partial in-place update
//! - [`UserFilterParams`] - Query parameters for listing users

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// System role. Stored as the `user_role` Postgres enum and serialized
/// lowercase on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    #[default]
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as exposed by the API. The password hash never leaves the
/// service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Defaults to student when omitted.
    pub role: Option<UserRole>,
    /// Defaults to active when omitted.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// Query parameters for filtering the user listing.
///
/// `status` accepts `active` or `inactive`; `search` matches name and email
/// case-insensitively.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserFilterParams {
    pub role: Option<UserRole>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl UserFilterParams {
    /// Maps the `status` query string to an active-flag filter.
    pub fn active_filter(&self) -> Option<bool> {
        self.status.as_deref().map(|s| s == "active")
    }
}

/// Aggregate user counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub by_role: RoleCounts,
}

/// Active user counts per role.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoleCounts {
    pub admin: i64,
    pub teacher: i64,
    pub student: i64,
}
