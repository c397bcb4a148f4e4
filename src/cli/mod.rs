//! Bootstrap commands run from the server binary.

use sqlx::PgPool;

use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

/// Creates an active admin account. Fails if the email is already taken.
pub async fn create_admin(
    db: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let existing: Option<(uuid::Uuid,)> =
        sqlx::query_as("SELECT id FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(db)
            .await?;

    if existing.is_some() {
        return Err(AppError::conflict("Email is already registered"));
    }

    let hashed = hash_password(password)?;

    sqlx::query(
        "INSERT INTO users (email, password, first_name, last_name, role)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(email)
    .bind(&hashed)
    .bind(first_name)
    .bind(last_name)
    .bind(UserRole::Admin)
    .execute(db)
    .await?;

    Ok(())
}

/// Demo accounts seeded for local development.
const DEMO_USERS: &[(&str, &str, &str, &str, UserRole)] = &[
    (
        "admin@mathmaster.com",
        "Admin123!",
        "System",
        "Administrator",
        UserRole::Admin,
    ),
    (
        "teacher@mathmaster.com",
        "Teacher123!",
        "Demo",
        "Teacher",
        UserRole::Teacher,
    ),
    (
        "student@mathmaster.com",
        "Student123!",
        "Demo",
        "Student",
        UserRole::Student,
    ),
];

/// Idempotently creates the demo admin, teacher, and student accounts.
/// Returns the emails that were actually created.
pub async fn seed_demo_users(db: &PgPool) -> Result<Vec<String>, AppError> {
    let mut created = Vec::new();

    for (email, password, first_name, last_name, role) in DEMO_USERS {
        let existing: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_optional(db)
                .await?;

        if existing.is_some() {
            continue;
        }

        let hashed = hash_password(password)?;

        sqlx::query(
            "INSERT INTO users (email, password, first_name, last_name, role)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(email)
        .bind(&hashed)
        .bind(first_name)
        .bind(last_name)
        .bind(*role)
        .execute(db)
        .await?;

        created.push(email.to_string());
    }

    Ok(created)
}
