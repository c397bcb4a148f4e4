use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{
    CreateUserDto, RoleCounts, UpdateUserDto, User, UserFilterParams, UserStats,
};

const USER_COLUMNS: &str =
    "id, email, first_name, last_name, role, is_active, last_login, created_at, updated_at";

pub struct UserService;

impl UserService {
    pub async fn get_users(db: &PgPool, filters: UserFilterParams) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE ($1::user_role IS NULL OR role = $1)
               AND ($2::boolean IS NULL OR is_active = $2)
               AND ($3::text IS NULL
                    OR first_name ILIKE '%' || $3 || '%'
                    OR last_name ILIKE '%' || $3 || '%'
                    OR email ILIKE '%' || $3 || '%')
             ORDER BY created_at DESC"
        ))
        .bind(filters.role)
        .bind(filters.active_filter())
        .bind(filters.search.as_deref())
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        if Self::email_taken(db, &dto.email, None).await? {
            return Err(AppError::conflict("Email is already registered"));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password, first_name, last_name, role, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.role.unwrap_or_default())
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    pub async fn update_user(db: &PgPool, id: Uuid, dto: UpdateUserDto) -> Result<User, AppError> {
        let current = Self::get_user(db, id).await?;

        if let Some(email) = &dto.email {
            if !email.eq_ignore_ascii_case(&current.email)
                && Self::email_taken(db, email, Some(id)).await?
            {
                return Err(AppError::conflict("Email is already registered"));
            }
        }

        // Password is rehashed only when a new one is provided.
        let hashed_password = match &dto.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                password = COALESCE($3, password),
                first_name = COALESCE($4, first_name),
                last_name = COALESCE($5, last_name),
                role = COALESCE($6, role),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.email.as_deref())
        .bind(hashed_password.as_deref())
        .bind(dto.first_name.as_deref())
        .bind(dto.last_name.as_deref())
        .bind(dto.role)
        .bind(dto.is_active)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    /// Soft delete: users are deactivated, never removed.
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE users SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }

        Ok(())
    }

    pub async fn get_stats(db: &PgPool) -> Result<UserStats, AppError> {
        #[derive(sqlx::FromRow)]
        struct StatsRow {
            total: i64,
            active: i64,
            inactive: i64,
            admin: i64,
            teacher: i64,
            student: i64,
        }

        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE is_active) AS active,
                    COUNT(*) FILTER (WHERE NOT is_active) AS inactive,
                    COUNT(*) FILTER (WHERE role = 'admin' AND is_active) AS admin,
                    COUNT(*) FILTER (WHERE role = 'teacher' AND is_active) AS teacher,
                    COUNT(*) FILTER (WHERE role = 'student' AND is_active) AS student
             FROM users",
        )
        .fetch_one(db)
        .await?;

        Ok(UserStats {
            total: row.total,
            active: row.active,
            inactive: row.inactive,
            by_role: RoleCounts {
                admin: row.admin,
                teacher: row.teacher,
                student: row.student,
            },
        })
    }

    async fn email_taken(
        db: &PgPool,
        email: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let existing: Option<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM users
             WHERE LOWER(email) = LOWER($1) AND ($2::uuid IS NULL OR id <> $2)",
        )
        .bind(email)
        .bind(exclude)
        .fetch_optional(db)
        .await?;

        Ok(existing.is_some())
    }
}
