use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

use super::model::{
    CreateParaleloDto, ParaleloFilterParams, ParaleloStats, ParaleloTeacherRow,
    ParaleloWithTeacher, UpdateParaleloDto,
};

const JOINED_COLUMNS: &str = "p.id, p.name, p.level, p.teacher_id, p.student_count, p.is_active, \
     p.description, p.created_at, p.updated_at, \
     u.first_name AS teacher_first_name, u.last_name AS teacher_last_name, \
     u.email AS teacher_email";

pub struct ParaleloService;

impl ParaleloService {
    pub async fn get_paralelos(
        db: &PgPool,
        filters: ParaleloFilterParams,
    ) -> Result<Vec<ParaleloWithTeacher>, AppError> {
        let rows = sqlx::query_as::<_, ParaleloTeacherRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM paralelos p
             LEFT JOIN users u ON u.id = p.teacher_id
             WHERE ($1::boolean IS NULL OR p.is_active = $1)
               AND ($2::text IS NULL
                    OR p.name ILIKE '%' || $2 || '%'
                    OR p.level ILIKE '%' || $2 || '%')
             ORDER BY p.created_at DESC"
        ))
        .bind(filters.active_filter())
        .bind(filters.search.as_deref())
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_paralelo(db: &PgPool, id: Uuid) -> Result<ParaleloWithTeacher, AppError> {
        let row = sqlx::query_as::<_, ParaleloTeacherRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM paralelos p
             LEFT JOIN users u ON u.id = p.teacher_id
             WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Paralelo not found"))?;

        Ok(row.into())
    }

    pub async fn create_paralelo(
        db: &PgPool,
        dto: CreateParaleloDto,
    ) -> Result<ParaleloWithTeacher, AppError> {
        if let Some(teacher_id) = dto.teacher_id {
            Self::ensure_teacher(db, teacher_id).await?;
        }

        let (id,): (Uuid,) = sqlx::query_as(
            "INSERT INTO paralelos (name, level, teacher_id, description)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.level)
        .bind(dto.teacher_id)
        .bind(dto.description.as_deref())
        .fetch_one(db)
        .await?;

        Self::get_paralelo(db, id).await
    }

    pub async fn update_paralelo(
        db: &PgPool,
        id: Uuid,
        dto: UpdateParaleloDto,
    ) -> Result<ParaleloWithTeacher, AppError> {
        let current = Self::get_paralelo(db, id).await?.paralelo;

        // An explicit null clears the assignment; absent keeps the current one.
        let teacher_id = match dto.teacher_id {
            Some(value) => value,
            None => current.teacher_id,
        };
        if let Some(new_teacher) = teacher_id {
            if Some(new_teacher) != current.teacher_id {
                Self::ensure_teacher(db, new_teacher).await?;
            }
        }

        let description = match dto.description {
            Some(value) => Some(value),
            None => current.description,
        };

        sqlx::query(
            "UPDATE paralelos SET
                name = $2,
                level = $3,
                teacher_id = $4,
                description = $5,
                is_active = $6,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(dto.name.unwrap_or(current.name))
        .bind(dto.level.unwrap_or(current.level))
        .bind(teacher_id)
        .bind(description.as_deref())
        .bind(dto.is_active.unwrap_or(current.is_active))
        .execute(db)
        .await?;

        Self::get_paralelo(db, id).await
    }

    /// Soft delete: paralelos are deactivated, never removed.
    pub async fn delete_paralelo(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE paralelos SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Paralelo not found"));
        }

        Ok(())
    }

    pub async fn get_stats(db: &PgPool) -> Result<ParaleloStats, AppError> {
        #[derive(sqlx::FromRow)]
        struct StatsRow {
            total: i64,
            active: i64,
            inactive: i64,
            total_students: i64,
        }

        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE is_active) AS active,
                    COUNT(*) FILTER (WHERE NOT is_active) AS inactive,
                    COALESCE(SUM(student_count) FILTER (WHERE is_active), 0)::bigint
                        AS total_students
             FROM paralelos",
        )
        .fetch_one(db)
        .await?;

        Ok(ParaleloStats {
            total: row.total,
            active: row.active,
            inactive: row.inactive,
            total_students: row.total_students,
        })
    }

    /// A paralelo's teacher must reference an existing user with the
    /// teacher role.
    async fn ensure_teacher(db: &PgPool, teacher_id: Uuid) -> Result<(), AppError> {
        let role: Option<(UserRole,)> = sqlx::query_as("SELECT role FROM users WHERE id = $1")
            .bind(teacher_id)
            .fetch_optional(db)
            .await?;

        match role {
            Some((UserRole::Teacher,)) => Ok(()),
            _ => Err(AppError::validation(
                "The specified teacher does not exist or does not have the teacher role",
            )),
        }
    }
}
