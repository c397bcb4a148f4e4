//! Paralelo (class group) models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A class group, optionally assigned one teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paralelo {
    pub id: Uuid,
    pub name: String,
    pub level: String,
    pub teacher_id: Option<Uuid>,
    pub student_count: i32,
    pub is_active: bool,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Abbreviated teacher info joined into paralelo responses.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Paralelo with its teacher resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParaleloWithTeacher {
    #[serde(flatten)]
    pub paralelo: Paralelo,
    pub teacher: Option<TeacherSummary>,
}

/// Flat row produced by the LEFT JOIN against users.
#[derive(Debug, FromRow)]
pub(super) struct ParaleloTeacherRow {
    pub id: Uuid,
    pub name: String,
    pub level: String,
    pub teacher_id: Option<Uuid>,
    pub student_count: i32,
    pub is_active: bool,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub teacher_first_name: Option<String>,
    pub teacher_last_name: Option<String>,
    pub teacher_email: Option<String>,
}

impl From<ParaleloTeacherRow> for ParaleloWithTeacher {
    fn from(row: ParaleloTeacherRow) -> Self {
        let teacher = match (row.teacher_id, row.teacher_first_name) {
            (Some(id), Some(first_name)) => Some(TeacherSummary {
                id,
                first_name,
                last_name: row.teacher_last_name.unwrap_or_default(),
                email: row.teacher_email.unwrap_or_default(),
            }),
            _ => None,
        };

        ParaleloWithTeacher {
            paralelo: Paralelo {
                id: row.id,
                name: row.name,
                level: row.level,
                teacher_id: row.teacher_id,
                student_count: row.student_count,
                is_active: row.is_active,
                description: row.description,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            teacher,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateParaleloDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Level is required"))]
    pub level: String,
    pub teacher_id: Option<Uuid>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParaleloDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Level cannot be empty"))]
    pub level: Option<String>,
    /// Absent leaves the assignment untouched; an explicit null clears it.
    #[serde(default, deserialize_with = "crate::utils::serde::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub teacher_id: Option<Option<Uuid>>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for filtering the paralelo listing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ParaleloFilterParams {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl ParaleloFilterParams {
    pub fn active_filter(&self) -> Option<bool> {
        self.status.as_deref().map(|s| s == "active")
    }
}

/// Aggregate paralelo counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParaleloStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub total_students: i64,
}
