use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::utils::errors::AppError;

use super::model::{
    BulkSettingItem, BulkSettingResult, GroupedSetting, InitializeResult, Setting,
    SettingResponse, SettingType, UpdateSettingDto,
};
use super::values::{parse_value, stringify_value};

const SETTING_COLUMNS: &str =
    "id, key, value, type, category, description, created_at, updated_at";

/// Seeded defaults: application branding, exercise behavior, and security
/// policy. Existing keys are never overwritten.
const DEFAULT_SETTINGS: &[(&str, &str, SettingType, &str, &str)] = &[
    (
        "app_name",
        "MathMaster",
        SettingType::String,
        "application",
        "Name of the educational institution",
    ),
    (
        "app_primary_color",
        "#3B82F6",
        SettingType::String,
        "application",
        "Primary theme color",
    ),
    (
        "app_secondary_color",
        "#8B5CF6",
        SettingType::String,
        "application",
        "Secondary theme color",
    ),
    (
        "academic_year",
        "2025",
        SettingType::String,
        "application",
        "Current academic year",
    ),
    (
        "academic_period",
        "First Trimester",
        SettingType::String,
        "application",
        "Current academic period",
    ),
    (
        "exercise_default_difficulty",
        "medium",
        SettingType::String,
        "exercises",
        "Default exercise difficulty",
    ),
    (
        "exercise_time_limit",
        "30",
        SettingType::Number,
        "exercises",
        "Time limit in minutes",
    ),
    (
        "exercise_pass_score",
        "70",
        SettingType::Number,
        "exercises",
        "Minimum passing score (%)",
    ),
    (
        "exercise_max_attempts",
        "3",
        SettingType::Number,
        "exercises",
        "Maximum number of attempts",
    ),
    (
        "session_timeout",
        "60",
        SettingType::Number,
        "security",
        "Session timeout in minutes",
    ),
    (
        "password_min_length",
        "6",
        SettingType::Number,
        "security",
        "Minimum password length",
    ),
    (
        "require_password_change",
        "false",
        SettingType::Boolean,
        "security",
        "Require initial password change",
    ),
];

pub struct SettingService;

impl SettingService {
    /// All settings partitioned by category, each value parsed to its
    /// logical type. Ordered by category then key.
    pub async fn get_all(
        db: &PgPool,
    ) -> Result<BTreeMap<String, Vec<GroupedSetting>>, AppError> {
        let settings = sqlx::query_as::<_, Setting>(&format!(
            "SELECT {SETTING_COLUMNS} FROM settings ORDER BY category ASC, key ASC"
        ))
        .fetch_all(db)
        .await?;

        let mut grouped: BTreeMap<String, Vec<GroupedSetting>> = BTreeMap::new();
        for setting in settings {
            grouped
                .entry(setting.category)
                .or_default()
                .push(GroupedSetting {
                    value: parse_value(setting.value.as_deref(), setting.setting_type),
                    key: setting.key,
                    setting_type: setting.setting_type,
                    description: setting.description,
                });
        }

        Ok(grouped)
    }

    pub async fn get_by_key(db: &PgPool, key: &str) -> Result<SettingResponse, AppError> {
        let setting = Self::find(db, key)
            .await?
            .ok_or_else(|| AppError::not_found("Setting not found"))?;

        Ok(Self::to_response(setting))
    }

    /// Find-or-create upsert. Returns the resulting setting and whether a
    /// new row was created.
    ///
    /// Creation applies the defaults (type string, category "general");
    /// updates only overwrite the fields the caller provided, and the
    /// value is stringified with the effective type so text and type never
    /// drift apart.
    pub async fn upsert(
        db: &PgPool,
        key: &str,
        dto: UpdateSettingDto,
    ) -> Result<(SettingResponse, bool), AppError> {
        let existing = Self::find(db, key).await?;
        let created = existing.is_none();

        let setting = match existing {
            None => {
                let ty = dto.setting_type.unwrap_or_default();
                let stored = stringify_value(&dto.value, ty);

                sqlx::query_as::<_, Setting>(&format!(
                    "INSERT INTO settings (key, value, type, category, description)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING {SETTING_COLUMNS}"
                ))
                .bind(key)
                .bind(stored.as_deref())
                .bind(ty)
                .bind(dto.category.as_deref().unwrap_or("general"))
                .bind(dto.description.as_deref())
                .fetch_one(db)
                .await?
            }
            Some(current) => {
                let ty = dto.setting_type.unwrap_or(current.setting_type);
                let stored = stringify_value(&dto.value, ty);
                let description = dto.description.or(current.description);

                sqlx::query_as::<_, Setting>(&format!(
                    "UPDATE settings SET
                        value = $2, type = $3, category = $4, description = $5,
                        updated_at = NOW()
                     WHERE key = $1
                     RETURNING {SETTING_COLUMNS}"
                ))
                .bind(key)
                .bind(stored.as_deref())
                .bind(ty)
                .bind(dto.category.as_deref().unwrap_or(&current.category))
                .bind(description.as_deref())
                .fetch_one(db)
                .await?
            }
        };

        Ok((Self::to_response(setting), created))
    }

    /// Upserts every item in order and reports one result per item.
    /// Last writer wins on duplicate keys within the batch.
    pub async fn bulk_update(
        db: &PgPool,
        items: Vec<BulkSettingItem>,
    ) -> Result<Vec<BulkSettingResult>, AppError> {
        let mut results = Vec::with_capacity(items.len());

        for item in items {
            let key = item.key.clone();
            let (response, created) = Self::upsert(db, &key, item.into()).await?;
            results.push(BulkSettingResult {
                key: response.key,
                value: response.value,
                updated: !created,
            });
        }

        Ok(results)
    }

    /// Seeds the default settings. Idempotent: existing keys are left
    /// untouched.
    pub async fn initialize_defaults(db: &PgPool) -> Result<Vec<InitializeResult>, AppError> {
        let mut results = Vec::with_capacity(DEFAULT_SETTINGS.len());

        for (key, value, ty, category, description) in DEFAULT_SETTINGS {
            let result = sqlx::query(
                "INSERT INTO settings (key, value, type, category, description)
                 VALUES ($1, $2, $3, $4, $5)
                 ON CONFLICT (key) DO NOTHING",
            )
            .bind(key)
            .bind(value)
            .bind(ty)
            .bind(category)
            .bind(description)
            .execute(db)
            .await?;

            results.push(InitializeResult {
                key: key.to_string(),
                created: result.rows_affected() > 0,
            });
        }

        Ok(results)
    }

    async fn find(db: &PgPool, key: &str) -> Result<Option<Setting>, AppError> {
        let setting = sqlx::query_as::<_, Setting>(&format!(
            "SELECT {SETTING_COLUMNS} FROM settings WHERE key = $1"
        ))
        .bind(key)
        .fetch_optional(db)
        .await?;

        Ok(setting)
    }

    fn to_response(setting: Setting) -> SettingResponse {
        SettingResponse {
            value: parse_value(setting.value.as_deref(), setting.setting_type),
            key: setting.key,
            setting_type: setting.setting_type,
            category: setting.category,
            description: setting.description,
        }
    }
}
