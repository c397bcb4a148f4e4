//! Setting models and DTOs.
//!
//! A setting stores its value as text regardless of logical type; the
//! [`SettingType`] tag drives coercion in both directions (see
//! [`super::values`]). Value and type are always written together so the
//! stored text stays re-parseable.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Logical type of a stored setting value. Stored as the `setting_type`
/// Postgres enum and serialized lowercase on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "setting_type", rename_all = "lowercase")]
pub enum SettingType {
    #[default]
    String,
    Number,
    Boolean,
    Json,
}

/// A setting row as stored.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: Uuid,
    pub key: String,
    pub value: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub setting_type: SettingType,
    pub category: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Upsert payload for `PUT /api/settings/{key}`.
///
/// On creation, omitted `type` defaults to string and omitted `category`
/// to "general". On update, omitted fields keep the record's current
/// values; in particular, `type` is never silently reset.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingDto {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
    #[serde(rename = "type")]
    pub setting_type: Option<SettingType>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// One entry of a bulk upsert request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkSettingItem {
    #[validate(length(min = 1, message = "Key is required"))]
    pub key: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
    #[serde(rename = "type")]
    pub setting_type: Option<SettingType>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkSettingsDto {
    #[validate(nested)]
    pub settings: Vec<BulkSettingItem>,
}

impl From<BulkSettingItem> for UpdateSettingDto {
    fn from(item: BulkSettingItem) -> Self {
        UpdateSettingDto {
            value: item.value,
            setting_type: item.setting_type,
            category: item.category,
            description: item.description,
        }
    }
}

/// A setting with its value parsed to the logical type.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingResponse {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: Value,
    #[serde(rename = "type")]
    pub setting_type: SettingType,
    pub category: String,
    pub description: Option<String>,
}

/// Listing entry; the category lives on the surrounding group.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupedSetting {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: Value,
    #[serde(rename = "type")]
    pub setting_type: SettingType,
    pub description: Option<String>,
}

/// Per-key outcome of a bulk upsert.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkSettingResult {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: Value,
    pub updated: bool,
}

/// Per-key outcome of seeding the defaults.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InitializeResult {
    pub key: String,
    pub created: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_type_serde() {
        assert_eq!(
            serde_json::to_string(&SettingType::Json).unwrap(),
            "\"json\""
        );
        let ty: SettingType = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(ty, SettingType::Boolean);
        assert!(serde_json::from_str::<SettingType>("\"float\"").is_err());
    }

    #[test]
    fn default_setting_type_is_string() {
        assert_eq!(SettingType::default(), SettingType::String);
    }

    #[test]
    fn update_dto_defaults_value_to_null() {
        let dto: UpdateSettingDto = serde_json::from_str(r#"{"category": "general"}"#).unwrap();
        assert!(dto.value.is_null());
        assert!(dto.setting_type.is_none());
    }
}
