use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{
    BulkSettingResult, BulkSettingsDto, GroupedSetting, InitializeResult, SettingResponse,
    UpdateSettingDto,
};
use super::service::SettingService;

/// List all settings grouped by category
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Settings grouped by category"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
#[instrument(skip(state))]
pub async fn get_all_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BTreeMap<String, Vec<GroupedSetting>>>>, AppError> {
    let grouped = SettingService::get_all(&state.db).await?;
    Ok(Json(ApiResponse::data(grouped)))
}

/// Get a single setting by key
#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "Setting", body = SettingResponse),
        (status = 404, description = "Setting not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
#[instrument(skip(state))]
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<SettingResponse>>, AppError> {
    let setting = SettingService::get_by_key(&state.db, &key).await?;
    Ok(Json(ApiResponse::data(setting)))
}

/// Create or update a setting
#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    params(("key" = String, Path, description = "Setting key")),
    request_body = UpdateSettingDto,
    responses(
        (status = 200, description = "Setting created or updated", body = SettingResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
#[instrument(skip(state, dto))]
pub async fn update_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateSettingDto>,
) -> Result<Json<ApiResponse<SettingResponse>>, AppError> {
    let (setting, created) = SettingService::upsert(&state.db, &key, dto).await?;
    let message = if created {
        "Setting created"
    } else {
        "Setting updated"
    };
    Ok(Json(ApiResponse::with_message(message, setting)))
}

/// Upsert a batch of settings
#[utoipa::path(
    post,
    path = "/api/settings/bulk",
    request_body = BulkSettingsDto,
    responses(
        (status = 200, description = "Per-key results", body = Vec<BulkSettingResult>),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
#[instrument(skip(state, dto))]
pub async fn bulk_update_settings(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<BulkSettingsDto>,
) -> Result<Json<ApiResponse<Vec<BulkSettingResult>>>, AppError> {
    let results = SettingService::bulk_update(&state.db, dto.settings).await?;
    Ok(Json(ApiResponse::with_message("Settings updated", results)))
}

/// Seed the default settings (idempotent)
#[utoipa::path(
    post,
    path = "/api/settings/initialize",
    responses(
        (status = 200, description = "Per-key creation results", body = Vec<InitializeResult>)
    ),
    security(("bearer_auth" = [])),
    tag = "Settings"
)]
#[instrument(skip(state))]
pub async fn initialize_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<InitializeResult>>>, AppError> {
    let results = SettingService::initialize_defaults(&state.db).await?;
    Ok(Json(ApiResponse::with_message(
        "Settings initialized",
        results,
    )))
}
