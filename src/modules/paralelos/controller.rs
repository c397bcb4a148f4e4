use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{
    CreateParaleloDto, ParaleloFilterParams, ParaleloStats, ParaleloWithTeacher,
    UpdateParaleloDto,
};
use super::service::ParaleloService;

/// List paralelos with optional status and search filters
#[utoipa::path(
    get,
    path = "/api/paralelos",
    params(
        ("status" = Option<String>, Query, description = "Filter by status (active, inactive)"),
        ("search" = Option<String>, Query, description = "Match against name and level")
    ),
    responses(
        (status = 200, description = "List of paralelos", body = Vec<ParaleloWithTeacher>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Paralelos"
)]
#[instrument(skip(state))]
pub async fn get_paralelos(
    State(state): State<AppState>,
    Query(filters): Query<ParaleloFilterParams>,
) -> Result<Json<ApiResponse<Vec<ParaleloWithTeacher>>>, AppError> {
    let paralelos = ParaleloService::get_paralelos(&state.db, filters).await?;
    Ok(Json(ApiResponse::data(paralelos)))
}

/// Aggregate paralelo counts
#[utoipa::path(
    get,
    path = "/api/paralelos/stats",
    responses(
        (status = 200, description = "Paralelo statistics", body = ParaleloStats),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Paralelos"
)]
#[instrument(skip(state))]
pub async fn get_paralelo_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ParaleloStats>>, AppError> {
    let stats = ParaleloService::get_stats(&state.db).await?;
    Ok(Json(ApiResponse::data(stats)))
}

/// Get a paralelo by id
#[utoipa::path(
    get,
    path = "/api/paralelos/{id}",
    params(("id" = Uuid, Path, description = "Paralelo id")),
    responses(
        (status = 200, description = "Paralelo", body = ParaleloWithTeacher),
        (status = 404, description = "Paralelo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Paralelos"
)]
#[instrument(skip(state))]
pub async fn get_paralelo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ParaleloWithTeacher>>, AppError> {
    let paralelo = ParaleloService::get_paralelo(&state.db, id).await?;
    Ok(Json(ApiResponse::data(paralelo)))
}

/// Create a new paralelo
#[utoipa::path(
    post,
    path = "/api/paralelos",
    request_body = CreateParaleloDto,
    responses(
        (status = 201, description = "Paralelo created", body = ParaleloWithTeacher),
        (status = 400, description = "Validation error or invalid teacher", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Paralelos"
)]
#[instrument(skip(state, dto))]
pub async fn create_paralelo(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateParaleloDto>,
) -> Result<(StatusCode, Json<ApiResponse<ParaleloWithTeacher>>), AppError> {
    let paralelo = ParaleloService::create_paralelo(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Paralelo created successfully",
            paralelo,
        )),
    ))
}

/// Update a paralelo in place
#[utoipa::path(
    put,
    path = "/api/paralelos/{id}",
    params(("id" = Uuid, Path, description = "Paralelo id")),
    request_body = UpdateParaleloDto,
    responses(
        (status = 200, description = "Paralelo updated", body = ParaleloWithTeacher),
        (status = 400, description = "Validation error or invalid teacher", body = ErrorResponse),
        (status = 404, description = "Paralelo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Paralelos"
)]
#[instrument(skip(state, dto))]
pub async fn update_paralelo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateParaleloDto>,
) -> Result<Json<ApiResponse<ParaleloWithTeacher>>, AppError> {
    let paralelo = ParaleloService::update_paralelo(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::with_message(
        "Paralelo updated successfully",
        paralelo,
    )))
}

/// Deactivate a paralelo (soft delete)
#[utoipa::path(
    delete,
    path = "/api/paralelos/{id}",
    params(("id" = Uuid, Path, description = "Paralelo id")),
    responses(
        (status = 200, description = "Paralelo deactivated"),
        (status = 404, description = "Paralelo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Paralelos"
)]
#[instrument(skip(state))]
pub async fn delete_paralelo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    ParaleloService::delete_paralelo(&state.db, id).await?;
    Ok(Json(ApiResponse::message("Paralelo deleted successfully")))
}
