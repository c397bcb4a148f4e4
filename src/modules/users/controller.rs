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

use super::model::{CreateUserDto, UpdateUserDto, User, UserFilterParams, UserStats};
use super::service::UserService;

/// List users with optional role, status, and search filters
#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("role" = Option<String>, Query, description = "Filter by role (admin, teacher, student)"),
        ("status" = Option<String>, Query, description = "Filter by status (active, inactive)"),
        ("search" = Option<String>, Query, description = "Match against name and email")
    ),
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Query(filters): Query<UserFilterParams>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = UserService::get_users(&state.db, filters).await?;
    Ok(Json(ApiResponse::data(users)))
}

/// Aggregate user counts
#[utoipa::path(
    get,
    path = "/api/users/stats",
    responses(
        (status = 200, description = "User statistics", body = UserStats),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserStats>>, AppError> {
    let stats = UserService::get_stats(&state.db).await?;
    Ok(Json(ApiResponse::data(stats)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;
    Ok(Json(ApiResponse::data(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error or duplicate email", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User created successfully", user)),
    ))
}

/// Update a user in place
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error or duplicate email", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = UserService::update_user(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::with_message(
        "User updated successfully",
        user,
    )))
}

/// Deactivate a user (soft delete)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deactivated"),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    UserService::delete_user(&state.db, id).await?;
    Ok(Json(ApiResponse::message("User deleted successfully")))
}
