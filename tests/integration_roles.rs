mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email};
use http_body_util::BodyExt;
use mathmaster_api::config::app::AppConfig;
use mathmaster_api::config::jwt::JwtConfig;
use mathmaster_api::modules::users::model::UserRole;
use mathmaster_api::router::init_router;
use mathmaster_api::state::AppState;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        app_config: AppConfig::from_env(),
    };
    init_router(state)
}

async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse login response. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    });
    body["data"]["token"]
        .as_str()
        .unwrap_or_else(|| panic!("No token in response. Status: {}, Body: {}", status, body))
        .to_string()
}

async fn count_users(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_cannot_list_users(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "testpass123", UserRole::Student, true).await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/users")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_create_user_is_forbidden_without_mutation(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "testpass123", UserRole::Student, true).await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let before = count_users(&pool).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": generate_unique_email(),
                "password": "newpass123",
                "firstName": "New",
                "lastName": "User"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(count_users(&pool).await, before);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_teacher_cannot_access_settings(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "testpass123", UserRole::Teacher, true).await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/settings")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_can_list_users(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "testpass123", UserRole::Admin, true).await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/users")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["success"], true);
    assert!(body["data"].is_array());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deactivated_user_token_is_rejected(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, "testpass123", UserRole::Admin, true).await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app.clone(), &email, "testpass123").await;

    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/api/users")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
