use mathmaster_api::modules::users::model::UserRole;
use mathmaster_api::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Inserts a user directly, bypassing the API.
#[allow(dead_code)]
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: UserRole,
    is_active: bool,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO users (email, password, first_name, last_name, role, is_active)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind("Test")
    .bind("User")
    .bind(role)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
