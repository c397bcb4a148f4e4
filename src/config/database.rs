//! Database configuration and connection pool initialization.
//!
//! The connection string is read from the `DATABASE_URL` environment
//! variable. Failing to reach the database at startup is process-fatal;
//! the server never serves degraded traffic.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;

/// Initializes the PostgreSQL connection pool and runs pending migrations.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset, the connection fails, or a migration
/// cannot be applied. Startup failures exit the process by design.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
