use sqlx::PgPool;

use crate::config::app::AppConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub app_config: AppConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        app_config: AppConfig::from_env(),
    }
}
