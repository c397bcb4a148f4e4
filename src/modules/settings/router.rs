use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{
    bulk_update_settings, get_all_settings, get_setting, initialize_settings, update_setting,
};

pub fn init_settings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_settings))
        .route("/bulk", post(bulk_update_settings))
        .route("/initialize", post(initialize_settings))
        .route("/{key}", get(get_setting).put(update_setting))
}
