use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    create_user, delete_user, get_user, get_user_stats, get_users, update_user,
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/stats", get(get_user_stats))
        .route("/{id}", put(update_user).get(get_user).delete(delete_user))
}
