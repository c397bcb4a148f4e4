use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    create_paralelo, delete_paralelo, get_paralelo, get_paralelo_stats, get_paralelos,
    update_paralelo,
};

pub fn init_paralelos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_paralelos).post(create_paralelo))
        .route("/stats", get(get_paralelo_stats))
        .route(
            "/{id}",
            put(update_paralelo).get(get_paralelo).delete(delete_paralelo),
        )
}
