// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // User record operations
        .route("/create_user", post(crate::handlers::create::create_user_handler))
        .route("/get_users", post(crate::handlers::query::get_users_handler))
        .route("/delete_user", post(crate::handlers::delete::delete_user_handler))
        .route("/update_user", post(crate::handlers::update::update_user_handler))

        // Liveness probe
        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
