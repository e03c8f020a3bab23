use crate::core::state::AppState;
use crate::models::api::{GetUsersRequest, UsersResponse};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::debug;

/// List user records, optionally narrowed by exact-match filters.
///
/// POST /get_users
///
/// The body is optional; a missing or unparseable body means no filters.
/// Supplied filters (`mob_num`, `user_id`, `manager_id`) combine with AND
/// semantics. This operation never errors; no match yields an empty list.
pub async fn get_users_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    let filter: GetUsersRequest = if body.is_empty() {
        GetUsersRequest::default()
    } else {
        serde_json::from_slice(&body).unwrap_or_default()
    };

    let users = state.user_store.find(
        filter.user_id.as_deref(),
        filter.mob_num.as_deref(),
        filter.manager_id.as_deref(),
    );

    debug!(matched = users.len(), "User query");

    (StatusCode::OK, Json(UsersResponse { users }))
}
