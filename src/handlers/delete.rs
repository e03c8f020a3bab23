use crate::core::state::AppState;
use crate::models::api::{DeleteUserRequest, SuccessResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::info;

/// Remove user records by id or by mobile number.
///
/// POST /delete_user
///
/// A by-id hit short-circuits; a by-id miss falls through to the mobile
/// sweep when `mob_num` is supplied. The response is a success message
/// regardless of how many records were removed, so callers cannot tell
/// "deleted" apart from "nothing matched".
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DeleteUserRequest>,
) -> impl IntoResponse {
    if let Some(user_id) = &payload.user_id {
        if state.user_store.remove(user_id).is_some() {
            info!(user_id = %user_id, "User deleted");
            return deleted_response();
        }
    }

    if let Some(mob_num) = &payload.mob_num {
        let removed = state.user_store.remove_by_mobile(mob_num);
        info!(mob_num = %mob_num, removed, "Users deleted by mobile number");
    }

    deleted_response()
}

fn deleted_response() -> (StatusCode, Json<SuccessResponse>) {
    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: "User deleted successfully".to_string(),
        }),
    )
}
