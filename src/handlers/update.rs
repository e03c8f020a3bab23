use crate::core::state::AppState;
use crate::models::api::{SuccessResponse, UpdateUserRequest};
use crate::utils::time::current_timestamp;
use crate::validation::fields;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Apply whitelisted field updates to a batch of user records.
///
/// POST /update_user
///
/// Ids with no record are skipped silently. `mob_num` and `pan_num` are
/// normalized but not validated here; `manager_id` is applied only when it
/// belongs to the configured manager set and dropped otherwise, with no
/// per-key error surfaced. Every existing record in the batch gets its
/// `updated_at` stamped, whether or not any field changed.
pub async fn update_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    let data = &payload.update_data;
    let mut updated = 0usize;

    for user_id in &payload.user_ids {
        let applied = state.user_store.update_with(user_id, |user| {
            if let Some(full_name) = &data.full_name {
                user.full_name = full_name.clone();
            }

            if let Some(mob_num) = &data.mob_num {
                user.mob_num = fields::normalize_mobile(mob_num);
            }

            if let Some(pan_num) = &data.pan_num {
                user.pan_num = fields::normalize_pan(pan_num);
            }

            if let Some(manager_id) = &data.manager_id {
                if state.managers.contains(manager_id) {
                    user.manager_id = Some(manager_id.clone());
                }
            }

            user.updated_at = Some(current_timestamp());
        });

        if applied {
            updated += 1;
        } else {
            debug!(user_id = %user_id, "Skipping update for unknown user id");
        }
    }

    info!(
        requested = payload.user_ids.len(),
        updated,
        "Users updated"
    );

    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: "Users updated successfully".to_string(),
        }),
    )
}
