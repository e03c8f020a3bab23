use crate::core::error::CreateUserError;
use crate::core::state::AppState;
use crate::models::api::{CreateUserRequest, SuccessResponse};
use crate::models::user::User;
use crate::utils::id::new_user_id;
use crate::utils::time::current_timestamp;
use crate::validation::fields;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Register a new user record.
///
/// POST /create_user
///
/// Validation runs in a fixed order (name, mobile, PAN, manager) and the
/// first failure wins; nothing is stored on failure. On success the mobile
/// number and PAN are normalized before insertion.
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Response, CreateUserError> {
    if !fields::is_valid_full_name(&payload.full_name) {
        warn!("Rejected user create: blank full name");
        return Err(CreateUserError::InvalidFullName);
    }

    if !fields::is_valid_mobile(&payload.mob_num) {
        warn!(mob_num = %payload.mob_num, "Rejected user create: bad mobile number");
        return Err(CreateUserError::InvalidMobileNumber);
    }

    if !fields::is_valid_pan(&payload.pan_num) {
        warn!(pan_num = %payload.pan_num, "Rejected user create: bad PAN number");
        return Err(CreateUserError::InvalidPanNumber);
    }

    if let Some(manager_id) = &payload.manager_id {
        if !state.managers.contains(manager_id) {
            warn!(manager_id = %manager_id, "Rejected user create: unknown manager id");
            return Err(CreateUserError::InvalidManagerId);
        }
    }

    let user = User::new(
        new_user_id(),
        payload.full_name,
        fields::normalize_mobile(&payload.mob_num),
        fields::normalize_pan(&payload.pan_num),
        payload.manager_id,
        current_timestamp(),
    );

    info!(
        user_id = %user.user_id,
        manager_id = ?user.manager_id,
        "User created"
    );

    state.user_store.insert(user);

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: "User created successfully".to_string(),
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Config, ServerConfig};
    use http_body_util::BodyExt;

    fn create_test_state() -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                port: Some(8080),
                unix_socket: None,
                num_threads: 4,
            },
            memory: Default::default(),
            logging: Default::default(),
            managers: Default::default(),
        };

        Arc::new(AppState::new(config))
    }

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            full_name: "Jane Doe".to_string(),
            mob_num: "+919812345678".to_string(),
            pan_num: "abcde1234f".to_string(),
            manager_id: Some("manager1".to_string()),
        }
    }

    async fn error_message(error: CreateUserError) -> String {
        let response = error.into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_success_stores_normalized_record() {
        let state = create_test_state();

        let response = create_user_handler(State(state.clone()), Json(valid_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let users = state.user_store.all();
        assert_eq!(users.len(), 1);

        let user = &users[0];
        assert_eq!(user.full_name, "Jane Doe");
        assert_eq!(user.mob_num, "9812345678");
        assert_eq!(user.pan_num, "ABCDE1234F");
        assert_eq!(user.manager_id.as_deref(), Some("manager1"));
        assert!(user.is_active);
        assert!(user.updated_at.is_none());
        assert!(user.created_at > 0);
    }

    #[tokio::test]
    async fn test_create_success_body() {
        let state = create_test_state();

        let response = create_user_handler(State(state), Json(valid_request()))
            .await
            .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], "User created successfully");
    }

    #[tokio::test]
    async fn test_create_without_manager() {
        let state = create_test_state();

        let mut request = valid_request();
        request.manager_id = None;

        let response = create_user_handler(State(state.clone()), Json(request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let users = state.user_store.all();
        assert_eq!(users.len(), 1);
        assert!(users[0].manager_id.is_none());
    }

    #[tokio::test]
    async fn test_create_blank_name_rejected() {
        let state = create_test_state();

        let mut request = valid_request();
        request.full_name = "   ".to_string();

        let result = create_user_handler(State(state.clone()), Json(request)).await;

        assert_eq!(result.unwrap_err(), CreateUserError::InvalidFullName);
        assert!(state.user_store.is_empty());
    }

    #[tokio::test]
    async fn test_create_bad_mobile_rejected() {
        let state = create_test_state();

        let mut request = valid_request();
        request.mob_num = "5812345678".to_string();

        let result = create_user_handler(State(state.clone()), Json(request)).await;

        assert_eq!(result.unwrap_err(), CreateUserError::InvalidMobileNumber);
        assert!(state.user_store.is_empty());
    }

    #[tokio::test]
    async fn test_create_bad_pan_rejected() {
        let state = create_test_state();

        let mut request = valid_request();
        request.pan_num = "ABCDE12345".to_string();

        let result = create_user_handler(State(state.clone()), Json(request)).await;

        assert_eq!(result.unwrap_err(), CreateUserError::InvalidPanNumber);
        assert!(state.user_store.is_empty());
    }

    #[tokio::test]
    async fn test_create_unknown_manager_rejected() {
        let state = create_test_state();

        let mut request = valid_request();
        request.manager_id = Some("manager9".to_string());

        let result = create_user_handler(State(state.clone()), Json(request)).await;

        assert_eq!(result.unwrap_err(), CreateUserError::InvalidManagerId);
        assert!(state.user_store.is_empty());
    }

    #[tokio::test]
    async fn test_first_failing_check_wins() {
        let state = create_test_state();

        // Everything invalid: the name error is the one reported
        let request = CreateUserRequest {
            full_name: "".to_string(),
            mob_num: "123".to_string(),
            pan_num: "nope".to_string(),
            manager_id: Some("manager9".to_string()),
        };

        let result = create_user_handler(State(state), Json(request)).await;
        assert_eq!(result.unwrap_err(), CreateUserError::InvalidFullName);
    }

    #[tokio::test]
    async fn test_error_body_message() {
        assert_eq!(
            error_message(CreateUserError::InvalidMobileNumber).await,
            "Invalid mobile number"
        );
    }
}
