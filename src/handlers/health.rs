use crate::core::state::AppState;
use crate::utils::time::current_timestamp;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    pub users: usize,
}

/// Health check handler
///
/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: current_timestamp(),
            users: state.user_store.len(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Config, ServerConfig};
    use crate::models::user::User;
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

    #[tokio::test]
    async fn test_health_handler() {
        let state = create_test_state();

        let response = health_handler(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_reports_user_count() {
        let state = create_test_state();
        state.user_store.insert(User::new(
            "u1".to_string(),
            "Jane Doe".to_string(),
            "9812345678".to_string(),
            "ABCDE1234F".to_string(),
            None,
            1_700_000_000,
        ));

        let response = health_handler(State(state)).await.into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(health.status, "ok");
        assert!(health.timestamp > 0);
        assert_eq!(health.users, 1);
    }
}
