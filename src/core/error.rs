// Centralized error handling for the registry

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Validation failures surfaced by user creation.
///
/// Checks run in a fixed order and the first failing one wins; the other
/// operations never report errors to the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CreateUserError {
    #[error("Invalid full name")]
    InvalidFullName,

    #[error("Invalid mobile number")]
    InvalidMobileNumber,

    #[error("Invalid PAN number")]
    InvalidPanNumber,

    #[error("Invalid manager ID")]
    InvalidManagerId,
}

impl IntoResponse for CreateUserError {
    fn into_response(self) -> Response {
        use crate::models::api::ErrorResponse;

        // Clients read the `error` key; the status stays 200 like every
        // other response from these endpoints.
        (
            StatusCode::OK,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
