use crate::models::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub mob_num: String,
    pub pan_num: String,
    pub manager_id: Option<String>,
}

/// Filters for get_users. All optional, combined with AND semantics.
#[derive(Debug, Default, Deserialize)]
pub struct GetUsersRequest {
    pub mob_num: Option<String>,
    pub user_id: Option<String>,
    pub manager_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub user_id: Option<String>,
    pub mob_num: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub user_ids: Vec<String>,
    pub update_data: UpdateData,
}

/// Whitelisted updatable fields. Unknown payload keys are dropped during
/// deserialization, matching the original contract of silently ignoring them.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateData {
    pub full_name: Option<String>,
    pub mob_num: Option<String>,
    pub pan_num: Option<String>,
    pub manager_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
