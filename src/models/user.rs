use serde::{Deserialize, Serialize};

/// A user record as held in the store and exposed on the wire.
///
/// `mob_num` and `pan_num` are stored normalized (prefix stripped, PAN
/// uppercased). Timestamps are Unix seconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier, generated at creation, never reused
    pub user_id: String,
    pub full_name: String,
    pub mob_num: String,
    pub pan_num: String,
    pub manager_id: Option<String>,
    /// Set once at creation
    pub created_at: i64,
    /// Set on each mutation, absent until the first update
    pub updated_at: Option<i64>,
    /// Always true at creation; never read or toggled by any operation
    pub is_active: bool,
}

impl User {
    pub fn new(
        user_id: String,
        full_name: String,
        mob_num: String,
        pan_num: String,
        manager_id: Option<String>,
        created_at: i64,
    ) -> Self {
        Self {
            user_id,
            full_name,
            mob_num,
            pan_num,
            manager_id,
            created_at,
            updated_at: None,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active_with_no_update() {
        let user = User::new(
            "id-1".to_string(),
            "Jane Doe".to_string(),
            "9812345678".to_string(),
            "ABCDE1234F".to_string(),
            None,
            1_700_000_000,
        );

        assert!(user.is_active);
        assert!(user.updated_at.is_none());
        assert_eq!(user.created_at, 1_700_000_000);
    }

    #[test]
    fn test_wire_form_is_camel_case() {
        let user = User::new(
            "id-1".to_string(),
            "Jane Doe".to_string(),
            "9812345678".to_string(),
            "ABCDE1234F".to_string(),
            Some("manager1".to_string()),
            1_700_000_000,
        );

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["userId"], "id-1");
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["mobNum"], "9812345678");
        assert_eq!(json["panNum"], "ABCDE1234F");
        assert_eq!(json["managerId"], "manager1");
        assert_eq!(json["createdAt"], 1_700_000_000);
        assert_eq!(json["updatedAt"], serde_json::Value::Null);
        assert_eq!(json["isActive"], true);
    }
}
