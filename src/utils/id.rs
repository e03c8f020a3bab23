use uuid::Uuid;

/// Generate an opaque unique user id.
///
/// Random UUIDs, so ids are never reused across the life of the store.
pub fn new_user_id() -> String {
    Uuid::new_v4().to_string()
}
