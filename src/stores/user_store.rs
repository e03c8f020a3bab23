use crate::models::user::User;
use dashmap::DashMap;

/// In-memory table of user records, keyed by user id.
///
/// Concurrent access goes through the map's per-key locks: `update_with`
/// holds the entry exclusively while a record is mutated, so each record's
/// update is atomic. There is no cross-record transaction.
pub struct UserStore {
    users: DashMap<String, User>,
}

impl UserStore {
    /// Create a new UserStore instance
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: DashMap::with_capacity(capacity),
        }
    }

    /// Insert a user record, keyed by its id.
    /// Ids are freshly generated UUIDs, so collisions do not occur in
    /// practice; an existing record under the same id would be replaced.
    pub fn insert(&self, user: User) {
        let user_id = user.user_id.clone();
        self.users.insert(user_id, user);
    }

    /// Get a user by id.
    /// Returns a clone of the record if found.
    pub fn get(&self, user_id: &str) -> Option<User> {
        self.users.get(user_id).map(|entry| entry.value().clone())
    }

    /// Remove a user by id.
    /// Returns the removed record if it existed.
    pub fn remove(&self, user_id: &str) -> Option<User> {
        self.users.remove(user_id).map(|(_, user)| user)
    }

    /// Remove every record whose mobile number exactly equals `mob_num`.
    /// Returns the number of records removed (possibly zero).
    pub fn remove_by_mobile(&self, mob_num: &str) -> usize {
        let matching: Vec<String> = self
            .users
            .iter()
            .filter(|entry| entry.value().mob_num == mob_num)
            .map(|entry| entry.key().clone())
            .collect();

        let mut removed = 0;
        for user_id in matching {
            if self.users.remove(&user_id).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// List records matching the supplied exact-match filters, AND semantics.
    /// Absent filters are no-ops. Iteration order is unspecified.
    pub fn find(
        &self,
        user_id: Option<&str>,
        mob_num: Option<&str>,
        manager_id: Option<&str>,
    ) -> Vec<User> {
        self.users
            .iter()
            .filter(|entry| {
                let user = entry.value();
                user_id.is_none_or(|id| user.user_id == id)
                    && mob_num.is_none_or(|num| user.mob_num == num)
                    && manager_id.is_none_or(|id| user.manager_id.as_deref() == Some(id))
            })
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Snapshot of all records.
    pub fn all(&self) -> Vec<User> {
        self.users.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Mutate the record with the given id in place, holding its entry lock
    /// for the duration of the closure. Returns false if no such record.
    pub fn update_with<F>(&self, user_id: &str, apply: F) -> bool
    where
        F: FnOnce(&mut User),
    {
        match self.users.get_mut(user_id) {
            Some(mut entry) => {
                apply(entry.value_mut());
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        self.users.clear();
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
