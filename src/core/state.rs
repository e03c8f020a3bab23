// Application state (AppState)

use crate::core::config::Config;
use crate::stores::{manager_directory::ManagerDirectory, user_store::UserStore};
use std::sync::Arc;

/// Shared application state
///
/// Contains all shared components that are accessed by request handlers.
/// All fields are wrapped in Arc for efficient cloning across threads.
#[derive(Clone)]
pub struct AppState {
    /// In-memory table of user records
    pub user_store: Arc<UserStore>,

    /// Fixed set of manager ids a record may reference
    pub managers: Arc<ManagerDirectory>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let managers = Arc::new(ManagerDirectory::with_manager_ids(&config.managers.valid_ids));

        Self {
            user_store: Arc::new(UserStore::with_capacity(config.memory.user_capacity)),
            managers,
            config,
        }
    }
}
