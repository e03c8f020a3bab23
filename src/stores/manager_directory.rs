use dashmap::DashSet;

/// Directory of valid manager ids.
///
/// Populated once from configuration at startup; membership is checked on
/// create and update. Matching is exact and case-sensitive.
#[derive(Debug, Default)]
pub struct ManagerDirectory {
    ids: DashSet<String>,
}

impl ManagerDirectory {
    pub fn new() -> Self {
        Self {
            ids: DashSet::new(),
        }
    }

    pub fn with_manager_ids(manager_ids: &[String]) -> Self {
        let directory = Self::new();

        for id in manager_ids {
            directory.ids.insert(id.clone());
        }

        tracing::info!(count = directory.len(), "Initialized manager directory");
        directory
    }

    /// Check whether `manager_id` is one of the configured ids.
    pub fn contains(&self, manager_id: &str) -> bool {
        self.ids.contains(manager_id)
    }

    /// List all configured manager ids. The order is not guaranteed.
    pub fn list(&self) -> Vec<String> {
        self.ids.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
