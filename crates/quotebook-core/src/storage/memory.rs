//! In-memory item store

use crate::storage::db::DatabaseError;
use crate::storage::items::{KeyValueStore, Scope};
use std::collections::HashMap;

/// Item store that lives only as long as the value
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<(Scope, String), String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, scope: Scope, key: &str) -> Result<Option<String>, DatabaseError> {
        Ok(self.items.get(&(scope, key.to_string())).cloned())
    }

    fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.items.insert((scope, key.to_string()), value.to_string());
        Ok(())
    }

    fn remove(&mut self, scope: Scope, key: &str) -> Result<bool, DatabaseError> {
        Ok(self.items.remove(&(scope, key.to_string())).is_some())
    }

    fn clear(&mut self, scope: Scope) -> Result<usize, DatabaseError> {
        let before = self.items.len();
        self.items.retain(|(s, _), _| *s != scope);
        Ok(before - self.items.len())
    }
}
