use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Result, store::SnapshotStore};

/// In-memory snapshot store implementation for testing.
///
/// Cloning produces a handle to the same underlying map, so a test can
/// keep a handle to inspect what a store under test persisted.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys stored.
    pub fn key_count(&self) -> usize {
        self.entries.read().len()
    }

    /// Clears all stored values.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl SnapshotStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
