//! Snapshot store trait.

use crate::Result;

/// A key-value store for serialized state snapshots.
///
/// Mirrors the browser local-storage surface the storefront persists the
/// cart into: string keys mapped to string values, with get/set/remove.
/// All operations are synchronous; the storefront's execution model runs
/// every mutation to completion on the calling thread.
pub trait SnapshotStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Removing an absent key is
    /// not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Returns true if a value is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}
