use thiserror::Error;

/// Errors that can occur when reading or writing snapshots.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred in the backing store.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for snapshot store operations.
pub type Result<T> = std::result::Result<T, StorageError>;
