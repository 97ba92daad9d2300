//! Key-value snapshot persistence for the astrea storefront.
//!
//! The cart store saves its full state after every mutation and restores
//! it at startup. This crate abstracts that behind the [`SnapshotStore`]
//! trait so the cart is testable without a real storage backend:
//! - [`InMemoryStore`] — volatile backend for unit tests
//! - [`FileStore`] — one file per key under a root directory

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use store::SnapshotStore;
