//! # Storage Service
//!
//! This crate defines the durable slots the workbench persists into.
//!
//! ## Philosophy
//!
//! - **Named slots, not files**: A store maps string keys to whole string values
//! - **Whole-value writes**: A `set` replaces the slot; there are no partial updates
//! - **Failure is a value**: Every operation returns `Result`, callers decide how to degrade
//! - **Swappable**: In-memory, file-backed and failure-injecting stores share one trait
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A database (no queries, no transactions across keys)
//! - A sync engine (no multi-writer conflict resolution)

pub mod failing;
pub mod file;
pub mod memory;

pub use failing::{FailingStore, FailurePolicy};
pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors from a key-value store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable string-keyed slot store
pub trait KeyValueStore {
    /// Reads a slot; `Ok(None)` when nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces a slot's value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes a slot; removing an absent slot is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
