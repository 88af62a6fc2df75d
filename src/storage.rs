//! Key-value storage capabilities.
//!
//! The store never talks to a concrete storage backend directly. It is
//! handed a [`Storage`] capability at construction and only ever calls
//! `get` and `set` on a single named slot, so backends can be swapped
//! freely — an in-memory fake in tests, a file on disk in an application.

pub(crate) mod document;
mod file;
mod memory;

use std::{io, sync::Arc};

pub use file::FileStorage;
pub use memory::{MemoryStorage, NullStorage};

/// A key-value storage capability.
///
/// Methods take `&self`; backends carry their own interior mutability. This
/// lets change-notification callbacks read back through the same store
/// handle that triggered them.
pub trait Storage {
    /// Reads the value stored under `key`, or `None` if the key has never
    /// been written.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read in this
    /// context.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write fails (quota, disabled
    /// storage, I/O failure).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Error raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Persistent storage is not available in this context (for example, a
    /// non-interactive render context).
    #[error("persistent storage is not available in this context")]
    Unavailable,
    /// The backend failed to read or write.
    #[error(transparent)]
    Io(#[from] io::Error),
}
