//! Key-value port - the "local storage" the story store persists into.
//!
//! The store only ever needs string values under string keys, the same
//! contract as a browser's `localStorage`. Two backends ship with the crate:
//!
//! - [`InMemoryKeyValueStore`] for tests and ephemeral sessions,
//! - [`FileKeyValueStore`] keeping every key in one JSON file on disk.

mod file;
mod in_memory;

use crate::error::KvError;

/// String-keyed storage of string values.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Remove `key`. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, KvError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, KvError> {
        (**self).remove(key)
    }
}

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
