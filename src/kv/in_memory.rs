//! InMemoryKeyValueStore - HashMap-backed key-value store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::KeyValueStore;
use crate::error::KvError;

/// In-memory key-value store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same entries, the way two handles
/// to one browser profile see the same `localStorage`.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store without a size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value is larger than `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| KvError::LockPoisoned("read"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(KvError::QuotaExceeded {
                    key: key.to_string(),
                    bytes: value.len(),
                });
            }
        }

        let mut entries = self
            .entries
            .write()
            .map_err(|_| KvError::LockPoisoned("write"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, KvError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| KvError::LockPoisoned("remove"))?;
        Ok(entries.remove(key).is_some())
    }
}
