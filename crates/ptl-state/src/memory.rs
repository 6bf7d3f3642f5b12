use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StateError, StateResult};
use crate::traits::StateStore;

/// In-memory, HashMap-based state store.
///
/// Intended for tests and embedding. Values are held behind a `RwLock` and
/// cloned on read/write.
pub struct InMemoryStateStore {
    values: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> StateResult<usize> {
        let map = self.values.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(map.len())
    }

    /// Returns `true` if no key has been written.
    pub fn is_empty(&self) -> StateResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Return a sorted list of all keys in the store.
    pub fn keys(&self) -> StateResult<Vec<String>> {
        let map = self.values.read().map_err(|_| StateError::LockPoisoned)?;
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    /// Remove every key from the store.
    pub fn clear(&self) -> StateResult<()> {
        self.values
            .write()
            .map_err(|_| StateError::LockPoisoned)?
            .clear();
        Ok(())
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let map = self.values.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        let mut map = self.values.write().map_err(|_| StateError::LockPoisoned)?;
        map.insert(key.to_owned(), value.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStateStore")
            .field("key_count", &self.len().ok())
            .finish()
    }
}
