use std::sync::Arc;

use crate::error::StateResult;

/// Single-key get/put substrate.
///
/// All implementations must satisfy these invariants:
/// - `get` and `put` are atomic per key.
/// - A successful `put` is durable by the substrate's own definition.
/// - Values are opaque bytes. The store never interprets them, caches them,
///   or retries on failure; that policy belongs to the substrate.
/// - A key that was never written reads back as `Ok(None)`, not an error.
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key` wholesale.
    fn put(&self, key: &str, value: &[u8]) -> StateResult<()>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        (**self).put(key, value)
    }
}

impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        (**self).put(key, value)
    }
}

impl<T: StateStore + ?Sized> StateStore for Box<T> {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        (**self).put(key, value)
    }
}
