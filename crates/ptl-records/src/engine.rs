use ptl_state::StateStore;
use tracing::{debug, warn};

use crate::codec::RecordCodec;
use crate::entry::{Entry, RecordCollection};
use crate::error::{RecordError, RecordResult};

/// Read-modify-write append over a [`StateStore`].
///
/// Each `append` does one `get` and at most one `put`. The sequence is not
/// atomic: two callers appending to the same key at the same time can lose
/// an update unless the substrate serializes calls per key.
pub struct AppendEngine<S> {
    store: S,
}

impl<S: StateStore> AppendEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying state store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and decode the collection stored under `key`.
    ///
    /// An absent or empty value is an empty collection. A value that does not
    /// decode is `CorruptRecord`.
    pub fn load(&self, key: &str) -> RecordResult<RecordCollection> {
        match self.store.get(key)? {
            Some(bytes) if !bytes.is_empty() => decode_stored(key, &bytes),
            _ => Ok(RecordCollection::new()),
        }
    }

    /// Append `entry` to the end of the collection stored under `key`.
    ///
    /// Nothing is written if the read fails or the existing value is corrupt.
    pub fn append(&self, key: &str, entry: Entry) -> RecordResult<()> {
        let mut collection = self.load(key)?;
        collection.push(entry);
        let encoded = RecordCodec::encode(&collection)?;
        self.store.put(key, &encoded)?;
        debug!(key, entries = collection.len(), "record appended");
        Ok(())
    }
}

fn decode_stored(key: &str, bytes: &[u8]) -> RecordResult<RecordCollection> {
    RecordCodec::decode(bytes).map_err(|e| {
        warn!(key, error = %e, "stored value is not a record collection");
        RecordError::CorruptRecord {
            key: key.to_owned(),
            reason: e.to_string(),
        }
    })
}

impl<S> std::fmt::Debug for AppendEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppendEngine").finish_non_exhaustive()
    }
}
