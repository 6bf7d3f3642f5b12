//! File-backed state store for hosts that need state to outlive the process.
//!
//! The whole key space is kept in memory and rewritten as a single JSON
//! snapshot on every `put`. Values that are valid UTF-8 are persisted as
//! strings so stored records stay readable with ordinary tooling.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::traits::StateStore;

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PersistedValue {
    Text(String),
    Bytes(Vec<u8>),
}

impl PersistedValue {
    fn from_bytes(bytes: &[u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(s) => Self::Text(s.to_owned()),
            Err(_) => Self::Bytes(bytes.to_vec()),
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(s) => s.into_bytes(),
            Self::Bytes(b) => b,
        }
    }
}

/// JSON-snapshot state store rooted at a single file.
pub struct FileStateStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl FileStateStore {
    /// Open the snapshot at `path`, starting empty if the file does not exist.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> StateResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let values = if path.exists() {
            let raw = fs::read(&path)?;
            if raw.is_empty() {
                BTreeMap::new()
            } else {
                let persisted: BTreeMap<String, PersistedValue> = serde_json::from_slice(&raw)
                    .map_err(|e| StateError::Serialization(e.to_string()))?;
                persisted
                    .into_iter()
                    .map(|(k, v)| (k, v.into_bytes()))
                    .collect()
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = values.len(), "state snapshot opened");
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sorted list of every key in the snapshot.
    pub fn keys(&self) -> StateResult<Vec<String>> {
        let map = self.values.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(map.keys().cloned().collect())
    }

    fn persist(&self, values: &BTreeMap<String, Vec<u8>>) -> StateResult<()> {
        let persisted: BTreeMap<&str, PersistedValue> = values
            .iter()
            .map(|(k, v)| (k.as_str(), PersistedValue::from_bytes(v)))
            .collect();
        let json = serde_json::to_vec_pretty(&persisted)
            .map_err(|e| StateError::Serialization(e.to_string()))?;

        // Synced temp file, then rename: the snapshot on disk is never partial.
        let mut tmp_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "state".into());
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);
        let mut file = File::create(&tmp)?;
        file.write_all(&json)?;
        file.sync_all()?;
        drop(file);
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let map = self.values.read().map_err(|_| StateError::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        let mut map = self.values.write().map_err(|_| StateError::LockPoisoned)?;
        let mut next = map.clone();
        next.insert(key.to_owned(), value.to_vec());
        self.persist(&next)?;
        *map = next;
        debug!(key, len = value.len(), "state put");
        Ok(())
    }
}

impl std::fmt::Debug for FileStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStateStore")
            .field("path", &self.path)
            .finish()
    }
}
