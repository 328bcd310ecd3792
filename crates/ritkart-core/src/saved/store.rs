//! Snapshot store: raw bytes by key, with a JSON-file implementation.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Key/value store for collection snapshots. Implementations own durability;
/// callers own serialization.
pub trait SnapshotStore {
    /// Load the snapshot under `key`, or `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    /// Write the snapshot under `key`, replacing any previous value.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
    /// Remove the snapshot under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshot {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// One JSON file per key under a base directory
/// (`~/.local/state/ritkart/` by default).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default store directory under the XDG state home.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ritkart")?;
        Ok(Self::new(xdg_dirs.get_state_home().join("ritkart")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_err(key: &str, source: io::Error) -> StoreError {
        StoreError::Io { key: key.to_string(), source }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_err(key, e)),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| Self::io_err(key, e))?;
        std::fs::write(self.path_for(key), bytes).map_err(|e| Self::io_err(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_err(key, e)),
        }
    }
}

impl<S: SnapshotStore> SnapshotStore for &S {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).save(key, bytes)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load("nothing").unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save("k", b"[1,2,3]").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some(&b"[1,2,3]"[..]));
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save("k", b"x").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
    }
}
