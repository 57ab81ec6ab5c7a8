//! Snapshot storage backends.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;

use super::error::{PersistenceError, Result};
use super::snapshot::Snapshot;

/// Storage for the single current snapshot.
///
/// `read` returns raw JSON so restore can recover field by field from
/// partially malformed data.
pub trait SnapshotStore {
    /// Persist a complete snapshot, replacing any previous one.
    fn write(&self, snapshot: &Snapshot) -> Result<()>;

    /// Load the stored snapshot, or `None` if nothing was saved.
    fn read(&self) -> Result<Option<Value>>;

    /// Remove the stored snapshot.
    fn clear(&self) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with raw JSON.
    #[must_use]
    pub fn with_value(value: Value) -> Self {
        Self {
            slot: Mutex::new(Some(value)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let value = serde_json::to_value(snapshot)?;
        *self.slot.lock().map_err(|_| PersistenceError::LockPoisoned)? = Some(value);
        Ok(())
    }

    fn read(&self) -> Result<Option<Value>> {
        Ok(self
            .slot
            .lock()
            .map_err(|_| PersistenceError::LockPoisoned)?
            .clone())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().map_err(|_| PersistenceError::LockPoisoned)? = None;
        Ok(())
    }
}

/// Write `bytes` to `path` via a temp file and an atomic rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
        tracing::debug!("Deleted snapshot {}", path.display());
    }
    Ok(())
}

/// JSON file store.
///
/// The snapshot is human-readable and survives catalog changes: restore
/// drops unknown ids instead of failing.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        write_atomic(&self.path, &bytes)?;
        tracing::debug!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        let value = serde_json::from_slice(&bytes)?;
        tracing::debug!("Loaded snapshot from {}", self.path.display());
        Ok(Some(value))
    }

    fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path)
    }
}

/// Bincode file store.
///
/// Compact and fast, but all-or-nothing: a file written by an incompatible
/// build fails to decode as a whole.
#[derive(Clone, Debug)]
pub struct BincodeFileStore {
    path: PathBuf,
}

impl BincodeFileStore {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SnapshotStore for BincodeFileStore {
    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let bytes =
            bincode::serialize(snapshot).map_err(|e| PersistenceError::Bincode(e.to_string()))?;
        write_atomic(&self.path, &bytes)?;
        tracing::debug!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        let snapshot: Snapshot =
            bincode::deserialize(&bytes).map_err(|e| PersistenceError::Bincode(e.to_string()))?;
        tracing::debug!("Loaded snapshot from {}", self.path.display());
        Ok(Some(serde_json::to_value(snapshot)?))
    }

    fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path)
    }
}
