//! Snapshot persistence.
//!
//! The engine does not depend on storage. This module defines the snapshot
//! shape, the stores that hold it, the lenient restore path, and a
//! `Session` that writes a snapshot after every applied command.
//!
//! - `snapshot`: `Snapshot` and its conversions
//! - `restore`: Field-by-field recovery from raw JSON
//! - `store`: `SnapshotStore` with memory, JSON-file and bincode-file backends
//! - `session`: Auto-saving engine wrapper

mod error;
mod restore;
mod session;
mod snapshot;
mod store;

pub use error::{PersistenceError, Result};
pub use restore::restore_state;
pub use session::Session;
pub use snapshot::Snapshot;
pub use store::{BincodeFileStore, JsonFileStore, MemoryStore, SnapshotStore};
