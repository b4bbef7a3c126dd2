//! # Storage Layer
//!
//! Every collection lives in a **durable slot**: a named location holding one
//! JSON array of records. The slot is always rewritten wholesale; there is no
//! incremental patching, no compaction and no version field.
//!
//! ## Split of Responsibilities
//!
//! - [`StorageBackend`] handles the "how": reading and atomically writing raw
//!   slot contents (filesystem vs memory).
//! - [`RecordStore`] handles the "what": load-or-seed, id assignment, upsert,
//!   delete and lookup, generic over the [`Record`](crate::model::Record) type.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<slot>.json` file per collection.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── movies.json     # Movie records
//! ├── series.json     # Series records
//! ├── books.json      # Book records
//! └── config.json     # Client configuration
//! ```

use crate::error::Result;
use crate::model::Kind;
use std::path::PathBuf;
use tracing::info;

pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use record_store::{RecordStore, Upsert};

/// Abstract interface for raw slot I/O.
///
/// All methods take `&self`: backends are either stateless file I/O or use
/// interior mutability, so several stores can share one backend.
pub trait StorageBackend {
    /// Read the raw content of a slot.
    /// Returns Ok(None) if the slot does not exist.
    fn read_slot(&self, slot: &str) -> Result<Option<String>>;

    /// Replace the content of a slot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, slot: &str, content: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn clear_slot(&self, slot: &str) -> Result<()>;

    /// Location of the slot. For FsBackend this is the real file path,
    /// for MemBackend a virtual one.
    fn slot_path(&self, slot: &str) -> PathBuf;
}

/// Clear the slots of every kind. Each collection re-seeds on its next load.
pub fn clear_all<B: StorageBackend>(backend: &B) -> Result<()> {
    for kind in Kind::ALL {
        backend.clear_slot(kind.slot())?;
    }
    info!("cleared all collections");
    Ok(())
}
