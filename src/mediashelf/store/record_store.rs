//! # RecordStore: One Collection, One Slot
//!
//! A [`RecordStore`] is the single source of truth for one kind's collection.
//! It keeps the records in memory and mirrors every change to the kind's
//! durable slot.
//!
//! ## Lifecycle
//!
//! ```text
//! unloaded ──load()──▶ loaded
//! ```
//!
//! The transition happens once per instance, on the first call to [`load`]
//! or on the first mutation. There is no way back to `unloaded`.
//!
//! On load, an absent slot is seeded: the seed records are written to the
//! slot and adopted as the current state. A present slot is parsed as a JSON
//! array; if that fails, or a stored record has no id (id 0), `load` returns
//! [`ShelfError::CorruptSlot`] and the store stays unloaded. An empty or
//! whitespace-only slot counts as absent.
//!
//! ## Ids
//!
//! Records with `id == 0` are new. On upsert they get `max(existing ids) + 1`
//! (or 1 for an empty collection). This is not a persistent counter: after
//! deleting the record with the highest id, the next insert reuses that id.
//!
//! ## Writes
//!
//! Every effective mutation rewrites the whole slot. The slot is written
//! first and the in-memory list is swapped afterwards, so a failed write
//! leaves both unchanged. Mutations that change nothing (unmatched upsert,
//! delete of an absent id) do not touch the slot.
//!
//! [`load`]: RecordStore::load

use super::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::Record;
use tracing::{debug, info, warn};

/// What an [`RecordStore::upsert`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new record was appended with this id.
    Inserted(u64),
    /// The record with this id was replaced.
    Replaced(u64),
    /// No record has this (non-zero) id; nothing changed.
    Unmatched(u64),
}

impl Upsert {
    pub fn id(&self) -> u64 {
        match self {
            Upsert::Inserted(id) | Upsert::Replaced(id) | Upsert::Unmatched(id) => *id,
        }
    }
}

enum Seed<T> {
    Bundled,
    Given(Vec<T>),
    Disabled,
}

pub struct RecordStore<'a, T: Record, B: StorageBackend> {
    backend: &'a B,
    seed: Seed<T>,
    records: Vec<T>,
    loaded: bool,
}

impl<'a, T: Record, B: StorageBackend> RecordStore<'a, T, B> {
    /// A store that seeds from the kind's bundled sample set.
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            seed: Seed::Bundled,
            records: Vec::new(),
            loaded: false,
        }
    }

    /// Seed an absent slot with `records` instead of the bundled samples.
    pub fn with_seed(mut self, records: Vec<T>) -> Self {
        self.seed = Seed::Given(records);
        self
    }

    /// Leave an absent slot absent and start from an empty collection.
    pub fn without_seed(mut self) -> Self {
        self.seed = Seed::Disabled;
        self
    }

    pub fn slot(&self) -> &'static str {
        T::KIND.slot()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load the collection from its slot, seeding the slot if it is absent.
    ///
    /// Loading an already loaded store returns the current records without
    /// reading the slot again.
    pub fn load(&mut self) -> Result<&[T]> {
        if self.loaded {
            return Ok(&self.records);
        }

        let slot = self.slot();
        let stored = self
            .backend
            .read_slot(slot)?
            .filter(|raw| !raw.trim().is_empty());

        self.records = match stored {
            Some(raw) => {
                let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| {
                    ShelfError::CorruptSlot {
                        slot: slot.to_string(),
                        source,
                    }
                })?;
                if let Some(pos) = records.iter().position(|r| r.id() == 0) {
                    return Err(ShelfError::CorruptSlot {
                        slot: slot.to_string(),
                        source: serde::de::Error::custom(format!(
                            "record at position {} has no id",
                            pos
                        )),
                    });
                }
                debug!(slot, count = records.len(), "loaded collection");
                records
            }
            None => self.seed_slot()?,
        };
        self.loaded = true;
        Ok(&self.records)
    }

    fn seed_slot(&self) -> Result<Vec<T>> {
        let slot = self.slot();
        let records: Vec<T> = match &self.seed {
            Seed::Bundled => serde_json::from_str(T::KIND.seed_json())?,
            Seed::Given(records) => records.clone(),
            Seed::Disabled => {
                debug!(slot, "slot is empty and seeding is disabled");
                return Ok(Vec::new());
            }
        };
        self.persist(&records)?;
        debug!(slot, count = records.len(), "seeded empty slot");
        Ok(records)
    }

    /// The current records, in storage order. Empty until loaded.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id in the in-memory state.
    pub fn get_by_id(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// The id the next inserted record will receive.
    pub fn next_id(&self) -> u64 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Insert a new record (`id == 0`) or replace the one with the same id.
    ///
    /// Replacement is a full swap of the stored record, not a field merge.
    /// A non-zero id that matches nothing leaves the collection unchanged and
    /// returns [`Upsert::Unmatched`].
    pub fn upsert(&mut self, mut record: T) -> Result<Upsert> {
        self.ensure_loaded()?;

        if record.id() == 0 {
            let id = self.next_id();
            record.set_id(id);
            let mut next = self.records.clone();
            next.push(record);
            self.commit(next)?;
            info!(slot = self.slot(), id, "inserted record");
            return Ok(Upsert::Inserted(id));
        }

        let id = record.id();
        match self.records.iter().position(|r| r.id() == id) {
            Some(pos) => {
                let mut next = self.records.clone();
                next[pos] = record;
                self.commit(next)?;
                info!(slot = self.slot(), id, "replaced record");
                Ok(Upsert::Replaced(id))
            }
            None => {
                warn!(slot = self.slot(), id, "upsert matched no record");
                Ok(Upsert::Unmatched(id))
            }
        }
    }

    /// Remove the record with the given id, returning it.
    /// Deleting an absent id is a no-op returning `None`.
    pub fn delete(&mut self, id: u64) -> Result<Option<T>> {
        self.ensure_loaded()?;

        let Some(pos) = self.records.iter().position(|r| r.id() == id) else {
            debug!(slot = self.slot(), id, "delete matched no record");
            return Ok(None);
        };

        let mut next = self.records.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        info!(slot = self.slot(), id, "deleted record");
        Ok(Some(removed))
    }

    fn ensure_loaded(&mut self) -> Result<()> {
        if !self.loaded {
            self.load()?;
        }
        Ok(())
    }

    fn commit(&mut self, next: Vec<T>) -> Result<()> {
        self.persist(&next)?;
        self.records = next;
        Ok(())
    }

    fn persist(&self, records: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(ShelfError::Serialization)?;
        self.backend.write_slot(self.slot(), &content)?;
        debug!(slot = self.slot(), count = records.len(), "persisted collection");
        Ok(())
    }
}
