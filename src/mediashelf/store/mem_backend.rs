use super::StorageBackend;
use crate::error::{Result, ShelfError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since mediashelf is single-threaded,
/// which lets the `StorageBackend` trait use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot with raw content.
    pub fn with_slot(self, slot: &str, content: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), content.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful slot writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn write_slot(&self, slot: &str, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn clear_slot(&self, slot: &str) -> Result<()> {
        self.slots.borrow_mut().remove(slot);
        Ok(())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}.json", slot))
    }
}
