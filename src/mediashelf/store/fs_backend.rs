use super::StorageBackend;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one `<slot>.json` file per collection under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_file(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_file(slot);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        Ok(Some(content))
    }

    fn write_slot(&self, slot: &str, content: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_file = self.root.join(format!(".{}-{}.tmp", slot, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp_file, self.slot_file(slot)).map_err(ShelfError::Io)?;

        Ok(())
    }

    fn clear_slot(&self, slot: &str) -> Result<()> {
        let path = self.slot_file(slot);
        if path.exists() {
            fs::remove_file(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.slot_file(slot)
    }
}
