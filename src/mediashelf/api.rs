//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for mediashelf operations, whatever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Opens stores** per call, honoring the `seed-empty` setting
//! - **Returns structured types** (`Result<CmdResult<T>>`)
//!
//! It does no business logic, no I/O beyond the backend and no formatting.
//!
//! ## Generic Over the Backend and the Record Kind
//!
//! `ShelfApi<B: StorageBackend>` owns the backend:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`
//!
//! Record-level methods are generic over `T: Record`, so
//! `api.list::<Movie>(..)` and `api.list::<Book>(..)` share one code path.
//!
//! Every call opens a fresh [`RecordStore`](crate::store::RecordStore), which
//! loads the slot on first use. There is no cache between calls.

use crate::commands::{self, open_store, CmdResult};
use crate::config::ShelfConfig;
use crate::confirm::ConfirmOptions;
use crate::draft::Draft;
use crate::error::Result;
use crate::filter::FilterableCollection;
use crate::model::{Kind, Record};
use crate::store::{RecordStore, StorageBackend};
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CollectionSummary, MessageLevel};

pub struct ShelfApi<B: StorageBackend> {
    backend: B,
    config: ShelfConfig,
    config_dir: PathBuf,
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn new(backend: B, config: ShelfConfig, config_dir: PathBuf) -> Self {
        Self {
            backend,
            config,
            config_dir,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn store<T: Record>(&self) -> RecordStore<'_, T, B> {
        open_store(&self.backend, &self.config)
    }

    pub fn overview(&self) -> Result<CmdResult> {
        commands::overview::run(&self.backend, &self.config)
    }

    pub fn list<T: Record>(&self, view: &FilterableCollection) -> Result<CmdResult<T>> {
        commands::list::run(&mut self.store::<T>(), view)
    }

    pub fn show<T: Record>(&self, id: u64) -> Result<CmdResult<T>> {
        commands::show::run(&mut self.store::<T>(), id)
    }

    pub fn add<T: Record>(&mut self, draft: &Draft) -> Result<CmdResult<T>> {
        commands::add::run(&mut self.store::<T>(), draft)
    }

    pub fn edit<T: Record>(&mut self, id: u64, draft: &Draft) -> Result<CmdResult<T>> {
        commands::edit::run(&mut self.store::<T>(), id, draft)
    }

    pub fn delete_confirmation<T: Record>(&self, id: u64) -> Result<ConfirmOptions> {
        commands::delete::confirmation(&mut self.store::<T>(), id)
    }

    pub fn delete<T: Record>(&mut self, id: u64) -> Result<CmdResult<T>> {
        commands::delete::run(&mut self.store::<T>(), id)
    }

    pub fn genres(&self, kind: Kind) -> CmdResult {
        commands::genres::run(kind)
    }

    pub fn reset_confirmation(&self) -> ConfirmOptions {
        commands::reset::confirmation()
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&self.backend)
    }

    /// Show or change configuration. A successful `Set` also updates the
    /// settings this instance uses for later calls.
    pub fn config_action(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}
