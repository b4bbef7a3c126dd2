use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::model::Record;
use crate::store::{RecordStore, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(
    store: &mut RecordStore<'_, T, B>,
    id: u64,
) -> Result<CmdResult<T>> {
    store.load()?;
    let record = store
        .get_by_id(id)
        .cloned()
        .ok_or(ShelfError::NotFound { kind: T::KIND, id })?;
    Ok(CmdResult::default().with_listed(vec![record]))
}
