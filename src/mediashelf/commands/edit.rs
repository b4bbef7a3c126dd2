use crate::commands::{CmdMessage, CmdResult};
use crate::draft::Draft;
use crate::error::{Result, ShelfError};
use crate::model::Record;
use crate::store::{RecordStore, StorageBackend, Upsert};

/// Apply `draft` to the record with `id` and store the result as a full
/// replacement.
pub fn run<T: Record, B: StorageBackend>(
    store: &mut RecordStore<'_, T, B>,
    id: u64,
    draft: &Draft,
) -> Result<CmdResult<T>> {
    store.load()?;
    let mut record = store
        .get_by_id(id)
        .cloned()
        .ok_or(ShelfError::NotFound { kind: T::KIND, id })?;

    let mut result = CmdResult::default();
    if draft.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result.with_affected(vec![record]));
    }

    record.apply_draft(draft)?;
    match store.upsert(record.clone())? {
        Upsert::Unmatched(id) => {
            result.add_message(CmdMessage::warning(format!(
                "{} #{} no longer exists, nothing was saved",
                T::KIND,
                id
            )));
        }
        Upsert::Inserted(_) | Upsert::Replaced(_) => {
            result.add_message(CmdMessage::success(format!(
                "{} updated (#{}): {}",
                T::KIND,
                id,
                record.title()
            )));
            result.affected.push(record);
        }
    }
    Ok(result)
}
