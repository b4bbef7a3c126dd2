use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::ConfirmOptions;
use crate::error::{Result, ShelfError};
use crate::model::Record;
use crate::store::{RecordStore, StorageBackend};

/// What the user is asked before the record with `id` is deleted.
pub fn confirmation<T: Record, B: StorageBackend>(
    store: &mut RecordStore<'_, T, B>,
    id: u64,
) -> Result<ConfirmOptions> {
    store.load()?;
    let record = store
        .get_by_id(id)
        .ok_or(ShelfError::NotFound { kind: T::KIND, id })?;

    Ok(ConfirmOptions::default()
        .with_title("Confirm Delete")
        .with_message(format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            record.title()
        ))
        .with_confirm_label("Delete"))
}

pub fn run<T: Record, B: StorageBackend>(
    store: &mut RecordStore<'_, T, B>,
    id: u64,
) -> Result<CmdResult<T>> {
    let removed = store
        .delete(id)?
        .ok_or(ShelfError::NotFound { kind: T::KIND, id })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} deleted (#{}): {}",
        T::KIND,
        id,
        removed.title()
    )));
    Ok(result.with_affected(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::model::Series;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn confirmation_names_the_record() {
        let backend = MemBackend::new();
        let mut store: RecordStore<Series, _> = RecordStore::new(&backend).with_seed(Vec::new());
        store.upsert(fixtures::series("The Wire")).unwrap();

        let options = confirmation(&mut store, 1).unwrap();
        assert_eq!(options.title, "Confirm Delete");
        assert_eq!(
            options.message,
            "Are you sure you want to delete \"The Wire\"? This action cannot be undone."
        );
        assert_eq!(options.confirm_label, "Delete");
        assert_eq!(options.cancel_label, "Cancel");
    }

    #[test]
    fn confirmation_for_unknown_id_fails() {
        let backend = MemBackend::new();
        let mut store: RecordStore<Series, _> = RecordStore::new(&backend);
        assert!(matches!(
            confirmation(&mut store, 77),
            Err(ShelfError::NotFound { id: 77, .. })
        ));
    }

    #[test]
    fn removes_record() {
        let backend = MemBackend::new();
        let mut store: RecordStore<Series, _> = RecordStore::new(&backend).with_seed(Vec::new());
        store.upsert(fixtures::series("The Wire")).unwrap();
        store.upsert(fixtures::series("Fargo")).unwrap();

        let result = run(&mut store, 1).unwrap();
        assert_eq!(result.affected[0].title, "The Wire");
        assert_eq!(store.len(), 1);
        assert!(store.get_by_id(1).is_none());
    }

    #[test]
    fn unknown_id_is_not_found_and_writes_nothing() {
        let backend = MemBackend::new();
        let mut store: RecordStore<Series, _> = RecordStore::new(&backend);
        store.load().unwrap();
        let writes = backend.write_count();

        assert!(run(&mut store, 999).is_err());
        assert_eq!(backend.write_count(), writes);
    }
}
