use crate::commands::{CmdMessage, CmdResult};
use crate::draft::canonical;
use crate::error::Result;
use crate::filter::FilterableCollection;
use crate::model::Record;
use crate::store::{RecordStore, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(
    store: &mut RecordStore<'_, T, B>,
    view: &FilterableCollection,
) -> Result<CmdResult<T>> {
    if let Some(genre) = view.genre() {
        canonical(T::KIND, genre)?;
    }

    let records = store.load()?;
    let visible: Vec<T> = view.visible(records).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if visible.is_empty() {
        if view.is_active() {
            result.add_message(CmdMessage::info(format!(
                "No {} match the current search.",
                T::KIND.slot()
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "No {} in the collection yet.",
                T::KIND.slot()
            )));
        }
    }

    Ok(result.with_listed(visible))
}
