use crate::commands::{CmdMessage, CmdResult};
use crate::draft::Draft;
use crate::error::Result;
use crate::model::Record;
use crate::store::{RecordStore, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(
    store: &mut RecordStore<'_, T, B>,
    draft: &Draft,
) -> Result<CmdResult<T>> {
    let record = T::from_draft(draft)?;
    let id = store.upsert(record)?.id();

    let mut result = CmdResult::default();
    if let Some(stored) = store.get_by_id(id).cloned() {
        result.add_message(CmdMessage::success(format!(
            "{} added (#{}): {}",
            T::KIND,
            id,
            stored.title()
        )));
        result.affected.push(stored);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::Book;
    use crate::store::mem_backend::MemBackend;

    fn dune() -> Draft {
        Draft {
            title: Some("Dune".into()),
            year: Some(1965),
            rating: Some(4.5),
            genre: Some(vec!["science fiction".into()]),
            description: Some("Spice.".into()),
            link: Some("https://www.bol.com/nl/nl/p/dune/".into()),
            author: Some("Frank Herbert".into()),
            ..Draft::default()
        }
    }

    #[test]
    fn appends_with_next_id() {
        let backend = MemBackend::new();
        let mut store: RecordStore<Book, _> = RecordStore::new(&backend);
        store.load().unwrap();
        let expected = store.next_id();
        let before = store.len();

        let result = run(&mut store, &dune()).unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].id, expected);
        assert_eq!(result.affected[0].genre, vec!["Science Fiction".to_string()]);
        assert_eq!(store.len(), before + 1);
        assert!(result.messages[0].content.starts_with("Book added"));
    }

    #[test]
    fn invalid_draft_writes_nothing() {
        let backend = MemBackend::new();
        let mut store: RecordStore<Book, _> = RecordStore::new(&backend).without_seed();
        let draft = Draft {
            rating: Some(7.0),
            ..dune()
        };

        let err = run(&mut store, &draft).unwrap_err();
        assert!(matches!(err, ShelfError::Validation(_)));
        assert_eq!(backend.write_count(), 0);
    }
}
