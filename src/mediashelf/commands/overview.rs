//! The landing view: one summary per collection.
//!
//! A corrupt slot does not hide the other collections: its summary carries
//! the error and a warning points at `mediashelf reset`. Any other failure
//! aborts the view.

use crate::commands::{open_store, CmdMessage, CmdResult, CollectionSummary};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::model::{Book, Kind, Movie, Record, Series};
use crate::store::StorageBackend;
use tracing::warn;

pub fn run<B: StorageBackend>(backend: &B, config: &ShelfConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let summaries = vec![
        summarize::<Movie, B>(backend, config, &mut result)?,
        summarize::<Series, B>(backend, config, &mut result)?,
        summarize::<Book, B>(backend, config, &mut result)?,
    ];
    Ok(result.with_summaries(summaries))
}

fn summarize<T: Record, B: StorageBackend>(
    backend: &B,
    config: &ShelfConfig,
    result: &mut CmdResult,
) -> Result<CollectionSummary> {
    let mut store = open_store::<T, B>(backend, config);
    let records = match store.load() {
        Ok(records) => records,
        Err(err @ ShelfError::CorruptSlot { .. }) => {
            warn!(slot = T::KIND.slot(), error = %err, "skipping unreadable collection");
            result.add_message(CmdMessage::warning(format!(
                "{}. Run `mediashelf reset` to restore the samples.",
                err
            )));
            return Ok(CollectionSummary {
                kind: T::KIND,
                heading: heading(T::KIND),
                blurb: blurb(T::KIND),
                count: 0,
                average_rating: None,
                error: Some(err.to_string()),
            });
        }
        Err(err) => return Err(err),
    };

    let average_rating = if records.is_empty() {
        None
    } else {
        let total: f64 = records.iter().map(Record::rating).sum();
        Some(total / records.len() as f64)
    };

    Ok(CollectionSummary {
        kind: T::KIND,
        heading: heading(T::KIND),
        blurb: blurb(T::KIND),
        count: records.len(),
        average_rating,
        error: None,
    })
}

fn heading(kind: Kind) -> &'static str {
    match kind {
        Kind::Movie => "Movies",
        Kind::Series => "TV Series",
        Kind::Book => "Books",
    }
}

fn blurb(kind: Kind) -> &'static str {
    match kind {
        Kind::Movie => "Browse your movie collection",
        Kind::Series => "Check out your favorite shows",
        Kind::Book => "Explore your reading list",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;
    use crate::store::RecordStore;

    #[test]
    fn summarizes_every_kind_in_order() {
        let backend = MemBackend::new();
        let result = run(&backend, &ShelfConfig::default()).unwrap();

        let kinds: Vec<Kind> = result.summaries.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, Kind::ALL.to_vec());
        for summary in &result.summaries {
            let seeds: Vec<serde_json::Value> =
                serde_json::from_str(summary.kind.seed_json()).unwrap();
            assert_eq!(summary.count, seeds.len());
            assert!(summary.average_rating.is_some());
        }
    }

    #[test]
    fn unseeded_collections_are_empty() {
        let backend = MemBackend::new();
        let config = ShelfConfig {
            seed_empty: false,
            ..ShelfConfig::default()
        };
        let result = run(&backend, &config).unwrap();

        assert!(result.summaries.iter().all(|s| s.count == 0));
        assert!(result.summaries.iter().all(|s| s.average_rating.is_none()));
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn average_follows_stored_ratings() {
        let backend = MemBackend::new();
        let config = ShelfConfig {
            seed_empty: false,
            ..ShelfConfig::default()
        };
        let mut books = RecordStore::<Book, _>::new(&backend).without_seed();
        books.upsert(fixtures::book("Dune")).unwrap();
        let mut second = fixtures::book("Hyperion");
        second.rating = 3.5;
        books.upsert(second).unwrap();

        let result = run(&backend, &config).unwrap();
        let summary = &result.summaries[2];
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average_rating, Some(4.0));
    }

    #[test]
    fn corrupt_slot_is_reported_per_collection() {
        let backend = MemBackend::new().with_slot("books", "{bad");
        let result = run(&backend, &ShelfConfig::default()).unwrap();

        let movies = &result.summaries[0];
        assert!(movies.error.is_none());
        assert!(movies.count > 0);

        let books = &result.summaries[2];
        assert_eq!(books.count, 0);
        assert!(books
            .error
            .as_deref()
            .is_some_and(|e| e.contains("Collection 'books' is corrupt")));

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("mediashelf reset"));
        assert_eq!(backend.read_slot("books").unwrap().as_deref(), Some("{bad"));
    }
}
