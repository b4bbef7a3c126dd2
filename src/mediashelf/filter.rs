//! # Filtering Collections
//!
//! [`filter_by_title`] is the search behind every collection listing: an
//! empty query keeps everything, otherwise a record is kept when its title,
//! lowercased, contains the lowercased query. There is no tokenization, fuzzy
//! matching or ranking, and the input order is preserved.
//!
//! [`FilterableCollection`] holds the transient search state of a listing
//! (the query and an optional genre) and derives the visible subset from a
//! list of records. It never caches: every call to
//! [`visible`](FilterableCollection::visible) recomputes from its inputs, and
//! the input is never mutated.

use crate::model::Record;

/// Records whose title contains `query`, ignoring case. An empty query keeps
/// every record.
pub fn filter_by_title<'a, T: Record>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title().to_lowercase().contains(&needle))
        .collect()
}

/// Records tagged with `genre`, ignoring case.
pub fn filter_by_genre<'a, T, I>(items: I, genre: &str) -> Vec<&'a T>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let genre = genre.trim();
    items
        .into_iter()
        .filter(|item| item.genre().iter().any(|g| g.eq_ignore_ascii_case(genre)))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterableCollection {
    query: String,
    genre: Option<String>,
}

impl FilterableCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.set_genre(Some(genre.into()));
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// A blank genre clears the genre predicate.
    pub fn set_genre(&mut self, genre: Option<String>) {
        self.genre = genre.filter(|g| !g.trim().is_empty());
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.genre = None;
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.genre.is_some()
    }

    /// The records passing the title query and, if set, the genre predicate.
    pub fn visible<'a, T: Record>(&self, items: &'a [T]) -> Vec<&'a T> {
        let by_title = filter_by_title(items, &self.query);
        match &self.genre {
            None => by_title,
            Some(genre) => filter_by_genre(by_title, genre),
        }
    }
}
