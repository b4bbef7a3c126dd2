use crate::config::ShelfConfig;
use crate::model::{Kind, Record};
use crate::store::{RecordStore, StorageBackend};

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod genres;
pub mod list;
pub mod overview;
pub mod reset;
pub mod show;

/// Open the store for `T`, honoring the `seed-empty` setting.
pub fn open_store<'a, T: Record, B: StorageBackend>(
    backend: &'a B,
    config: &ShelfConfig,
) -> RecordStore<'a, T, B> {
    let store = RecordStore::new(backend);
    if config.seed_empty {
        store
    } else {
        store.without_seed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One collection as shown on the overview.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSummary {
    pub kind: Kind,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub count: usize,
    /// Mean rating, or `None` for an empty collection.
    pub average_rating: Option<f64>,
    /// Set when the collection's slot could not be read.
    pub error: Option<String>,
}

/// Structured outcome of a command. `T` is the record type the command
/// worked on; commands that touch no records use the default `()`.
#[derive(Debug)]
pub struct CmdResult<T = ()> {
    pub affected: Vec<T>,
    pub listed: Vec<T>,
    pub summaries: Vec<CollectionSummary>,
    pub genres: Vec<&'static str>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl<T> Default for CmdResult<T> {
    fn default() -> Self {
        Self {
            affected: Vec::new(),
            listed: Vec::new(),
            summaries: Vec::new(),
            genres: Vec::new(),
            config: None,
            messages: Vec::new(),
        }
    }
}

impl<T> CmdResult<T> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<T>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<T>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_summaries(mut self, summaries: Vec<CollectionSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_genres(mut self, genres: Vec<&'static str>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
