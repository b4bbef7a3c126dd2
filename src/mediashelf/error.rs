use crate::model::Kind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("{kind} #{id} not found")]
    NotFound { kind: Kind, id: u64 },

    #[error("Collection '{slot}' is corrupt: {source}")]
    CorruptSlot {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
