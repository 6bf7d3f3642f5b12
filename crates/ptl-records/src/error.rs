use ptl_state::StateError;

/// Errors produced by record operations.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The state substrate failed a get or put.
    #[error("store error: {0}")]
    Store(#[from] StateError),

    /// The value stored under a key is not a valid record collection.
    #[error("corrupt record at key {key:?}: {reason}")]
    CorruptRecord { key: String, reason: String },

    /// A collection could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for record operations.
pub type RecordResult<T> = Result<T, RecordError>;
