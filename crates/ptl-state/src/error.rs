/// Errors from state substrate operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The backing substrate refused or failed the request.
    #[error("state substrate unavailable: {0}")]
    Unavailable(String),

    /// A lock guarding in-process state was poisoned by a panicking writer.
    #[error("state lock poisoned")]
    LockPoisoned,

    /// I/O error from a file-backed substrate.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted snapshot could not be read or written.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for state operations.
pub type StateResult<T> = Result<T, StateError>;
