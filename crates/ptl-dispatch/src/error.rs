use std::fmt;

use ptl_records::RecordError;
use ptl_state::StateError;

use crate::operation::Namespace;

/// Errors returned from the dispatcher entry points.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Wrong number of arguments for a recognized operation.
    #[error("incorrect number of arguments for '{operation}': expected {expected}, got {actual}")]
    InvalidArguments {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No operation with this name exists in the namespace that was called.
    #[error("unknown {namespace} operation: '{name}'")]
    UnknownOperation { namespace: Namespace, name: String },

    /// The state substrate failed a get or put.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] StateError),

    /// The value under a key could not be decoded as a record collection.
    #[error("corrupt record at key {key:?}: {reason}")]
    CorruptRecord { key: String, reason: String },

    /// A collection could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification of a [`DispatchError`] for hosts that only need to
/// branch on the failure class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArguments,
    UnknownOperation,
    StoreUnavailable,
    CorruptRecord,
    Internal,
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArguments { .. } => ErrorKind::InvalidArguments,
            Self::UnknownOperation { .. } => ErrorKind::UnknownOperation,
            Self::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            Self::CorruptRecord { .. } => ErrorKind::CorruptRecord,
            Self::Serialization(_) => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidArguments => "invalid-arguments",
            Self::UnknownOperation => "unknown-operation",
            Self::StoreUnavailable => "store-unavailable",
            Self::CorruptRecord => "corrupt-record",
            Self::Internal => "internal",
        };
        f.write_str(s)
    }
}

impl From<StateError> for DispatchError {
    fn from(e: StateError) -> Self {
        Self::StoreUnavailable(e)
    }
}

impl From<RecordError> for DispatchError {
    fn from(e: RecordError) -> Self {
        match e {
            RecordError::Store(inner) => Self::StoreUnavailable(inner),
            RecordError::CorruptRecord { key, reason } => Self::CorruptRecord { key, reason },
            RecordError::Serialization(msg) => Self::Serialization(msg),
        }
    }
}

/// Result alias for dispatcher operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_errors_map_to_dispatch_kinds() {
        let e: DispatchError = RecordError::Store(StateError::LockPoisoned).into();
        assert_eq!(e.kind(), ErrorKind::StoreUnavailable);

        let e: DispatchError = RecordError::CorruptRecord {
            key: "P1".into(),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::CorruptRecord);

        let e: DispatchError = RecordError::Serialization("x".into()).into();
        assert_eq!(e.kind(), ErrorKind::Internal);
    }

    #[test]
    fn messages_name_the_operation() {
        let e = DispatchError::InvalidArguments {
            operation: "write",
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            e.to_string(),
            "incorrect number of arguments for 'write': expected 4, got 3"
        );

        let e = DispatchError::UnknownOperation {
            namespace: Namespace::Query,
            name: "bogus".into(),
        };
        assert_eq!(e.to_string(), "unknown query operation: 'bogus'");
    }
}
