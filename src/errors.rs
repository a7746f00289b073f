/*!
 * Error types for the polymsg library.
 *
 * Callers need to tell a bad request (fix the input) apart from a backend
 * failure (retry later), so every public operation reports a `MessageError`.
 * The storage layer itself works with `anyhow` and is wrapped here at the
 * service boundary.
 */

use std::fmt;
use thiserror::Error;

/// Which store operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    /// Inserting a new message
    Insert,
    /// Reading a single message by id
    Lookup,
    /// Updating an existing message
    Update,
    /// Reading the page of matching messages
    Items,
    /// Counting all matching messages
    Count,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOperation::Insert => write!(f, "insert"),
            StoreOperation::Lookup => write!(f, "lookup"),
            StoreOperation::Update => write!(f, "update"),
            StoreOperation::Items => write!(f, "items"),
            StoreOperation::Count => write!(f, "count"),
        }
    }
}

/// Errors returned by message operations
#[derive(Error, Debug)]
pub enum MessageError {
    /// A request field is malformed or out of range
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// Name of the offending field, as the caller spelled it
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// The message or translation does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store could not be reached or failed unexpectedly
    #[error("Store unavailable during {operation}: {source}")]
    StoreUnavailable {
        /// The read or write that failed
        operation: StoreOperation,
        /// Underlying failure
        #[source]
        source: anyhow::Error,
    },
}

impl MessageError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    pub fn store(operation: StoreOperation, source: anyhow::Error) -> Self {
        Self::StoreUnavailable { operation, source }
    }

    /// True when the caller must change the request rather than retry
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::NotFound(_))
    }

    /// Name of the invalid field, if this is a validation failure
    pub fn invalid_field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result alias for message operations
pub type MessageResult<T> = std::result::Result<T, MessageError>;
