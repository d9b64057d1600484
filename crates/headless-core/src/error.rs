//! Content-level error types.

use thiserror::Error;

use crate::ports::Operation;

/// Errors surfaced by a [`crate::ports::ContentSource`].
///
/// Transport, status and decoding failures all collapse into `FetchFailed` so
/// callers never depend on the HTTP stack underneath. A lookup that finds
/// nothing is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to fetch {operation}: {reason}")]
    FetchFailed {
        operation: Operation,
        reason: String,
    },

    #[error("Invalid content source configuration: {0}")]
    InvalidConfig(String),
}

impl ContentError {
    pub fn fetch_failed(operation: Operation, reason: impl ToString) -> Self {
        ContentError::FetchFailed {
            operation,
            reason: reason.to_string(),
        }
    }

    /// The operation that failed, if this is a fetch failure.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ContentError::FetchFailed { operation, .. } => Some(*operation),
            ContentError::InvalidConfig(_) => None,
        }
    }
}
