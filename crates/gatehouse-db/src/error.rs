//! Persistence error types.

use gatehouse_types::ErrorCode;
use thiserror::Error;

/// Errors surfaced by readers, writers, and the [`Context`](crate::Context).
///
/// These are the persistence layer's words: the domain layer propagates
/// them unchanged so the original cause stays inspectable by the caller.
#[derive(Debug, Error)]
pub enum DbError {
    /// No record with the given identity exists.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The caller canceled the operation.
    #[error("operation canceled by caller")]
    Canceled,

    /// The context's deadline passed before the operation completed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// The backing store failed.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl DbError {
    /// Creates a `NotFound` error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Creates a `Backend` error.
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend(reason.into())
    }
}

impl ErrorCode for DbError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "DB_NOT_FOUND",
            Self::Canceled => "DB_CANCELED",
            Self::DeadlineExceeded => "DB_DEADLINE_EXCEEDED",
            Self::Backend(_) => "DB_BACKEND",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // The record may exist after the caller creates it.
            Self::NotFound(_) => true,
            // Cancellation is a caller decision, not a retry candidate.
            Self::Canceled => false,
            Self::DeadlineExceeded | Self::Backend(_) => true,
        }
    }
}
