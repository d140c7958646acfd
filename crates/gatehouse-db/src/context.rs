//! Caller-supplied operation context.
//!
//! A [`Context`] travels with every reader call so lookups stay consistent
//! with the transaction that carries them. It owns no locking and no I/O:
//! it records the caller's cancellation flag and deadline, and reader
//! implementations call [`Context::check`] between operations to honor
//! them.
//!
//! Cancellation and deadline failures surface as [`DbError::Canceled`] and
//! [`DbError::DeadlineExceeded`] and must propagate to the original caller
//! unchanged — swallowing them would detach the lookup from the limits the
//! caller set.
//!
//! # Example
//!
//! ```
//! use gatehouse_db::{Context, DbError};
//!
//! let (ctx, cancel) = Context::background().with_cancel();
//! assert!(ctx.check().is_ok());
//!
//! cancel.cancel();
//! assert!(matches!(ctx.check(), Err(DbError::Canceled)));
//! ```

use crate::DbError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cancellation and deadline state for a unit of persistence work.
///
/// Contexts are cheap to clone; clones observe the same cancellation flag,
/// so a context handed down through a call chain stays answerable to the
/// handle the caller kept.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Context {
    /// Creates a context with no cancellation and no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a derived context that expires at `deadline`.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns a derived context that expires `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a derived context plus the handle that cancels it.
    #[must_use]
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        self.cancel = Some(Arc::clone(&flag));
        (self, CancelHandle(flag))
    }

    /// The deadline, if one is set.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fails if the context has been canceled or its deadline has passed.
    ///
    /// Reader and writer implementations call this between operations.
    /// Cancellation takes precedence over the deadline.
    ///
    /// # Errors
    ///
    /// [`DbError::Canceled`] or [`DbError::DeadlineExceeded`].
    pub fn check(&self) -> Result<(), DbError> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::SeqCst) {
                return Err(DbError::Canceled);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(DbError::DeadlineExceeded);
            }
        }
        Ok(())
    }
}

/// Cancels the [`Context`] it was created with.
///
/// Cloneable; any clone cancels the same context. Cancellation is
/// irreversible.
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Marks the context canceled.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}
