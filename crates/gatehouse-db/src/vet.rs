//! Pre-write vetting contract.
//!
//! # Architecture
//!
//! ```text
//! VetForWrite trait (gatehouse-db)   ← contract definition (THIS MODULE)
//!          │
//!          └── RoleGrant, … (gatehouse-iam)   ← entity impls
//! ```
//!
//! The persistence layer calls [`VetForWrite::vet_for_write`] immediately
//! before every create/update/delete, inside the transaction that carries
//! the write. Entities re-derive their invariants against the reader on
//! every call — nothing is cached from construction time, because the
//! referenced state may have changed since.

use crate::{Context, OpType, WriteOptions};

/// Invariant checking that gates every persistence attempt.
///
/// Generic over the reader type `R` so each domain defines the narrow
/// lookup surface its invariants need, and test doubles implement the same
/// trait the production backend does.
///
/// # Example
///
/// ```
/// use gatehouse_db::{Context, DbError, OpType, VetForWrite, WriteOptions};
///
/// struct Widget {
///     serial: String,
/// }
///
/// trait SerialReader {
///     fn serial_taken(&self, ctx: &Context, serial: &str) -> Result<bool, DbError>;
/// }
///
/// impl<R: SerialReader> VetForWrite<R> for Widget {
///     type Error = DbError;
///
///     fn vet_for_write(
///         &self,
///         ctx: &Context,
///         reader: &R,
///         op: OpType,
///         _opts: &WriteOptions,
///     ) -> Result<(), DbError> {
///         if op == OpType::Create && reader.serial_taken(ctx, &self.serial)? {
///             return Err(DbError::backend("duplicate serial"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait VetForWrite<R: ?Sized> {
    /// The error a failed vet surfaces.
    type Error;

    /// Checks every invariant that must hold before `self` is written.
    ///
    /// Runs inside the caller's transaction: `ctx` and `reader` are the
    /// same handles the surrounding write uses, so lookups observe
    /// in-flight state and cancellation is honored transparently.
    ///
    /// # Errors
    ///
    /// Implementations return their domain error for violated invariants
    /// and propagate reader failures unchanged.
    fn vet_for_write(
        &self,
        ctx: &Context,
        reader: &R,
        op: OpType,
        opts: &WriteOptions,
    ) -> Result<(), Self::Error>;
}
