//! Persistence vocabulary for Gatehouse.
//!
//! This crate defines the words the domain layer and the persistence layer
//! use to talk to each other. It contains no storage implementation: actual
//! readers and writers live with their backends, and the domain crates only
//! ever see these contracts.
//!
//! # Crate Architecture
//!
//! ```text
//! gatehouse-types
//!       ↑
//! gatehouse-db     (Context, OpType, WriteOptions, VetForWrite, DbError)  ◄── THIS CRATE
//!       ↑
//! gatehouse-iam    (entities implement VetForWrite; resolver consumes Context)
//! ```
//!
//! # Design Principles
//!
//! - **Trait definitions here, implementations in consumers** — backends and
//!   test doubles implement the contracts; the core never links a database
//! - **The caller owns the transaction** — a [`Context`] and reader handle
//!   are passed through unchanged; this crate opens and closes nothing
//! - **Vet before every write** — [`VetForWrite`] runs inside the caller's
//!   transaction so invariants are checked against in-flight state

pub mod context;
pub mod error;
pub mod op;
pub mod vet;

pub use context::{CancelHandle, Context};
pub use error::DbError;
pub use op::{OpType, WriteOptions};
pub use vet::VetForWrite;
