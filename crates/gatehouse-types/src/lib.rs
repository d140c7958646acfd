//! Shared primitives for Gatehouse.
//!
//! This crate sits at the bottom of the dependency graph and carries the
//! vocabulary every other Gatehouse crate agrees on: public identifiers,
//! scope kinds, and the unified error-code interface.
//!
//! # Crate Architecture
//!
//! ```text
//! gatehouse-types  (PublicId entropy, ScopeType, ErrorCode)  ◄── THIS CRATE
//!       ↑
//! gatehouse-db     (Context, OpType, VetForWrite, DbError)
//!       ↑
//! gatehouse-iam    (Scope, Role, RoleGrant)
//! ```
//!
//! # Design Principles
//!
//! - **No I/O, no runtime** — everything here is plain data plus the OS
//!   entropy source for identifier generation
//! - **Closed kind sets** — [`ScopeType`] is the complete scope taxonomy;
//!   new kinds are an API change, not a runtime discovery
//! - **Errors are values** — every failure is returned, none are logged
//!   and swallowed; [`ErrorCode`] gives each one a stable machine code

pub mod error;
pub mod id;
pub mod scope;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::{random_id, IdError, PUBLIC_ID_LEN};
pub use scope::{ParseScopeTypeError, ScopeType};
