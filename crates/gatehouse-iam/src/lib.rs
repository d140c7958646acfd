//! IAM domain entities for Gatehouse.
//!
//! This crate owns the role-based access-control records and the rules
//! that keep them attachable to valid boundaries:
//!
//! ```text
//! Scope (organization | project)
//!   └── Role                       named bundle of grants
//!         └── RoleGrant            one authorization rule on that role
//! ```
//!
//! A [`RoleGrant`] binds an opaque grant string to a role within an
//! organization or project scope. Its identity is fixed at construction;
//! its attachment is re-verified against live scope state immediately
//! before every write via [`VetForWrite`](gatehouse_db::VetForWrite).
//!
//! # Design Principles
//!
//! - **Validate at the boundary, then again at the write** — constructors
//!   reject bad references up front, and the pre-write vet re-resolves the
//!   owning scope inside the caller's transaction because the scope may
//!   have changed since construction
//! - **Trait contracts here, implementations in consumers** — the
//!   [`Reader`] lookup this crate needs is a trait; storage backends and
//!   in-memory test readers implement it
//! - **Value semantics** — entities are plain owned data; `Clone` yields a
//!   fully independent copy, so instances can cross thread and cache
//!   boundaries without aliasing
//!
//! # Example
//!
//! ```
//! use gatehouse_iam::{Options, Role, RoleGrant, Scope, Scoped};
//!
//! let org = Scope::try_new_organization(Options::new().with_name("acme"))?;
//! let role = Role::try_new(&org, Options::new().with_name("admin"))?;
//! let grant = RoleGrant::try_new(
//!     &org,
//!     &role,
//!     "id=*;type=*;actions=read",
//!     Options::new(),
//! )?;
//!
//! assert_eq!(grant.scope_id(), org.public_id());
//! assert_eq!(grant.role_id(), role.public_id());
//! # Ok::<(), gatehouse_iam::IamError>(())
//! ```

pub mod error;
pub mod options;
pub mod resource;
pub mod role;
pub mod role_grant;
pub mod scope;

pub use error::IamError;
pub use options::Options;
pub use resource::{Action, Resource, ResourceType};
pub use role::Role;
pub use role_grant::{RoleGrant, RoleGrantData, ROLE_GRANT_TABLE};
pub use scope::{lookup_scope, Reader, Scope, Scoped};

// Re-export the scope kind for convenience; it lives in gatehouse-types.
pub use gatehouse_types::ScopeType;
