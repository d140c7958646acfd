//! IAM error type.
//!
//! [`IamError`] covers the three failure layers of this crate:
//!
//! ```text
//! construction / pre-write invariants     scope resolution       identity
//!                │                              │                   │
//!          validation variants          ScopeNotFound / Db      PublicId
//! ```
//!
//! Validation failures are surfaced verbatim and never retried
//! automatically. Resolver failures pass through [`IamError::Db`]
//! transparently so the original [`DbError`] stays inspectable.

use crate::ResourceType;
use gatehouse_db::DbError;
use gatehouse_types::{ErrorCode, IdError, ScopeType};
use thiserror::Error;

/// Errors from IAM entity construction, resolution, and vetting.
#[derive(Debug, Error)]
pub enum IamError {
    /// A grant was created in, or resolved to, a scope of the wrong kind.
    #[error("role grants can only be in an organization or project scope, got {found}")]
    InvalidGrantScope {
        /// The kind the scope actually had.
        found: ScopeType,
    },

    /// A role was created in a scope of the wrong kind.
    #[error("roles can only be in an organization or project scope, got {found}")]
    InvalidRoleScope {
        /// The kind the scope actually had.
        found: ScopeType,
    },

    /// The referenced role has no public id.
    #[error("role id is unset")]
    MissingRoleId,

    /// The grant's own public id is empty at write time.
    #[error("public id is empty for grant write")]
    MissingPublicId,

    /// The grant's scope id is empty at write time.
    #[error("scope id is not set for grant write")]
    MissingScopeId,

    /// The owning scope does not exist.
    #[error("scope {scope_id} not found")]
    ScopeNotFound {
        /// The id that failed to resolve.
        scope_id: String,
    },

    /// The identity source failed while allocating a public id.
    #[error("error generating public id for new {resource}")]
    PublicId {
        /// The entity kind being constructed.
        resource: ResourceType,
        #[source]
        source: IdError,
    },

    /// Resolver or persistence failure, passed through unchanged.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl IamError {
    /// Returns the taxonomy layer that produced the error.
    ///
    /// `"validation"` — structural or referential precondition violated;
    /// `"identity"` — public id generation failed;
    /// `"resolution"` — the scope lookup failed or found nothing.
    #[must_use]
    pub fn layer(&self) -> &'static str {
        match self {
            Self::InvalidGrantScope { .. }
            | Self::InvalidRoleScope { .. }
            | Self::MissingRoleId
            | Self::MissingPublicId
            | Self::MissingScopeId => "validation",
            Self::PublicId { .. } => "identity",
            Self::ScopeNotFound { .. } | Self::Db(_) => "resolution",
        }
    }
}

impl ErrorCode for IamError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidGrantScope { .. } => "IAM_INVALID_GRANT_SCOPE",
            Self::InvalidRoleScope { .. } => "IAM_INVALID_ROLE_SCOPE",
            Self::MissingRoleId => "IAM_MISSING_ROLE_ID",
            Self::MissingPublicId => "IAM_MISSING_PUBLIC_ID",
            Self::MissingScopeId => "IAM_MISSING_SCOPE_ID",
            Self::ScopeNotFound { .. } => "IAM_SCOPE_NOT_FOUND",
            Self::PublicId { .. } => "IAM_PUBLIC_ID",
            Self::Db(inner) => inner.code(),
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidGrantScope { .. }
            | Self::InvalidRoleScope { .. }
            | Self::MissingRoleId
            | Self::MissingPublicId
            | Self::MissingScopeId => false,
            // The scope may exist after the caller creates it.
            Self::ScopeNotFound { .. } => true,
            Self::PublicId { source, .. } => source.is_recoverable(),
            Self::Db(inner) => inner.is_recoverable(),
        }
    }
}
