//! Role grants: authorization rules attached to a role.
//!
//! A [`RoleGrant`] binds one opaque grant string to a role within an
//! organization or project scope. The grant string is never parsed here —
//! this module only guarantees the record is well-formed and attached to a
//! valid scope/role pair before it reaches storage.
//!
//! The identity (`public_id`) is fixed at construction. Scope validity is
//! deliberately *not* cached from construction: the owning scope can change
//! kind or disappear between construction and the write, so the pre-write
//! vet re-resolves it inside the caller's transaction every time.

use crate::{
    lookup_scope, Action, IamError, Options, Reader, Resource, ResourceType, Role, Scope, Scoped,
};
use gatehouse_db::{Context, OpType, VetForWrite, WriteOptions};
use gatehouse_types::{random_id, ScopeType, PUBLIC_ID_LEN};
use serde::{Deserialize, Serialize};

/// Default table the persistence layer stores role grants in.
pub const ROLE_GRANT_TABLE: &str = "iam_role_grant";

/// Persisted fields of a role grant.
///
/// Kept separate from [`RoleGrant`] so the storage layer works with a plain
/// serializable record while behavior stays on the domain type
/// (composition, not inheritance).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrantData {
    /// Opaque unique identifier, assigned once at construction.
    pub public_id: String,
    /// Public id of the owning scope.
    pub scope_id: String,
    /// Public id of the role this grant is attached to.
    pub role_id: String,
    /// The authorization rule, stored verbatim.
    pub grant: String,
    /// Optional human-readable label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A grant string attached to a role within an organization or project.
///
/// # Example
///
/// ```
/// use gatehouse_iam::{Options, Role, RoleGrant, Scope};
///
/// let org = Scope::try_new_organization(Options::new())?;
/// let role = Role::try_new(&org, Options::new())?;
/// let grant = RoleGrant::try_new(&org, &role, "id=*;actions=read", Options::new())?;
///
/// assert!(!grant.public_id().is_empty());
/// assert_eq!(grant.grant(), "id=*;actions=read");
/// # Ok::<(), gatehouse_iam::IamError>(())
/// ```
///
/// Cloning yields a fully independent copy — mutating either instance never
/// affects the other, so grants can be handed out from caches or across
/// thread boundaries without aliasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrant {
    data: RoleGrantData,
    /// Per-instance table override; `None` means [`ROLE_GRANT_TABLE`].
    table_name: Option<String>,
}

impl RoleGrant {
    /// Creates a grant for `role` within `scope`.
    ///
    /// The grant string is accepted verbatim; no parsing is performed.
    /// Recognized options: [`Options::with_name`].
    ///
    /// # Errors
    ///
    /// - [`IamError::InvalidGrantScope`] if `scope` is not an organization
    ///   or project
    /// - [`IamError::MissingRoleId`] if `role` carries no public id
    /// - [`IamError::PublicId`] if the identity source fails (propagated,
    ///   never swallowed)
    pub fn try_new(
        scope: &Scope,
        role: &Role,
        grant: impl Into<String>,
        opts: Options,
    ) -> Result<Self, IamError> {
        match scope.scope_type() {
            ScopeType::Organization | ScopeType::Project => {}
            other => return Err(IamError::InvalidGrantScope { found: other }),
        }
        if role.public_id().is_empty() {
            return Err(IamError::MissingRoleId);
        }
        let public_id = random_id(PUBLIC_ID_LEN).map_err(|source| IamError::PublicId {
            resource: ResourceType::RoleGrant,
            source,
        })?;
        Ok(Self {
            data: RoleGrantData {
                public_id,
                scope_id: scope.public_id().to_string(),
                role_id: role.public_id().to_string(),
                grant: grant.into(),
                name: opts.name().map(String::from),
            },
            table_name: None,
        })
    }

    /// Reassembles a grant from persisted fields.
    ///
    /// The persistence layer uses this when reading rows back. No
    /// validation runs here — the pre-write vet guards the write path.
    #[must_use]
    pub fn from_data(data: RoleGrantData) -> Self {
        Self {
            data,
            table_name: None,
        }
    }

    /// The grant's public id.
    #[must_use]
    pub fn public_id(&self) -> &str {
        &self.data.public_id
    }

    /// Public id of the role this grant is attached to.
    #[must_use]
    pub fn role_id(&self) -> &str {
        &self.data.role_id
    }

    /// The authorization rule, as given at construction.
    #[must_use]
    pub fn grant(&self) -> &str {
        &self.data.grant
    }

    /// The human-readable label, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    /// Replaces the authorization rule. The new string is stored verbatim.
    pub fn set_grant(&mut self, grant: impl Into<String>) {
        self.data.grant = grant.into();
    }

    /// Immutable view of the persisted fields.
    #[must_use]
    pub fn data(&self) -> &RoleGrantData {
        &self.data
    }

    /// Consumes the grant, returning the persisted record.
    #[must_use]
    pub fn into_data(self) -> RoleGrantData {
        self.data
    }

    /// Resolves the grant's current owning scope through `reader`.
    ///
    /// # Errors
    ///
    /// [`IamError::ScopeNotFound`] or a transparent [`IamError::Db`].
    pub fn get_scope<R>(&self, ctx: &Context, reader: &R) -> Result<Scope, IamError>
    where
        R: Reader + ?Sized,
    {
        lookup_scope(ctx, reader, self)
    }

    /// Table the persistence layer should address for this instance.
    #[must_use]
    pub fn table_name(&self) -> &str {
        self.table_name.as_deref().unwrap_or(ROLE_GRANT_TABLE)
    }

    /// Overrides the storage table for this instance.
    ///
    /// Empty names are ignored, leaving the current value in place.
    pub fn set_table_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.table_name = Some(name);
        }
    }

    fn scope_is_valid<R>(&self, ctx: &Context, reader: &R) -> Result<(), IamError>
    where
        R: Reader + ?Sized,
    {
        let scope = lookup_scope(ctx, reader, self)?;
        match scope.scope_type() {
            ScopeType::Organization | ScopeType::Project => Ok(()),
            other => Err(IamError::InvalidGrantScope { found: other }),
        }
    }
}

impl Scoped for RoleGrant {
    fn scope_id(&self) -> &str {
        &self.data.scope_id
    }
}

impl Resource for RoleGrant {
    fn resource_type(&self) -> ResourceType {
        ResourceType::RoleGrant
    }

    fn actions(&self) -> Action {
        Action::CRUD
    }
}

impl<R: Reader + ?Sized> VetForWrite<R> for RoleGrant {
    type Error = IamError;

    /// Checks the grant's invariants immediately before a write.
    ///
    /// Structural checks run first and fail without touching the reader.
    /// The owning scope's kind is then re-resolved through the caller's
    /// context and reader; resolver failures propagate unchanged. All op
    /// types get the full check.
    fn vet_for_write(
        &self,
        ctx: &Context,
        reader: &R,
        op: OpType,
        _opts: &WriteOptions,
    ) -> Result<(), IamError> {
        tracing::debug!(public_id = %self.data.public_id, %op, "vetting role grant for write");
        if self.data.public_id.is_empty() {
            return Err(IamError::MissingPublicId);
        }
        if self.data.scope_id.is_empty() {
            return Err(IamError::MissingScopeId);
        }
        self.scope_is_valid(ctx, reader)
    }
}

// The capability surface downstream code relies on: a role grant is a
// resource, clonable, thread-portable, and vettable through any reader.
const _: () = {
    const fn assert_capabilities<T>()
    where
        T: Resource + Clone + Send + Sync + VetForWrite<dyn Reader, Error = IamError>,
    {
    }
    assert_capabilities::<RoleGrant>()
};
