//! Role entity.
//!
//! A role is a named bundle of grants assignable to principals. This crate
//! only needs enough of it to anchor grants: identity, owning scope, and
//! labels. Assignment and principal machinery live elsewhere.

use crate::{Action, IamError, Options, Resource, ResourceType, Scope, Scoped};
use gatehouse_types::{random_id, ScopeType, PUBLIC_ID_LEN};
use serde::{Deserialize, Serialize};

/// A named bundle of grants within an organization or project scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    public_id: String,
    scope_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Role {
    /// Creates a role owned by `scope` with a fresh public id.
    ///
    /// Recognized options: [`Options::with_name`],
    /// [`Options::with_description`].
    ///
    /// # Errors
    ///
    /// [`IamError::InvalidRoleScope`] if `scope` is not an organization or
    /// project; [`IamError::PublicId`] if the identity source fails.
    pub fn try_new(scope: &Scope, opts: Options) -> Result<Self, IamError> {
        match scope.scope_type() {
            ScopeType::Organization | ScopeType::Project => {}
            other => return Err(IamError::InvalidRoleScope { found: other }),
        }
        let public_id = random_id(PUBLIC_ID_LEN).map_err(|source| IamError::PublicId {
            resource: ResourceType::Role,
            source,
        })?;
        Ok(Self {
            public_id,
            scope_id: scope.public_id().to_string(),
            name: opts.name().map(String::from),
            description: opts.description().map(String::from),
        })
    }

    /// Reassembles a role from persisted fields. No validation runs here.
    #[must_use]
    pub fn from_parts(
        public_id: impl Into<String>,
        scope_id: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            public_id: public_id.into(),
            scope_id: scope_id.into(),
            name,
            description,
        }
    }

    /// The role's public id.
    #[must_use]
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    /// The human-readable label, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The free-form description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Scoped for Role {
    fn scope_id(&self) -> &str {
        &self.scope_id
    }
}

impl Resource for Role {
    fn resource_type(&self) -> ResourceType {
        ResourceType::Role
    }

    fn actions(&self) -> Action {
        Action::CRUD
    }
}
