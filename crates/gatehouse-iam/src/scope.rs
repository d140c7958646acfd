//! Scope entity and scope resolution.
//!
//! A [`Scope`] is the boundary that owns IAM resources. This module also
//! defines the read-side contract the rest of the crate needs from the
//! persistence layer:
//!
//! ```text
//! Reader trait (THIS MODULE)        ← lookup contract
//!      │
//!      ├── database backends        ← external implementations
//!      └── in-memory test readers   ← test doubles
//! ```
//!
//! [`lookup_scope`] is the single resolution path: everything that needs
//! an entity's current owning scope goes through it, with the caller's
//! [`Context`] and reader so the lookup stays inside the caller's
//! transaction.

use crate::{Action, IamError, Options, Resource, ResourceType};
use gatehouse_db::{Context, DbError};
use gatehouse_types::{random_id, ScopeType, PUBLIC_ID_LEN};
use serde::{Deserialize, Serialize};

/// An organizational or project boundary that owns IAM resources.
///
/// Immutable value type: constructors allocate the identity, and the
/// persistence layer reassembles instances from stored fields with
/// [`Scope::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    public_id: String,
    scope_type: ScopeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Scope {
    /// Creates an organization scope with a fresh public id.
    ///
    /// Recognized options: [`Options::with_name`].
    ///
    /// # Errors
    ///
    /// [`IamError::PublicId`] if the identity source fails.
    pub fn try_new_organization(opts: Options) -> Result<Self, IamError> {
        Self::try_new(ScopeType::Organization, opts)
    }

    /// Creates a project scope with a fresh public id.
    ///
    /// Recognized options: [`Options::with_name`].
    ///
    /// # Errors
    ///
    /// [`IamError::PublicId`] if the identity source fails.
    pub fn try_new_project(opts: Options) -> Result<Self, IamError> {
        Self::try_new(ScopeType::Project, opts)
    }

    fn try_new(scope_type: ScopeType, opts: Options) -> Result<Self, IamError> {
        let public_id = random_id(PUBLIC_ID_LEN).map_err(|source| IamError::PublicId {
            resource: ResourceType::Scope,
            source,
        })?;
        Ok(Self {
            public_id,
            scope_type,
            name: opts.name().map(String::from),
        })
    }

    /// Reassembles a scope from persisted fields. No validation runs here.
    #[must_use]
    pub fn from_parts(
        public_id: impl Into<String>,
        scope_type: ScopeType,
        name: Option<String>,
    ) -> Self {
        Self {
            public_id: public_id.into(),
            scope_type,
            name,
        }
    }

    /// The scope's public id.
    #[must_use]
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    /// The scope's kind.
    #[must_use]
    pub fn scope_type(&self) -> ScopeType {
        self.scope_type
    }

    /// The human-readable label, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Resource for Scope {
    fn resource_type(&self) -> ResourceType {
        ResourceType::Scope
    }

    fn actions(&self) -> Action {
        Action::CRUD
    }
}

/// Entities owned by a scope.
pub trait Scoped {
    /// Public id of the owning scope.
    fn scope_id(&self) -> &str;
}

/// Read-side lookups the IAM core needs from the persistence layer.
///
/// Implementations must honor the [`Context`] (cancellation, deadline) and
/// answer within the caller's transaction. `Send + Sync` so a single
/// backend handle can serve concurrent callers.
pub trait Reader: Send + Sync {
    /// Looks up a scope by public id.
    ///
    /// Returns `Ok(None)` when no scope with that id exists — absence is
    /// an answer, not an error, so the resolver can attach the domain
    /// context.
    ///
    /// # Errors
    ///
    /// [`DbError`] for backend failures, cancellation, or deadline expiry.
    fn lookup_scope(&self, ctx: &Context, scope_id: &str) -> Result<Option<Scope>, DbError>;
}

/// Resolves the current owning scope of `resource` through `reader`.
///
/// Reader failures propagate unchanged so the original cause (backend
/// failure, cancellation, deadline) stays inspectable; only a missing row
/// is translated into [`IamError::ScopeNotFound`].
///
/// # Errors
///
/// [`IamError::ScopeNotFound`] or a transparent [`IamError::Db`].
pub fn lookup_scope<R>(
    ctx: &Context,
    reader: &R,
    resource: &(impl Scoped + ?Sized),
) -> Result<Scope, IamError>
where
    R: Reader + ?Sized,
{
    let scope_id = resource.scope_id();
    tracing::debug!(scope_id, "resolving owning scope");
    match reader.lookup_scope(ctx, scope_id)? {
        Some(scope) => Ok(scope),
        None => Err(IamError::ScopeNotFound {
            scope_id: scope_id.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_types::PUBLIC_ID_LEN;
    use std::collections::HashMap;

    // ─── Mock Reader ────────────────────────────────────────────────

    #[derive(Debug, Default)]
    struct MemReader {
        scopes: HashMap<String, Scope>,
    }

    impl MemReader {
        fn with(scope: &Scope) -> Self {
            let mut reader = Self::default();
            reader
                .scopes
                .insert(scope.public_id().to_string(), scope.clone());
            reader
        }
    }

    impl Reader for MemReader {
        fn lookup_scope(&self, ctx: &Context, scope_id: &str) -> Result<Option<Scope>, DbError> {
            ctx.check()?;
            Ok(self.scopes.get(scope_id).cloned())
        }
    }

    struct ScopedId(String);

    impl Scoped for ScopedId {
        fn scope_id(&self) -> &str {
            &self.0
        }
    }

    // ─── Scope entity ───────────────────────────────────────────────

    #[test]
    fn organization_constructor() {
        let org = Scope::try_new_organization(Options::new().with_name("acme"))
            .expect("entropy source available");
        assert_eq!(org.scope_type(), ScopeType::Organization);
        assert_eq!(org.public_id().len(), PUBLIC_ID_LEN);
        assert_eq!(org.name(), Some("acme"));
    }

    #[test]
    fn project_constructor_without_name() {
        let project =
            Scope::try_new_project(Options::new()).expect("entropy source available");
        assert_eq!(project.scope_type(), ScopeType::Project);
        assert_eq!(project.name(), None);
    }

    #[test]
    fn from_parts_round_trip() {
        let scope = Scope::from_parts("o_1234", ScopeType::Organization, None);
        assert_eq!(scope.public_id(), "o_1234");
        assert_eq!(scope.scope_type(), ScopeType::Organization);
    }

    #[test]
    fn scope_is_a_resource() {
        let scope = Scope::from_parts("o_1234", ScopeType::Organization, None);
        assert_eq!(scope.resource_type(), ResourceType::Scope);
        assert_eq!(scope.actions(), Action::CRUD);
    }

    #[test]
    fn serde_skips_empty_name() {
        let scope = Scope::from_parts("o_1234", ScopeType::Organization, None);
        let json = serde_json::to_string(&scope).expect("serialize");
        assert!(!json.contains("name"), "got: {json}");
    }

    // ─── lookup_scope ───────────────────────────────────────────────

    #[test]
    fn lookup_finds_existing_scope() {
        let org = Scope::try_new_organization(Options::new()).expect("entropy source available");
        let reader = MemReader::with(&org);
        let owned = ScopedId(org.public_id().to_string());

        let found = lookup_scope(&Context::background(), &reader, &owned)
            .expect("scope present in reader");
        assert_eq!(found, org);
    }

    #[test]
    fn lookup_missing_scope_is_domain_error() {
        let reader = MemReader::default();
        let owned = ScopedId("o_missing".to_string());

        let err = lookup_scope(&Context::background(), &reader, &owned).unwrap_err();
        assert!(matches!(err, IamError::ScopeNotFound { .. }));
        assert!(err.to_string().contains("o_missing"), "got: {err}");
    }

    #[test]
    fn lookup_propagates_cancellation_unchanged() {
        let reader = MemReader::default();
        let owned = ScopedId("o_any".to_string());
        let (ctx, cancel) = Context::background().with_cancel();
        cancel.cancel();

        let err = lookup_scope(&ctx, &reader, &owned).unwrap_err();
        assert!(matches!(err, IamError::Db(DbError::Canceled)));
    }

    #[test]
    fn lookup_works_through_trait_object() {
        let org = Scope::try_new_organization(Options::new()).expect("entropy source available");
        let reader: Box<dyn Reader> = Box::new(MemReader::with(&org));
        let owned = ScopedId(org.public_id().to_string());

        let found = lookup_scope(&Context::background(), reader.as_ref(), &owned)
            .expect("scope present in reader");
        assert_eq!(found.public_id(), org.public_id());
    }
}
