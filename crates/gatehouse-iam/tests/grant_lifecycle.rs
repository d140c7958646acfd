//! End-to-end role grant lifecycle through the public API.
//!
//! Simulates the persistence layer with an in-memory reader: construct a
//! grant, vet it, "persist" it, let the scope change underneath it, and
//! verify the pre-write vet catches the drift on the next attempt.

use gatehouse_db::{Context, DbError, OpType, VetForWrite, WriteOptions};
use gatehouse_iam::{
    Options, Reader, Role, RoleGrant, RoleGrantData, Scope, ScopeType, IamError,
};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory stand-in for the persistence layer's read side.
#[derive(Debug, Default)]
struct MemStore {
    scopes: RwLock<HashMap<String, Scope>>,
    grants: RwLock<HashMap<String, RoleGrantData>>,
}

impl MemStore {
    fn put_scope(&self, scope: Scope) {
        self.scopes
            .write()
            .expect("scope lock")
            .insert(scope.public_id().to_string(), scope);
    }

    /// Vets, then stores — the same order the real writer uses.
    fn write_grant(&self, ctx: &Context, grant: &RoleGrant, op: OpType) -> Result<(), IamError> {
        grant.vet_for_write(ctx, self, op, &WriteOptions::new())?;
        self.grants
            .write()
            .expect("grant lock")
            .insert(grant.public_id().to_string(), grant.data().clone());
        Ok(())
    }

    fn grant_count(&self) -> usize {
        self.grants.read().expect("grant lock").len()
    }
}

impl Reader for MemStore {
    fn lookup_scope(&self, ctx: &Context, scope_id: &str) -> Result<Option<Scope>, DbError> {
        ctx.check()?;
        Ok(self.scopes.read().expect("scope lock").get(scope_id).cloned())
    }
}

#[test]
fn grant_survives_create_then_fails_after_scope_kind_flip() {
    let store = MemStore::default();
    let ctx = Context::background();

    let org = Scope::try_new_organization(Options::new().with_name("acme"))
        .expect("entropy source available");
    store.put_scope(org.clone());

    let role = Role::try_new(&org, Options::new().with_name("admin")).expect("valid scope");
    let grant = RoleGrant::try_new(&org, &role, "id=*;type=*;actions=*", Options::new())
        .expect("valid inputs");

    // First write passes: the scope is still an organization.
    store
        .write_grant(&ctx, &grant, OpType::Create)
        .expect("vet passes against live org scope");
    assert_eq!(store.grant_count(), 1);

    // The scope changes kind underneath the grant. Construction-time
    // validation is stale now; only the pre-write vet can see it.
    store.put_scope(Scope::from_parts(
        org.public_id(),
        ScopeType::Global,
        org.name().map(String::from),
    ));

    let err = store.write_grant(&ctx, &grant, OpType::Update).unwrap_err();
    assert!(matches!(
        err,
        IamError::InvalidGrantScope {
            found: ScopeType::Global
        }
    ));
    // The failed update never touched the stored record.
    assert_eq!(store.grant_count(), 1);
}

#[test]
fn clone_from_store_is_independent_of_the_original() {
    let store = MemStore::default();
    let ctx = Context::background();

    let project = Scope::try_new_project(Options::new()).expect("entropy source available");
    store.put_scope(project.clone());
    let role = Role::try_new(&project, Options::new()).expect("valid scope");

    let original = RoleGrant::try_new(
        &project,
        &role,
        "id=*;actions=read",
        Options::new().with_name("readers"),
    )
    .expect("valid inputs");
    store
        .write_grant(&ctx, &original, OpType::Create)
        .expect("vet passes");

    // A cache would hand out clones; mutating one must not leak into the other.
    let mut cached = original.clone();
    assert_eq!(cached, original);

    cached.set_grant("id=*;actions=*");
    assert_eq!(original.grant(), "id=*;actions=read");
    assert_eq!(cached.grant(), "id=*;actions=*");

    // And the clone vets on its own, against current scope state.
    cached
        .vet_for_write(&ctx, &store, OpType::Update, &WriteOptions::new())
        .expect("clone vets independently");
}

#[test]
fn rehydrated_grant_vets_like_a_fresh_one() {
    let store = MemStore::default();
    let ctx = Context::background();

    let org = Scope::try_new_organization(Options::new()).expect("entropy source available");
    store.put_scope(org.clone());
    let role = Role::try_new(&org, Options::new()).expect("valid scope");

    let grant = RoleGrant::try_new(&org, &role, "id=*;actions=read", Options::new())
        .expect("valid inputs");
    store
        .write_grant(&ctx, &grant, OpType::Create)
        .expect("vet passes");

    // Round-trip the persisted record the way a storage backend would.
    let json = serde_json::to_string(grant.data()).expect("serialize");
    let restored = RoleGrant::from_data(serde_json::from_str(&json).expect("deserialize"));

    assert_eq!(restored, grant);
    restored
        .vet_for_write(&ctx, &store, OpType::Update, &WriteOptions::new())
        .expect("restored grant vets against live scope");
    assert_eq!(
        restored.get_scope(&ctx, &store).expect("scope resolves"),
        org
    );
}

#[test]
fn deadline_from_the_caller_reaches_the_resolver() {
    let store = MemStore::default();

    let org = Scope::try_new_organization(Options::new()).expect("entropy source available");
    store.put_scope(org.clone());
    let role = Role::try_new(&org, Options::new()).expect("valid scope");
    let grant = RoleGrant::try_new(&org, &role, "g", Options::new()).expect("valid inputs");

    let ctx = Context::background().with_timeout(std::time::Duration::ZERO);
    let err = store.write_grant(&ctx, &grant, OpType::Create).unwrap_err();
    assert!(matches!(err, IamError::Db(DbError::DeadlineExceeded)));
    assert_eq!(store.grant_count(), 0);
}
