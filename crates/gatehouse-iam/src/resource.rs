//! Resource taxonomy and action sets.
//!
//! Every persisted IAM entity reports a fixed [`ResourceType`] and the
//! [`Action`] set the system supports against it. The taxonomy is closed:
//! downstream authorization code matches exhaustively on it.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of persisted IAM resources.
///
/// Serialized in snake_case (`"role_grant"`); [`Display`](fmt::Display)
/// renders the human-readable form used in error messages (`"role grant"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// An organization or project boundary.
    Scope,
    /// A named bundle of grants.
    Role,
    /// One authorization rule attached to a role.
    RoleGrant,
}

impl ResourceType {
    /// Returns the machine-readable string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scope => "scope",
            Self::Role => "role",
            Self::RoleGrant => "role_grant",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scope => f.write_str("scope"),
            Self::Role => f.write_str("role"),
            Self::RoleGrant => f.write_str("role grant"),
        }
    }
}

bitflags! {
    /// Actions the system can perform against a resource.
    ///
    /// A bitflags set so callers compose and intersect action sets the
    /// same way they do capability sets.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Action: u8 {
        /// Create a new instance.
        const CREATE = 0b0001;
        /// Read an existing instance.
        const READ   = 0b0010;
        /// Update an existing instance.
        const UPDATE = 0b0100;
        /// Delete an existing instance.
        const DELETE = 0b1000;
    }
}

impl Action {
    /// The standard action set for entities with full lifecycle management.
    pub const CRUD: Self = Self::CREATE
        .union(Self::READ)
        .union(Self::UPDATE)
        .union(Self::DELETE);

    /// Returns a human-readable list of the action names in this set.
    ///
    /// # Example
    ///
    /// ```
    /// use gatehouse_iam::Action;
    ///
    /// let names = (Action::CREATE | Action::READ).names();
    /// assert_eq!(names, vec!["CREATE", "READ"]);
    /// ```
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

/// Behavior common to every IAM resource.
///
/// Object-safe so registries can hold `Box<dyn Resource>`.
pub trait Resource {
    /// The fixed taxonomy entry for this entity kind.
    fn resource_type(&self) -> ResourceType;

    /// Actions the system supports against this resource kind.
    fn actions(&self) -> Action;
}
