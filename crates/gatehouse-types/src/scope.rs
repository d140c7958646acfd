//! Scope kinds.
//!
//! Scopes partition the IAM hierarchy into boundaries that own resources:
//!
//! ```text
//! global
//!   └── organization
//!         └── project
//! ```
//!
//! The kind set is closed. Adding a kind is an API change that every
//! consumer must see, not a runtime discovery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The kind of a scope.
///
/// Serialized as its lowercase string form (`"global"`, `"organization"`,
/// `"project"`), which is also what [`FromStr`] parses.
///
/// # Example
///
/// ```
/// use gatehouse_types::ScopeType;
///
/// let kind: ScopeType = "project".parse().expect("known kind");
/// assert_eq!(kind, ScopeType::Project);
/// assert_eq!(kind.as_str(), "project");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    /// The root of the scope hierarchy. Owns organizations.
    Global,
    /// A top-level boundary owning projects, roles, and grants.
    Organization,
    /// A boundary within an organization owning roles and grants.
    Project,
}

impl ScopeType {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Organization => "organization",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown scope kind.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scope type: {0}")]
pub struct ParseScopeTypeError(pub String);

impl FromStr for ScopeType {
    type Err = ParseScopeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Self::Global),
            "organization" => Ok(Self::Organization),
            "project" => Ok(Self::Project),
            other => Err(ParseScopeTypeError(other.to_string())),
        }
    }
}
