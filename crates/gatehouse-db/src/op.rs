//! Write-side operation vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The persistence operation a write-side call is about to perform.
///
/// Carried into [`VetForWrite`](crate::VetForWrite) so entities can vet
/// differently per operation, and into audit records by the persistence
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpType {
    /// Insert a new record.
    Create,
    /// Modify an existing record.
    Update,
    /// Remove an existing record.
    Delete,
}

impl OpType {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accepted by write-side calls.
///
/// A single config struct with documented optional fields and explicit
/// defaults, passed by value.
///
/// # Example
///
/// ```
/// use gatehouse_db::WriteOptions;
///
/// let opts = WriteOptions::new().with_field_mask(["name", "grant"]);
/// assert_eq!(opts.field_mask(), ["name", "grant"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    field_mask: Vec<String>,
}

impl WriteOptions {
    /// Creates options with defaults: no field mask (all fields written).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits an update to the named fields.
    #[must_use]
    pub fn with_field_mask<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_mask = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Fields an update is limited to; empty means all fields.
    #[must_use]
    pub fn field_mask(&self) -> &[String] {
        &self.field_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_type_display() {
        assert_eq!(OpType::Create.to_string(), "create");
        assert_eq!(OpType::Update.to_string(), "update");
        assert_eq!(OpType::Delete.to_string(), "delete");
    }

    #[test]
    fn op_type_serde_lowercase() {
        let json = serde_json::to_string(&OpType::Update).expect("serialize");
        assert_eq!(json, "\"update\"");

        let parsed: OpType = serde_json::from_str("\"delete\"").expect("deserialize");
        assert_eq!(parsed, OpType::Delete);
    }

    #[test]
    fn write_options_default_is_unmasked() {
        assert!(WriteOptions::new().field_mask().is_empty());
    }

    #[test]
    fn write_options_field_mask() {
        let opts = WriteOptions::new().with_field_mask(["name"]);
        assert_eq!(opts.field_mask(), ["name"]);
    }
}
