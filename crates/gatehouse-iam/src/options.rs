//! Construction options for IAM entities.
//!
//! A single config struct with documented optional fields and explicit
//! defaults, passed by value to entity constructors. Unrecognized fields
//! are simply ignored by constructors that don't use them.

/// Optional settings accepted by IAM constructors.
///
/// Empty strings are ignored, so callers can pass through possibly-empty
/// user input without pre-checking it.
///
/// # Example
///
/// ```
/// use gatehouse_iam::Options;
///
/// let opts = Options::new().with_name("read-only");
/// assert_eq!(opts.name(), Some("read-only"));
///
/// // Empty values leave the option unset.
/// let opts = Options::new().with_name("");
/// assert_eq!(opts.name(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    name: Option<String>,
    description: Option<String>,
}

impl Options {
    /// Creates options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the human-readable name. Empty strings are ignored.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.name = Some(name);
        }
        self
    }

    /// Sets the free-form description. Empty strings are ignored.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = Some(description);
        }
        self
    }

    /// The configured name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The configured description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
