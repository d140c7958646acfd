//! Unified error interface for Gatehouse.
//!
//! Every error enum in the workspace implements [`ErrorCode`] so callers
//! can branch on stable machine-readable codes instead of display strings,
//! and so retry layers can ask whether a failure is worth retrying.
//!
//! # Code Format
//!
//! - **UPPER_SNAKE_CASE**: e.g. `"DB_CANCELED"`, `"IAM_MISSING_ROLE_ID"`
//! - **Crate-prefixed**: `ID_` / `DB_` / `IAM_`
//! - **Stable**: codes are an API contract and never change once published
//!
//! # Example
//!
//! ```
//! use gatehouse_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum LookupError {
//!     MissingScope,
//!     Timeout,
//! }
//!
//! impl ErrorCode for LookupError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::MissingScope => "LOOKUP_MISSING_SCOPE",
//!             Self::Timeout => "LOOKUP_TIMEOUT",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Timeout)
//!     }
//! }
//!
//! assert_eq!(LookupError::Timeout.code(), "LOOKUP_TIMEOUT");
//! assert!(LookupError::Timeout.is_recoverable());
//! ```

/// Stable machine-readable identity for an error.
///
/// # Recoverability
///
/// An error is recoverable when retrying may succeed or the caller can fix
/// the condition and try again (transient backend failure, expired
/// deadline). Validation failures are not recoverable: the same input will
/// fail the same way until it changes.
pub trait ErrorCode {
    /// Returns the machine-readable code for this error.
    ///
    /// UPPER_SNAKE_CASE, prefixed with the owning crate's domain
    /// (`"ID_"`, `"DB_"`, `"IAM_"`). Stable across versions.
    fn code(&self) -> &'static str;

    /// Returns whether retrying (possibly after caller action) may succeed.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error's code follows Gatehouse conventions.
///
/// # Checks
///
/// 1. Code is non-empty
/// 2. Code starts with `expected_prefix`
/// 3. Code is UPPER_SNAKE_CASE
///
/// # Panics
///
/// Panics with a descriptive message if any check fails. Intended for
/// tests that pin down the code table of an error enum.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Asserts every code in a slice of errors; see [`assert_error_code`].
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
