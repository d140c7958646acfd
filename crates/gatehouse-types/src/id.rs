//! Public identifier generation.
//!
//! Every persisted Gatehouse entity carries an opaque `public_id` assigned
//! once at construction. Identifiers are base62 strings drawn from the OS
//! entropy source, so they are safe to expose in URLs and logs and carry no
//! ordering or timing information.
//!
//! The entropy source can fail. That failure is returned, never masked:
//! callers wrap [`IdError`] with their own context and surface it.
//!
//! # Example
//!
//! ```
//! use gatehouse_types::{random_id, PUBLIC_ID_LEN};
//!
//! let id = random_id(PUBLIC_ID_LEN).expect("entropy source available");
//! assert_eq!(id.len(), PUBLIC_ID_LEN);
//! assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
//! ```

use crate::ErrorCode;
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Standard public id length for IAM entities.
pub const PUBLIC_ID_LEN: usize = 20;

const BASE62: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// Bytes below this bound map uniformly onto the 62-character alphabet
// (248 = 62 * 4); the rest are rejected and redrawn.
const REJECT_ABOVE: u8 = 248;

/// Errors from identifier generation.
#[derive(Debug, Error)]
pub enum IdError {
    /// The OS entropy source failed.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] rand::Error),

    /// A zero-length identifier was requested.
    #[error("requested id length must be non-zero")]
    ZeroLength,
}

impl ErrorCode for IdError {
    fn code(&self) -> &'static str {
        match self {
            Self::Entropy(_) => "ID_ENTROPY",
            Self::ZeroLength => "ID_ZERO_LENGTH",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Entropy exhaustion is transient; a zero-length request is a bug.
        matches!(self, Self::Entropy(_))
    }
}

/// Generates a random base62 identifier of `len` characters.
///
/// Safe for concurrent use: each call draws independently from the OS
/// entropy source with no shared state.
///
/// # Errors
///
/// Returns [`IdError::ZeroLength`] for `len == 0`, or
/// [`IdError::Entropy`] if the OS entropy source fails.
pub fn random_id(len: usize) -> Result<String, IdError> {
    if len == 0 {
        return Err(IdError::ZeroLength);
    }

    let mut out = String::with_capacity(len);
    let mut buf = [0u8; 64];
    while out.len() < len {
        OsRng.try_fill_bytes(&mut buf)?;
        for &byte in &buf {
            if byte < REJECT_ABOVE {
                out.push(BASE62[(byte % 62) as usize] as char);
                if out.len() == len {
                    break;
                }
            }
        }
    }
    Ok(out)
}
