//! Decode-time failures.

use thiserror::Error;

/// Why a token could not be accepted.
///
/// These never reach a browser as distinct outcomes; guarded paths collapse
/// all of them into "not authorized".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signature does not match the shared secret.
    #[error("invalid token signature")]
    InvalidSignature,
    /// The `exp` claim is in the past.
    #[error("token has expired")]
    Expired,
    /// Not a token, wrong structure, or a claim set of another type.
    #[error("malformed token")]
    Malformed,
}
