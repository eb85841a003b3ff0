//! The two forms a share link reference can take.

use tracing::debug;

use crate::token::{ShareClaims, TokenCodec};

/// A share page path parameter, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkReference {
    /// A self-contained signed token that verified successfully.
    SignedToken(ShareClaims),
    /// Anything else, treated as a bare link registry id.
    LegacyId(String),
}

impl LinkReference {
    /// Classifies `raw`: a verifiable share token wins, everything else is
    /// looked up as a legacy id.
    pub fn parse(codec: &TokenCodec, raw: &str) -> Self {
        match codec.decode::<ShareClaims>(raw) {
            Ok(claims) => Self::SignedToken(claims),
            Err(reason) => {
                debug!(%reason, "Share reference is not a valid token; treating as legacy id");
                Self::LegacyId(raw.to_string())
            }
        }
    }

    /// Returns `true` for the stateless token form.
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::SignedToken(_))
    }
}
