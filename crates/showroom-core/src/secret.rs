//! The process-wide signing secret shared by every credential the showroom
//! issues or verifies.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::AppError;
use crate::result::AppResult;

/// Environment variable holding the signing secret.
pub const SIGNING_SECRET_ENV: &str = "SHOWROOM_SIGNING_SECRET";

/// Secrets shorter than this are accepted but logged as weak.
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// Symmetric key material for HS256 signing.
///
/// Loaded exactly once at startup and handed to every component that signs
/// or verifies. Construction fails when the secret is absent or blank, which
/// the server treats as fatal.
#[derive(Clone)]
pub struct SigningSecret(Arc<str>);

impl SigningSecret {
    /// Wraps raw secret text, rejecting empty or whitespace-only values.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AppError::misconfigured_secret(format!(
                "{SIGNING_SECRET_ENV} is set but empty"
            )));
        }
        if raw.len() < RECOMMENDED_SECRET_LEN {
            warn!(
                length = raw.len(),
                recommended = RECOMMENDED_SECRET_LEN,
                "Signing secret is shorter than recommended"
            );
        }
        Ok(Self(Arc::from(raw)))
    }

    /// Builds the secret from an optional configured value.
    pub fn from_option(raw: Option<&str>) -> AppResult<Self> {
        match raw {
            Some(value) => Self::new(value),
            None => Err(AppError::misconfigured_secret(format!(
                "{SIGNING_SECRET_ENV} is not set; refusing to start without a signing secret"
            ))),
        }
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(****)")
    }
}
