//! Mints and verifies share-session credentials.

use chrono::{DateTime, Duration, Utc};

use showroom_core::config::session::SessionConfig;
use showroom_core::result::AppResult;
use showroom_entity::share::SlugGrant;

use crate::resolver::ResolvedGrant;
use crate::token::{SessionClaims, TokenClaims, TokenCodec, TokenError};

/// Name of the share-session cookie.
pub const SESSION_COOKIE: &str = "share-session";

/// A freshly signed credential ready to be placed in a cookie.
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    /// Signed token (the cookie value).
    pub token: String,
    /// Absolute expiry of the credential.
    pub expires_at: DateTime<Utc>,
    /// Cookie `Max-Age` in seconds.
    pub max_age_seconds: i64,
}

/// Issues share sessions with a fixed lifetime counted from mint time.
///
/// The session lifetime is independent of the source link's own expiry:
/// deactivating or expiring a link does not revoke sessions already issued.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    codec: TokenCodec,
    ttl: Duration,
}

impl SessionIssuer {
    /// Creates an issuer from session configuration.
    pub fn new(codec: TokenCodec, config: &SessionConfig) -> Self {
        Self {
            codec,
            ttl: Duration::days(config.ttl_days as i64),
        }
    }

    /// Session lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mints a new session for `source_id` carrying `slugs`.
    pub fn issue(
        &self,
        source_id: &str,
        slugs: &SlugGrant,
        display_name: Option<&str>,
    ) -> AppResult<IssuedCredential> {
        let claims = SessionClaims::new(
            source_id,
            slugs.clone(),
            display_name.map(str::to_string),
            self.ttl,
        );
        let token = self.codec.encode(&claims)?;

        Ok(IssuedCredential {
            token,
            expires_at: claims.expires_at(),
            max_age_seconds: self.ttl.num_seconds(),
        })
    }

    /// Mints a session from a resolved link grant.
    pub fn issue_for(&self, grant: &ResolvedGrant) -> AppResult<IssuedCredential> {
        self.issue(&grant.link_id, &grant.slugs, grant.display_name.as_deref())
    }

    /// Verifies a session cookie value.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.codec.decode(token)
    }
}
