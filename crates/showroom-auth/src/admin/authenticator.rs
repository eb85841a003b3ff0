//! Admin login against the configured account and admin credential checks.

use chrono::Duration;
use tracing::{info, warn};

use showroom_core::config::auth::AuthConfig;
use showroom_core::error::AppError;
use showroom_core::result::AppResult;

use super::password::PasswordHasher;
use crate::session::IssuedCredential;
use crate::token::{AdminClaims, TokenClaims, TokenCodec, TokenError};

/// Name of the admin credential cookie.
pub const ADMIN_COOKIE: &str = "admin-session";

/// Verifies admin logins and the resulting admin credentials.
#[derive(Debug, Clone)]
pub struct AdminAuthenticator {
    codec: TokenCodec,
    hasher: PasswordHasher,
    username: String,
    password_hash: String,
    ttl: Duration,
}

impl AdminAuthenticator {
    /// Creates an authenticator from auth configuration.
    pub fn new(codec: TokenCodec, config: &AuthConfig) -> Self {
        if config.admin_password_hash.is_empty() {
            warn!("auth.admin_password_hash is empty; admin login is disabled");
        }
        Self {
            codec,
            hasher: PasswordHasher::new(),
            username: config.admin_username.clone(),
            password_hash: config.admin_password_hash.clone(),
            ttl: Duration::hours(config.admin_ttl_hours as i64),
        }
    }

    /// Checks `username`/`password` and mints an admin credential.
    ///
    /// Every failure reads the same to the caller.
    pub fn login(&self, username: &str, password: &str) -> AppResult<IssuedCredential> {
        if self.password_hash.is_empty() {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let password_ok = self.hasher.verify_password(password, &self.password_hash)?;
        if !password_ok || username != self.username {
            warn!(username = %username, "Rejected admin login");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let claims = AdminClaims::new(&self.username, self.ttl);
        let token = self.codec.encode(&claims)?;
        info!(username = %self.username, "Admin logged in");

        Ok(IssuedCredential {
            token,
            expires_at: claims.expires_at(),
            max_age_seconds: self.ttl.num_seconds(),
        })
    }

    /// Verifies an admin cookie value.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let claims: AdminClaims = self.codec.decode(token)?;
        if claims.sub != self.username {
            return Err(TokenError::Malformed);
        }
        Ok(claims)
    }
}
