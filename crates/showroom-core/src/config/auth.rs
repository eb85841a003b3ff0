//! Credential configuration.

use serde::{Deserialize, Serialize};

/// Signing secret, admin login, and share-token lifetime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret. Normally supplied through `SHOWROOM_SIGNING_SECRET`.
    #[serde(default, skip_serializing)]
    pub signing_secret: Option<String>,
    /// Username accepted by the admin login.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Argon2id PHC hash of the admin password. Empty disables admin login.
    #[serde(default, skip_serializing)]
    pub admin_password_hash: String,
    /// Admin credential lifetime in hours.
    #[serde(default = "default_admin_ttl")]
    pub admin_ttl_hours: u64,
    /// Lifetime of share tokens for links without their own expiry, in days.
    #[serde(default = "default_share_token_ttl")]
    pub share_token_ttl_days: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            admin_username: default_admin_username(),
            admin_password_hash: String::new(),
            admin_ttl_hours: default_admin_ttl(),
            share_token_ttl_days: default_share_token_ttl(),
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_ttl() -> u64 {
    24
}

fn default_share_token_ttl() -> u64 {
    365
}
