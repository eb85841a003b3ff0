//! Share-session cookie configuration.

use serde::{Deserialize, Serialize};

/// Settings for the cookie-backed share session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in days, counted from mint time.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: u64,
    /// Mark cookies `Secure` (enable behind TLS).
    #[serde(default)]
    pub secure_cookies: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_days: default_ttl_days(),
            secure_cookies: false,
        }
    }
}

fn default_ttl_days() -> u64 {
    30
}
