//! Claim sets carried by showroom tokens.

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use showroom_entity::share::SlugGrant;

/// Distinguishes the three credential kinds signed with the same secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Self-contained share link grant, embedded in share URLs.
    Share,
    /// Share-session cookie.
    Session,
    /// Admin credential cookie.
    Admin,
}

/// Common behaviour of every claim set the codec handles.
pub trait TokenClaims: Serialize + DeserializeOwned {
    /// The `typ` a decoded token must carry to be accepted as `Self`.
    const TYPE: TokenType;

    /// The `typ` actually carried.
    fn token_type(&self) -> TokenType;

    /// Expiration timestamp (seconds since epoch).
    fn exp(&self) -> i64;

    /// Returns the expiration as a `DateTime<Utc>`.
    fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp(), 0).unwrap_or_else(Utc::now)
    }
}

/// Stateless share link grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareClaims {
    /// Subject, the link id.
    pub sub: String,
    /// Resolved slug list; `null` grants every template.
    #[serde(default)]
    pub slugs: SlugGrant,
    /// Display name of the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Always [`TokenType::Share`].
    pub typ: TokenType,
}

impl ShareClaims {
    /// Builds claims issued now and expiring at `expires_at`.
    pub fn new(
        link_id: impl Into<String>,
        slugs: SlugGrant,
        name: Option<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: link_id.into(),
            slugs,
            name,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
            typ: TokenType::Share,
        }
    }
}

impl TokenClaims for ShareClaims {
    const TYPE: TokenType = TokenType::Share;

    fn token_type(&self) -> TokenType {
        self.typ
    }

    fn exp(&self) -> i64 {
        self.exp
    }
}

/// Share-session cookie payload. The cookie is the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject, the link id or token the session was minted from.
    pub sub: String,
    /// Slug allow-list; `null` is unrestricted.
    #[serde(default)]
    pub slugs: SlugGrant,
    /// Display name of the source link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Always [`TokenType::Session`].
    pub typ: TokenType,
}

impl SessionClaims {
    /// Builds claims issued now and valid for `ttl`.
    pub fn new(
        source_id: impl Into<String>,
        slugs: SlugGrant,
        name: Option<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: source_id.into(),
            slugs,
            name,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            typ: TokenType::Session,
        }
    }

    /// Returns `true` if this session may view the template `slug`.
    pub fn allows(&self, slug: &str) -> bool {
        self.slugs.allows(slug)
    }
}

impl TokenClaims for SessionClaims {
    const TYPE: TokenType = TokenType::Session;

    fn token_type(&self) -> TokenType {
        self.typ
    }

    fn exp(&self) -> i64 {
        self.exp
    }
}

/// Admin credential payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject, the admin username.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Always [`TokenType::Admin`].
    pub typ: TokenType,
}

impl AdminClaims {
    /// Builds claims issued now and valid for `ttl`.
    pub fn new(username: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: username.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            typ: TokenType::Admin,
        }
    }

    /// Returns the admin username.
    pub fn username(&self) -> &str {
        &self.sub
    }
}

impl TokenClaims for AdminClaims {
    const TYPE: TokenType = TokenType::Admin;

    fn token_type(&self) -> TokenType {
        self.typ
    }

    fn exp(&self) -> i64 {
        self.exp
    }
}
