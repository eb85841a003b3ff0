//! # showroom-auth
//!
//! The access-control core of the showroom.
//!
//! ## Modules
//!
//! - `token`: signed, time-limited claim sets (share tokens, sessions, admin credentials)
//! - `resolver`: turns a share token or legacy link id into a slug grant
//! - `session`: mints the cookie-backed share session
//! - `admin`: admin login and credential verification
//! - `guard`: per-request allow/deny/redirect decisions

pub mod admin;
pub mod guard;
pub mod resolver;
pub mod session;
pub mod token;

pub use admin::{AdminAuthenticator, PasswordHasher};
pub use guard::{AccessGuard, Credentials, GuardDecision, GuardOutcome, PathClass, Viewer};
pub use resolver::{LinkReference, LinkRejection, LinkResolver, Resolution, ResolvedGrant};
pub use session::{IssuedCredential, SessionIssuer};
pub use token::{AdminClaims, SessionClaims, ShareClaims, TokenCodec, TokenError, TokenType};
