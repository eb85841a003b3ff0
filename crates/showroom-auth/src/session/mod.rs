//! Cookie-backed share sessions.

pub mod issuer;

pub use issuer::{IssuedCredential, SESSION_COOKIE, SessionIssuer};
