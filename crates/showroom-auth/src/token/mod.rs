//! Signed claim sets and the codec that produces and verifies them.

pub mod claims;
pub mod codec;
pub mod error;

pub use claims::{AdminClaims, SessionClaims, ShareClaims, TokenClaims, TokenType};
pub use codec::TokenCodec;
pub use error::TokenError;
