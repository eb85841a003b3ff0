//! Admin share link management.

pub mod service;

pub use service::{CreateLinkRequest, CreatedLink, LinkService, MintedToken};
